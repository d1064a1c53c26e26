//! Turns a raw input line into a [`Command`].

use crate::command::{Command, CommandKind};

/// Parses one input line.
///
/// The line is trimmed, then split on its first space into a keyword and
/// the remaining arguments. Keywords match case-insensitively. Parsing never
/// fails: an unrecognised keyword yields [`CommandKind::Unknown`] and the
/// error surfaces from `validate`.
pub fn parse(input: &str) -> Command {
    let input = input.trim();
    let (keyword, arguments) = input.split_once(' ').unwrap_or((input, ""));
    Command::with_keyword(CommandKind::from_keyword(keyword), keyword, arguments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn keyword_only() {
        let cmd = parse("list");
        assert_eq!(cmd.kind(), CommandKind::List);
        assert_eq!(cmd.arguments(), "");
        assert!(cmd.words().is_empty());
    }

    #[test]
    fn splits_on_first_space() {
        let cmd = parse("deadline return book /by 17 Feb 2025");
        assert_eq!(cmd.kind(), CommandKind::Deadline);
        assert_eq!(cmd.arguments(), "return book /by 17 Feb 2025");
    }

    #[test]
    fn keyword_is_case_insensitive() {
        assert_eq!(parse("TODO read").kind(), CommandKind::Todo);
        assert_eq!(parse("Bye").kind(), CommandKind::Bye);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let cmd = parse("  mark 2 \n");
        assert_eq!(cmd.kind(), CommandKind::Mark);
        assert_eq!(cmd.words(), ["2"]);
    }

    #[test]
    fn unknown_keyword_is_not_an_error() {
        let cmd = parse("frobnicate now");
        assert_eq!(cmd.kind(), CommandKind::Unknown);
        assert_eq!(cmd.keyword(), "frobnicate");
        assert!(cmd.validate().is_err());

        assert_eq!(parse("").kind(), CommandKind::Unknown);
        // A keyword glued to its argument is not recognised.
        assert_eq!(parse("todo\tread").kind(), CommandKind::Unknown);
    }
}
