//! Calendar dates in the `dd MMM yyyy` text format (e.g. `17 Feb 2025`).
//!
//! The same format is used for command input, display and storage.

use chrono::NaiveDate;

/// The chrono pattern for `dd MMM yyyy`.
pub const DATE_FORMAT: &str = "%d %b %Y";

/// Human-readable form of [`DATE_FORMAT`], used in error messages.
pub const DATE_FORMAT_HINT: &str = "dd MMM yyyy";

/// A date string did not match `dd MMM yyyy`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "invalid date '{input}': please enter a date in the format '{hint}' (e.g. 21 Feb 2025)",
    hint = DATE_FORMAT_HINT
)]
pub struct DateFormatError {
    /// The text that failed to parse.
    pub input: String,
}

/// Parses a `dd MMM yyyy` date. Surrounding whitespace is ignored.
pub fn parse_date(input: &str) -> Result<NaiveDate, DateFormatError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|_| DateFormatError {
        input: input.to_owned(),
    })
}

/// Formats a date as `dd MMM yyyy`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_canonical_format() {
        let date = parse_date("17 Feb 2025").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 2, 17).unwrap());
    }

    #[test]
    fn parse_ignores_surrounding_whitespace() {
        assert!(parse_date("  03 Mar 2024 ").is_ok());
    }

    #[test]
    fn rejects_iso_format() {
        let err = parse_date("2025-02-17").unwrap_err();
        assert_eq!(err.input, "2025-02-17");
    }

    #[test]
    fn rejects_impossible_day() {
        assert!(parse_date("30 Feb 2025").is_err());
    }

    #[test]
    fn formats_with_padded_day() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        assert_eq!(format_date(date), "01 Mar 2025");
    }
}
