//! Colour styling for zephyr terminal output.
//!
//! Replies are framed between two light separators and indented, the way
//! the chat bot has always printed them. Done tasks are dimmed, errors are
//! red with a cross, notices are blue.

use owo_colors::OwoColorize;

use crate::terminal::supports_color;

// Ayu Dark palette
const PASS: (u8, u8, u8) = (0xc2, 0xd9, 0x4c); // #c2d94c
const FAIL: (u8, u8, u8) = (0xf0, 0x71, 0x78); // #f07178
const MUTED: (u8, u8, u8) = (0x6c, 0x76, 0x80); // #6c7680
const ACCENT: (u8, u8, u8) = (0x59, 0xc2, 0xff); // #59c2ff
const DONE: (u8, u8, u8) = (0x80, 0x90, 0xa0); // #8090a0

pub const ICON_PASS: &str = "\u{2713}"; // ✓
pub const ICON_FAIL: &str = "\u{2716}"; // ✖
pub const SEPARATOR_CHAR: char = '\u{2500}'; // ─

/// Widest a separator gets, whatever the terminal size.
pub const MAX_SEPARATOR_WIDTH: usize = 60;

/// Indent for every line inside a frame.
pub const FRAME_INDENT: &str = "    ";

const DONE_MARK: &str = "][X]";

/// Applies truecolor foreground to a string, falling back to plain text
/// when color is not supported.
fn color_str(s: &str, rgb: (u8, u8, u8)) -> String {
    if supports_color() {
        s.truecolor(rgb.0, rgb.1, rgb.2).to_string()
    } else {
        s.to_string()
    }
}

pub fn render_pass(s: &str) -> String {
    color_str(s, PASS)
}

pub fn render_fail(s: &str) -> String {
    color_str(s, FAIL)
}

pub fn render_muted(s: &str) -> String {
    color_str(s, MUTED)
}

pub fn render_accent(s: &str) -> String {
    color_str(s, ACCENT)
}

pub fn render_bold(s: &str) -> String {
    if supports_color() {
        s.bold().to_string()
    } else {
        s.to_string()
    }
}

pub fn render_pass_icon() -> String {
    render_pass(ICON_PASS)
}

/// A light separator of `width` columns, capped at [`MAX_SEPARATOR_WIDTH`].
pub fn render_separator(width: usize) -> String {
    let line = SEPARATOR_CHAR.to_string().repeat(width.min(MAX_SEPARATOR_WIDTH));
    render_muted(&line)
}

/// Dims a task display line whose done mark is set.
pub fn render_task_line(line: &str) -> String {
    if line.contains(DONE_MARK) {
        color_str(line, DONE)
    } else {
        line.to_string()
    }
}

/// Frames `body` between separators, indenting every line.
pub fn render_frame(body: &str, width: usize) -> String {
    let separator = render_separator(width);
    let mut out = String::new();
    out.push_str(&separator);
    out.push('\n');
    for line in body.lines() {
        out.push_str(FRAME_INDENT);
        out.push_str(line);
        out.push('\n');
    }
    out.push_str(&separator);
    out
}

/// A framed reply to a command, with done tasks dimmed.
pub fn render_reply(text: &str, width: usize) -> String {
    let body: Vec<String> = text.lines().map(render_task_line).collect();
    render_frame(&body.join("\n"), width)
}

/// A framed error message.
pub fn render_error(text: &str, width: usize) -> String {
    let body = format!("{} {}", render_fail(ICON_FAIL), render_fail(text));
    render_frame(&body, width)
}

/// A framed greeting or notice.
pub fn render_notice(text: &str, width: usize) -> String {
    let body: Vec<String> = text.lines().map(render_accent).collect();
    render_frame(&body.join("\n"), width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::set_color_override;
    use pretty_assertions::assert_eq;

    fn plain() {
        set_color_override(Some(false));
    }

    #[test]
    fn separator_is_capped() {
        plain();
        assert_eq!(render_separator(5).chars().count(), 5);
        assert_eq!(render_separator(500).chars().count(), MAX_SEPARATOR_WIDTH);
    }

    #[test]
    fn reply_is_framed_and_indented() {
        plain();
        let framed = render_reply("Here are the tasks in thine list:\n1. [T][X] read", 4);
        insta::assert_snapshot!(
            framed.replace('\n', "|"),
            @"────|    Here are the tasks in thine list:|    1. [T][X] read|────"
        );
    }

    #[test]
    fn error_carries_icon() {
        plain();
        let framed = render_error("task number 9 is out of range", 3);
        assert_eq!(framed, "───\n    ✖ task number 9 is out of range\n───");
    }

    #[test]
    fn task_lines_without_done_mark_are_untouched() {
        plain();
        assert_eq!(render_task_line("1. [T][ ] read"), "1. [T][ ] read");
        assert!(render_notice("Hello", 2).contains("    Hello"));
    }
}
