//! Line codec for persisted tasks.
//!
//! Each task is stored as one line of text:
//!
//! ```text
//! - [X] D: submit report (by: 01 Mar 2025) #tags work urgent
//! ```
//!
//! The first nine characters are fixed: `- [`, the done flag (`X` or a
//! space), `] `, the type letter and `: `. The remainder holds the
//! description, the variant-specific details and an optional tag suffix.
//!
//! Decoding is best-effort: a line that fails any check is dropped rather
//! than reported, so a hand-edited or partially corrupt file still loads
//! every valid task. [`read_tasks`] additionally reports which lines were
//! dropped so callers can surface the loss.

use std::io::{self, BufRead, Write};

use chrono::NaiveDate;

use crate::date::parse_date;
use crate::task::{Task, TaskType};

/// Shortest line that can hold a valid task: `- [ ] T: x`.
const MIN_LINE_LEN: usize = 10;

/// Offset of the first content character.
const CONTENT_START: usize = 9;

const TAG_SEPARATOR: &str = " #tags ";
const DEADLINE_SEPARATOR: &str = " (by: ";
const EVENT_FROM_SEPARATOR: &str = " (from: ";
const EVENT_TO_SEPARATOR: &str = " to: ";

/// Encodes one task as a persisted line, without the trailing newline.
pub fn encode_line(task: &Task) -> String {
    format!(
        "- [{}] {}: {}{}{}",
        task.status_icon(),
        task.task_type().letter(),
        task.description(),
        task.detail_suffix(),
        task.tag_suffix()
    )
}

/// Encodes tasks as file content: one line per task, each newline-terminated.
pub fn encode(tasks: &[Task]) -> String {
    let mut out = String::new();
    for task in tasks {
        out.push_str(&encode_line(task));
        out.push('\n');
    }
    out
}

/// Writes tasks to the given writer in the persisted line format.
pub fn write_tasks<W: Write>(writer: &mut W, tasks: &[Task]) -> io::Result<()> {
    for task in tasks {
        writeln!(writer, "{}", encode_line(task))?;
    }
    writer.flush()
}

/// Decodes every line, silently dropping the ones that do not parse.
pub fn decode<'a, I>(lines: I) -> Vec<Task>
where
    I: IntoIterator<Item = &'a str>,
{
    lines.into_iter().filter_map(decode_line).collect()
}

/// Result of [`read_tasks`]: the decoded tasks plus the 1-based numbers of
/// non-empty lines that were dropped.
#[derive(Debug, Default)]
pub struct Decoded {
    pub tasks: Vec<Task>,
    pub skipped: Vec<usize>,
}

/// Reads and decodes tasks from a reader.
///
/// Empty lines are ignored. Only I/O failures are errors; malformed lines,
/// including ones that are not valid UTF-8, are recorded in
/// [`Decoded::skipped`].
pub fn read_tasks<R: BufRead>(mut reader: R) -> io::Result<Decoded> {
    let mut decoded = Decoded::default();
    let mut buf = Vec::new();
    let mut number = 0;
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        number += 1;
        let raw = buf.strip_suffix(b"\n").unwrap_or(&buf);
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        if raw.is_empty() {
            continue;
        }
        match std::str::from_utf8(raw).ok().and_then(decode_line) {
            Some(task) => decoded.tasks.push(task),
            None => decoded.skipped.push(number),
        }
    }
    Ok(decoded)
}

/// Decodes a single persisted line, returning `None` if it is malformed.
pub fn decode_line(line: &str) -> Option<Task> {
    let bytes = line.as_bytes();
    if bytes.len() < MIN_LINE_LEN || !line.starts_with("- [") {
        return None;
    }
    let done = match bytes[3] {
        b'X' => true,
        b' ' => false,
        _ => return None,
    };
    if bytes[4] != b']' || bytes[5] != b' ' {
        return None;
    }
    let task_type = TaskType::from_letter(char::from(bytes[6]))?;
    if bytes[7] != b':' || bytes[8] != b' ' {
        return None;
    }

    // Bytes 0..9 are all ASCII, so CONTENT_START is a char boundary.
    let rest = &line[CONTENT_START..];
    let (content, tags) = match rest.rfind(TAG_SEPARATOR) {
        Some(pos) => {
            let tags: Vec<&str> = rest[pos + TAG_SEPARATOR.len()..]
                .split(' ')
                .filter(|tag| !tag.is_empty())
                .collect();
            (rest[..pos].trim(), tags)
        }
        None => (rest.trim(), Vec::new()),
    };

    let mut task = match task_type {
        TaskType::Todo => Task::todo(content).ok()?,
        TaskType::Deadline => decode_deadline(content)?,
        TaskType::Event => decode_event(content)?,
    };
    if done {
        task.mark();
    }
    task.add_tags(tags);
    Some(task)
}

fn decode_deadline(content: &str) -> Option<Task> {
    let (description, rest) = content.split_once(DEADLINE_SEPARATOR)?;
    let by = closing_date(rest)?;
    Task::deadline(description, by).ok()
}

fn decode_event(content: &str) -> Option<Task> {
    let (description, rest) = content.split_once(EVENT_FROM_SEPARATOR)?;
    let (from, to) = rest.split_once(EVENT_TO_SEPARATOR)?;
    let from = parse_date(from).ok()?;
    let to = closing_date(to)?;
    Task::event(description, from, to).ok()
}

/// Parses `<date>)`, requiring the closing parenthesis.
fn closing_date(text: &str) -> Option<NaiveDate> {
    let date = text.strip_suffix(')')?;
    parse_date(date).ok()
}
