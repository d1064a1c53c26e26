//! Task struct -- the central domain model for the zephyr tracker.
//!
//! A task is one of three variants (to-do, deadline, event) sharing a
//! description, a done flag and an ordered list of tags.

use std::fmt;

use chrono::NaiveDate;

use crate::date::format_date;

/// A task was constructed with an empty or whitespace-only description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("the description of a task cannot be empty")]
pub struct EmptyDescription;

/// The three task variants, without their payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskType {
    Todo,
    Deadline,
    Event,
}

impl TaskType {
    /// Returns the lowercase type name (`todo`, `deadline`, `event`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::Deadline => "deadline",
            Self::Event => "event",
        }
    }

    /// Returns the single-letter code used in display strings and storage.
    pub fn letter(&self) -> char {
        match self {
            Self::Todo => 'T',
            Self::Deadline => 'D',
            Self::Event => 'E',
        }
    }

    /// Looks up a type by its single-letter code.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'T' => Some(Self::Todo),
            'D' => Some(Self::Deadline),
            'E' => Some(Self::Event),
            _ => None,
        }
    }

    /// Looks up a type by its exact lowercase name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "todo" => Some(Self::Todo),
            "deadline" => Some(Self::Deadline),
            "event" => Some(Self::Event),
            _ => None,
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Variant-specific payload of a task.
///
/// No ordering is enforced between an event's `from` and `to` dates here;
/// the command layer decides whether reversed ranges are acceptable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskKind {
    Todo,
    Deadline { by: NaiveDate },
    Event { from: NaiveDate, to: NaiveDate },
}

impl TaskKind {
    pub fn task_type(&self) -> TaskType {
        match self {
            Self::Todo => TaskType::Todo,
            Self::Deadline { .. } => TaskType::Deadline,
            Self::Event { .. } => TaskType::Event,
        }
    }
}

/// A user-tracked item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    description: String,
    done: bool,
    tags: Vec<String>,
    kind: TaskKind,
}

impl Task {
    /// Creates a not-done, untagged task.
    pub fn new(description: impl Into<String>, kind: TaskKind) -> Result<Self, EmptyDescription> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(EmptyDescription);
        }
        Ok(Self {
            description,
            done: false,
            tags: Vec::new(),
            kind,
        })
    }

    pub fn todo(description: impl Into<String>) -> Result<Self, EmptyDescription> {
        Self::new(description, TaskKind::Todo)
    }

    pub fn deadline(
        description: impl Into<String>,
        by: NaiveDate,
    ) -> Result<Self, EmptyDescription> {
        Self::new(description, TaskKind::Deadline { by })
    }

    pub fn event(
        description: impl Into<String>,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Self, EmptyDescription> {
        Self::new(description, TaskKind::Event { from, to })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }

    pub fn task_type(&self) -> TaskType {
        self.kind.task_type()
    }

    /// The date a task is scheduled around: a deadline's due date or an
    /// event's start date. To-dos have none.
    pub fn scheduled_date(&self) -> Option<NaiveDate> {
        match self.kind {
            TaskKind::Todo => None,
            TaskKind::Deadline { by } => Some(by),
            TaskKind::Event { from, .. } => Some(from),
        }
    }

    /// Marks the task as done. Marking a done task again is a no-op.
    pub fn mark(&mut self) {
        self.done = true;
    }

    pub fn unmark(&mut self) {
        self.done = false;
    }

    /// Appends tags in order. Duplicates are kept.
    pub fn add_tags<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
    }

    /// `X` when done, a single space otherwise.
    pub fn status_icon(&self) -> char {
        if self.done { 'X' } else { ' ' }
    }

    /// Variant-specific suffix shared by the display string and the persisted
    /// line, including its leading space (empty for to-dos).
    pub(crate) fn detail_suffix(&self) -> String {
        match self.kind {
            TaskKind::Todo => String::new(),
            TaskKind::Deadline { by } => format!(" (by: {})", format_date(by)),
            TaskKind::Event { from, to } => {
                format!(" (from: {} to: {})", format_date(from), format_date(to))
            }
        }
    }

    /// ` #tags a b` when the task has tags, empty otherwise.
    pub(crate) fn tag_suffix(&self) -> String {
        if self.tags.is_empty() {
            String::new()
        } else {
            format!(" #tags {}", self.tags.join(" "))
        }
    }
}

/// Renders the display string, e.g. `[D][X] submit report (by: 01 Mar 2025)`.
impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}][{}] {}{}{}",
            self.task_type().letter(),
            self.status_icon(),
            self.description,
            self.detail_suffix(),
            self.tag_suffix()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn new_task_is_not_done_and_untagged() {
        let task = Task::todo("read book").unwrap();
        assert!(!task.is_done());
        assert!(task.tags().is_empty());
        assert_eq!(task.task_type(), TaskType::Todo);
    }

    #[test]
    fn blank_description_is_rejected() {
        assert_eq!(Task::todo(""), Err(EmptyDescription));
        assert_eq!(Task::deadline("   ", date(2025, 1, 1)), Err(EmptyDescription));
    }

    #[test]
    fn mark_is_idempotent() {
        let mut task = Task::todo("x").unwrap();
        task.mark();
        task.mark();
        assert!(task.is_done());
        task.unmark();
        assert!(!task.is_done());
    }

    #[test]
    fn tags_keep_order_and_duplicates() {
        let mut task = Task::todo("x").unwrap();
        task.add_tags(["b", "a"]);
        task.add_tags(vec!["b".to_string()]);
        assert_eq!(task.tags(), ["b", "a", "b"]);
    }

    #[test]
    fn todo_display() {
        let mut task = Task::todo("buy milk").unwrap();
        insta::assert_snapshot!(task.to_string(), @"[T][ ] buy milk");
        task.mark();
        task.add_tags(["urgent", "home"]);
        insta::assert_snapshot!(task.to_string(), @"[T][X] buy milk #tags urgent home");
    }

    #[test]
    fn deadline_display() {
        let task = Task::deadline("submit report", date(2025, 3, 1)).unwrap();
        insta::assert_snapshot!(task.to_string(), @"[D][ ] submit report (by: 01 Mar 2025)");
    }

    #[test]
    fn event_display() {
        let task = Task::event("conference", date(2025, 4, 10), date(2025, 4, 12)).unwrap();
        insta::assert_snapshot!(
            task.to_string(),
            @"[E][ ] conference (from: 10 Apr 2025 to: 12 Apr 2025)"
        );
    }

    #[test]
    fn scheduled_date_per_variant() {
        assert_eq!(Task::todo("x").unwrap().scheduled_date(), None);
        let deadline = Task::deadline("x", date(2025, 1, 2)).unwrap();
        assert_eq!(deadline.scheduled_date(), Some(date(2025, 1, 2)));
        let event = Task::event("x", date(2025, 1, 3), date(2025, 1, 1)).unwrap();
        assert_eq!(event.scheduled_date(), Some(date(2025, 1, 3)));
    }

    #[test]
    fn type_lookup() {
        assert_eq!(TaskType::from_letter('D'), Some(TaskType::Deadline));
        assert_eq!(TaskType::from_letter('X'), None);
        assert_eq!(TaskType::from_name("event"), Some(TaskType::Event));
        assert_eq!(TaskType::from_name("Event"), None);
    }
}
