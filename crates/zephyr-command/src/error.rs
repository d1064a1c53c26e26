//! Command error types.
//!
//! Every error here is user-facing and recoverable: it ends the current
//! command only, and its `Display` text is shown to the user as-is.

use chrono::NaiveDate;
use zephyr_core::date::{DateFormatError, format_date};
use zephyr_core::task::TaskType;

/// The argument string of a command has the wrong shape.
///
/// Raised by `Command::validate`, which never looks at the task list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("the description of a {0} cannot be empty")]
    EmptyDescription(TaskType),

    #[error("the {command} command must contain a '{keyword}' keyword")]
    MissingKeyword {
        command: &'static str,
        keyword: &'static str,
    },

    #[error("invalid {command} command, use '{usage}'")]
    Malformed {
        command: &'static str,
        usage: &'static str,
    },

    #[error("please enter a task number to {action}")]
    MissingTaskNumber { action: &'static str },

    #[error("there are more arguments than expected")]
    TooManyArguments,

    #[error("please enter a valid task number to {action} (got '{input}')")]
    InvalidTaskNumber { action: &'static str, input: String },

    #[error("task number needs to be 1 and above")]
    TaskNumberBelowOne,

    #[error("the search keyword cannot be empty")]
    EmptyQuery,

    #[error("invalid task type '{0}', use deadline or event")]
    InvalidTaskType(String),

    #[error("thou must input a valid number of days (got '{0}')")]
    InvalidDays(String),
}

/// Errors raised while validating or executing a command.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The task number has a valid shape but no task exists at it.
    #[error("task number {number} is out of range (thou have {size} tasks in the list)")]
    OutOfRange { number: i64, size: usize },

    #[error(transparent)]
    DateFormat(#[from] DateFormatError),

    #[error(
        "to date ({}) cannot be earlier than from date ({})",
        format_date(*.to),
        format_date(*.from)
    )]
    InvalidDateRange { from: NaiveDate, to: NaiveDate },

    #[error("I do not understand '{0}'. Type 'help' to see what I can do")]
    UnknownCommand(String),
}

/// Result alias for command operations.
pub type Result<T> = std::result::Result<T, CommandError>;

impl CommandError {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn messages_read_naturally() {
        let err = CommandError::from(ValidationError::EmptyDescription(TaskType::Todo));
        assert_eq!(err.to_string(), "the description of a todo cannot be empty");
        assert!(err.is_validation());

        let err = CommandError::OutOfRange { number: 6, size: 5 };
        assert_eq!(
            err.to_string(),
            "task number 6 is out of range (thou have 5 tasks in the list)"
        );
        assert!(err.is_out_of_range());
    }

    #[test]
    fn date_range_message_uses_display_format() {
        let err = CommandError::InvalidDateRange {
            from: NaiveDate::from_ymd_opt(2025, 3, 5).unwrap(),
            to: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "to date (01 Mar 2025) cannot be earlier than from date (05 Mar 2025)"
        );
    }
}
