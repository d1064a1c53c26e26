//! The closed set of user commands.
//!
//! A [`Command`] is the keyword variant plus the raw argument string that
//! followed the keyword. Each variant has its own argument grammar:
//!
//! | keyword    | arguments                                   |
//! |------------|---------------------------------------------|
//! | `list`     | ignored                                     |
//! | `find`     | `<query>`                                   |
//! | `mark`     | `<task number>`                             |
//! | `unmark`   | `<task number>`                             |
//! | `tag`      | `<task number> <tag>...`                    |
//! | `todo`     | `<description>`                             |
//! | `deadline` | `<description> /by <date>`                  |
//! | `event`    | `<description> /from <date> /to <date>`     |
//! | `delete`   | `<task number>`                             |
//! | `upcoming` | `<deadline or event> <days>`                |
//! | `bye`      | ignored                                     |
//!
//! Task numbers are 1-based. Dates use `dd MMM yyyy`.

use std::fmt;

use chrono::{Days, Local, NaiveDate};
use zephyr_core::date::parse_date;
use zephyr_core::task::{Task, TaskType};
use zephyr_core::task_list::TaskList;

use crate::error::{CommandError, Result, ValidationError};

const DEADLINE_KEYWORD: &str = "/by";
const EVENT_FROM_KEYWORD: &str = "/from";
const EVENT_TO_KEYWORD: &str = "/to";

pub const HELP: &str = "\
I do not understand what thou art saying.
Please enter a valid command using the following:
1. list
2. find <keyword>
3. mark <task number>
4. unmark <task number>
5. tag <task number> <tags...>
6. todo <task description>
7. deadline <task description> /by <dd MMM yyyy>
8. event <task description> /from <dd MMM yyyy> /to <dd MMM yyyy>
9. upcoming <deadline|event> <days>
10. delete <task number>
11. bye - to exit the programme";

pub const GOODBYE: &str = "Goodbye! May thou have a safe journey ahead.";

/// Command variants, keyed by their keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    List,
    Find,
    Mark,
    Unmark,
    Tag,
    Todo,
    Deadline,
    Event,
    Delete,
    Upcoming,
    Bye,
    Unknown,
}

impl CommandKind {
    /// Every variant reachable from a keyword.
    pub const KEYWORDS: [CommandKind; 11] = [
        Self::List,
        Self::Find,
        Self::Mark,
        Self::Unmark,
        Self::Tag,
        Self::Todo,
        Self::Deadline,
        Self::Event,
        Self::Delete,
        Self::Upcoming,
        Self::Bye,
    ];

    /// Returns the keyword (`"unknown"` for [`CommandKind::Unknown`]).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Find => "find",
            Self::Mark => "mark",
            Self::Unmark => "unmark",
            Self::Tag => "tag",
            Self::Todo => "todo",
            Self::Deadline => "deadline",
            Self::Event => "event",
            Self::Delete => "delete",
            Self::Upcoming => "upcoming",
            Self::Bye => "bye",
            Self::Unknown => "unknown",
        }
    }

    /// Looks up a keyword case-insensitively. Anything unrecognised is
    /// [`CommandKind::Unknown`].
    pub fn from_keyword(keyword: &str) -> Self {
        Self::KEYWORDS
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(keyword))
            .unwrap_or(Self::Unknown)
    }

    /// Returns `true` if a successful run of this command changes the task list.
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Self::Mark
                | Self::Unmark
                | Self::Tag
                | Self::Todo
                | Self::Deadline
                | Self::Event
                | Self::Delete
        )
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed user request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    kind: CommandKind,
    keyword: String,
    arguments: String,
    words: Vec<String>,
}

impl Command {
    /// Creates a command of a known kind with the text after its keyword.
    pub fn new(kind: CommandKind, arguments: impl Into<String>) -> Self {
        Self::with_keyword(kind, kind.as_str(), arguments)
    }

    /// Creates a command, keeping the keyword exactly as the user typed it.
    pub fn with_keyword(
        kind: CommandKind,
        keyword: impl Into<String>,
        arguments: impl Into<String>,
    ) -> Self {
        let arguments = arguments.into();
        // Runs of whitespace count as one separator, so a double space never
        // produces an empty word.
        let words = arguments.split_whitespace().map(str::to_owned).collect();
        Self {
            kind,
            keyword: keyword.into(),
            arguments,
            words,
        }
    }

    pub fn kind(&self) -> CommandKind {
        self.kind
    }

    /// The keyword as typed.
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Everything after the keyword, verbatim.
    pub fn arguments(&self) -> &str {
        &self.arguments
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Only `bye` ends the session.
    pub fn is_exit(&self) -> bool {
        self.kind == CommandKind::Bye
    }

    /// Checks the shape of the arguments without touching any task list.
    pub fn validate(&self) -> Result<()> {
        match self.kind {
            CommandKind::List | CommandKind::Bye => {}
            CommandKind::Find => {
                self.query()?;
            }
            CommandKind::Mark => {
                self.single_task_number("mark as done")?;
            }
            CommandKind::Unmark => {
                self.single_task_number("unmark")?;
            }
            CommandKind::Tag => {
                self.tag_parts()?;
            }
            CommandKind::Todo => {
                self.todo_description()?;
            }
            CommandKind::Deadline => {
                self.deadline_parts()?;
            }
            CommandKind::Event => {
                self.event_parts()?;
            }
            CommandKind::Delete => {
                self.delete_number()?;
            }
            CommandKind::Upcoming => {
                self.upcoming_parts()?;
            }
            CommandKind::Unknown => {
                return Err(CommandError::UnknownCommand(self.keyword.clone()));
            }
        }
        Ok(())
    }

    /// Executes against `tasks` using today's local date, returning the
    /// reply text.
    pub fn execute(&self, tasks: &mut TaskList) -> Result<String> {
        self.execute_on(tasks, Local::now().date_naive())
    }

    /// Executes against `tasks` as if today were `today`.
    ///
    /// Validates first, except for unknown commands, which reply with the
    /// help text instead of failing. On error the task list is unchanged.
    pub fn execute_on(&self, tasks: &mut TaskList, today: NaiveDate) -> Result<String> {
        tracing::debug!(kind = %self.kind, arguments = %self.arguments, "executing command");
        match self.kind {
            CommandKind::List => Ok(list_reply(tasks)),
            CommandKind::Find => {
                let query = self.query()?;
                Ok(find_reply(query, &tasks.find(query)))
            }
            CommandKind::Mark => {
                let task = task_mut(tasks, self.single_task_number("mark as done")?)?;
                task.mark();
                Ok(format!("Nice! I've marked this task as done:\n  {task}"))
            }
            CommandKind::Unmark => {
                let task = task_mut(tasks, self.single_task_number("unmark")?)?;
                task.unmark();
                Ok(format!("Pity! I've unmarked this task as done:\n  {task}"))
            }
            CommandKind::Tag => {
                let (number, tags) = self.tag_parts()?;
                let task = task_mut(tasks, number)?;
                task.add_tags(tags.iter().map(String::as_str));
                Ok(format!(
                    "Thou hast tagged task {number} with {}:\n  {task}",
                    tags.join(" ")
                ))
            }
            CommandKind::Todo => {
                let task = new_task(Task::todo(self.todo_description()?), TaskType::Todo)?;
                Ok(add_task(tasks, task))
            }
            CommandKind::Deadline => {
                let (description, by) = self.deadline_parts()?;
                let by = parse_date(by)?;
                let task = new_task(Task::deadline(description, by), TaskType::Deadline)?;
                Ok(add_task(tasks, task))
            }
            CommandKind::Event => {
                let (description, from, to) = self.event_parts()?;
                let from = parse_date(from)?;
                let to = parse_date(to)?;
                if to < from {
                    return Err(CommandError::InvalidDateRange { from, to });
                }
                let task = new_task(Task::event(description, from, to), TaskType::Event)?;
                Ok(add_task(tasks, task))
            }
            CommandKind::Delete => {
                let number = self.delete_number()?;
                let index = resolve_index(number, tasks)?;
                let removed = tasks
                    .remove(index)
                    .ok_or(CommandError::OutOfRange { number, size: tasks.len() })?;
                Ok(format!(
                    "Noted. I've removed this task:\n  {removed}\nNow thou have {} tasks in the list.",
                    tasks.len()
                ))
            }
            CommandKind::Upcoming => {
                let (task_type, days) = self.upcoming_parts()?;
                Ok(upcoming_reply(tasks, task_type, days, today))
            }
            CommandKind::Bye => Ok(GOODBYE.to_owned()),
            CommandKind::Unknown => Ok(HELP.to_owned()),
        }
    }

    // -- Argument grammars --------------------------------------------------

    fn query(&self) -> std::result::Result<&str, ValidationError> {
        let query = self.arguments.trim();
        if query.is_empty() {
            return Err(ValidationError::EmptyQuery);
        }
        Ok(query)
    }

    fn single_task_number(&self, action: &'static str) -> std::result::Result<i64, ValidationError> {
        match self.words.as_slice() {
            [] => Err(ValidationError::MissingTaskNumber { action }),
            [word] => parse_task_number(word, action),
            _ => Err(ValidationError::TooManyArguments),
        }
    }

    fn delete_number(&self) -> std::result::Result<i64, ValidationError> {
        let input = self.arguments.trim();
        if input.is_empty() {
            return Err(ValidationError::MissingTaskNumber { action: "delete" });
        }
        parse_task_number(input, "delete")
    }

    fn tag_parts(&self) -> std::result::Result<(i64, &[String]), ValidationError> {
        let [first, tags @ ..] = self.words.as_slice() else {
            return Err(tag_usage());
        };
        if tags.is_empty() {
            return Err(tag_usage());
        }
        let number = parse_task_number(first, "tag")?;
        if number < 1 {
            return Err(ValidationError::TaskNumberBelowOne);
        }
        Ok((number, tags))
    }

    fn todo_description(&self) -> std::result::Result<&str, ValidationError> {
        let description = self.arguments.trim();
        if description.is_empty() {
            return Err(ValidationError::EmptyDescription(TaskType::Todo));
        }
        Ok(description)
    }

    /// Splits `<description> /by <date>`.
    fn deadline_parts(&self) -> std::result::Result<(&str, &str), ValidationError> {
        if self.arguments.trim().is_empty() {
            return Err(ValidationError::EmptyDescription(TaskType::Deadline));
        }
        if !self.arguments.contains(DEADLINE_KEYWORD) {
            return Err(ValidationError::MissingKeyword {
                command: "deadline",
                keyword: DEADLINE_KEYWORD,
            });
        }
        let (description, by) =
            self.arguments
                .split_once(" /by ")
                .ok_or(ValidationError::Malformed {
                    command: "deadline",
                    usage: "deadline <description> /by <dd MMM yyyy>",
                })?;
        let description = description.trim();
        if description.is_empty() {
            return Err(ValidationError::EmptyDescription(TaskType::Deadline));
        }
        Ok((description, by.trim()))
    }

    /// Splits `<description> /from <date> /to <date>`.
    fn event_parts(&self) -> std::result::Result<(&str, &str, &str), ValidationError> {
        const MALFORMED: ValidationError = ValidationError::Malformed {
            command: "event",
            usage: "event <description> /from <dd MMM yyyy> /to <dd MMM yyyy>",
        };
        if self.arguments.trim().is_empty() {
            return Err(ValidationError::EmptyDescription(TaskType::Event));
        }
        for keyword in [EVENT_FROM_KEYWORD, EVENT_TO_KEYWORD] {
            if !self.arguments.contains(keyword) {
                return Err(ValidationError::MissingKeyword {
                    command: "event",
                    keyword,
                });
            }
        }
        let (description, dates) = self.arguments.split_once(" /from ").ok_or(MALFORMED)?;
        let (from, to) = dates.split_once(" /to ").ok_or(MALFORMED)?;
        let description = description.trim();
        if description.is_empty() {
            return Err(ValidationError::EmptyDescription(TaskType::Event));
        }
        Ok((description, from.trim(), to.trim()))
    }

    fn upcoming_parts(&self) -> std::result::Result<(TaskType, i64), ValidationError> {
        let [task_type, days] = self.words.as_slice() else {
            return Err(ValidationError::Malformed {
                command: "upcoming",
                usage: "upcoming <deadline|event> <days>",
            });
        };
        let task_type = match TaskType::from_name(task_type) {
            Some(t @ (TaskType::Deadline | TaskType::Event)) => t,
            _ => return Err(ValidationError::InvalidTaskType(task_type.clone())),
        };
        let days = days
            .parse()
            .map_err(|_| ValidationError::InvalidDays(days.clone()))?;
        Ok((task_type, days))
    }
}

// -- Helpers -----------------------------------------------------------------

fn tag_usage() -> ValidationError {
    ValidationError::Malformed {
        command: "tag",
        usage: "tag <task number> <tags...>",
    }
}

fn parse_task_number(input: &str, action: &'static str) -> std::result::Result<i64, ValidationError> {
    input
        .parse()
        .map_err(|_| ValidationError::InvalidTaskNumber {
            action,
            input: input.to_owned(),
        })
}

/// Converts a 1-based task number into a list index.
fn resolve_index(number: i64, tasks: &TaskList) -> Result<usize> {
    usize::try_from(number)
        .ok()
        .and_then(|n| n.checked_sub(1))
        .filter(|&index| index < tasks.len())
        .ok_or(CommandError::OutOfRange {
            number,
            size: tasks.len(),
        })
}

fn task_mut(tasks: &mut TaskList, number: i64) -> Result<&mut Task> {
    let index = resolve_index(number, tasks)?;
    let size = tasks.len();
    tasks
        .get_mut(index)
        .ok_or(CommandError::OutOfRange { number, size })
}

fn new_task(
    task: std::result::Result<Task, zephyr_core::task::EmptyDescription>,
    task_type: TaskType,
) -> Result<Task> {
    task.map_err(|_| ValidationError::EmptyDescription(task_type).into())
}

fn add_task(tasks: &mut TaskList, task: Task) -> String {
    let reply = format!("Got it. I've added this task:\n  {task}");
    tasks.push(task);
    format!("{reply}\nNow thou have {} tasks in the list.", tasks.len())
}

fn list_reply(tasks: &TaskList) -> String {
    if tasks.is_empty() {
        return "There are no tasks in thine list.".to_owned();
    }
    format!("Here are the tasks in thine list:\n{}", tasks.to_string().trim_end())
}

fn find_reply(query: &str, found: &[&Task]) -> String {
    if found.is_empty() {
        return format!("No tasks in thine list match '{query}'.");
    }
    let mut reply = String::from("Here are thine search results:");
    for (i, task) in found.iter().enumerate() {
        reply.push_str(&format!("\n{}. {task}", i + 1));
    }
    reply
}

/// Lists tasks of `task_type` whose scheduled date falls strictly between
/// `today` and `today + days`, in list order.
fn upcoming_reply(tasks: &TaskList, task_type: TaskType, days: i64, today: NaiveDate) -> String {
    let horizon = match u64::try_from(days) {
        Ok(days) => today.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX),
        Err(_) => today,
    };
    let upcoming: Vec<(&Task, i64)> = tasks
        .iter()
        .filter(|task| task.task_type() == task_type)
        .filter_map(|task| {
            let date = task.scheduled_date()?;
            (date > today && date < horizon).then(|| (task, (date - today).num_days()))
        })
        .collect();

    if upcoming.is_empty() {
        return format!("Thou have no upcoming {task_type} tasks within the next {days} days.");
    }
    let mut reply = format!(
        "Thou have {} upcoming {task_type} tasks within the next {days} days.",
        upcoming.len()
    );
    for (i, (task, remaining)) in upcoming.iter().enumerate() {
        reply.push_str(&format!(
            "\n{}. {task}\n    {remaining} days until {task_type}.",
            i + 1
        ));
    }
    reply
}
