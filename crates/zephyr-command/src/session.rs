//! The interactive request/response loop.
//!
//! A [`Session`] owns the task list and the store it was loaded from. Input
//! arrives one line at a time through a [`LineSource`]; every reply, error
//! and notice goes out through a [`MessageSink`], tagged with a [`Tone`] so
//! the front end can style it.

use std::io::{self, BufRead};

use chrono::NaiveDate;
use zephyr_core::task_list::TaskList;
use zephyr_storage::{StorageError, TaskStore};

use crate::command::Command;
use crate::parser::parse;

pub const WELCOME: &str = "Hello! I'm Zephyr.\nWhat can I do for thee?";

/// How a message should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Greetings and notices that are not a reply to a command.
    Info,
    Reply,
    Error,
}

/// Somewhere to send messages, e.g. a terminal or a chat widget.
pub trait MessageSink {
    fn emit(&mut self, tone: Tone, text: &str);
}

impl MessageSink for Vec<(Tone, String)> {
    fn emit(&mut self, tone: Tone, text: &str) {
        self.push((tone, text.to_owned()));
    }
}

/// Somewhere to read input lines from. `Ok(None)` means end of input.
pub trait LineSource {
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

/// Bytes that are not valid UTF-8 are replaced with U+FFFD rather than
/// failing the read.
impl<R: BufRead> LineSource for R {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let mut line = String::from_utf8_lossy(&buf).into_owned();
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// Save after every command that changed the list.
    pub autosave: bool,
    /// Greet the user when [`Session::run`] starts.
    pub welcome: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            autosave: true,
            welcome: true,
        }
    }
}

/// The outcome of one input line.
#[derive(Debug)]
pub struct Response {
    pub message: String,
    pub tone: Tone,
    /// The user asked to end the session.
    pub exit: bool,
    /// Set when an autosave after this command failed. The in-memory list
    /// still holds the change.
    pub save_error: Option<StorageError>,
}

impl Response {
    pub fn is_error(&self) -> bool {
        self.tone == Tone::Error
    }
}

pub struct Session<S: TaskStore> {
    store: S,
    tasks: TaskList,
    options: SessionOptions,
    load_error: Option<StorageError>,
    dirty: bool,
    today: Option<NaiveDate>,
}

impl<S: TaskStore> Session<S> {
    /// Loads the task list from `store`.
    ///
    /// A failed load is not fatal: the session starts empty and the error is
    /// kept so it can be reported once, see [`Session::load_error`]. Such a
    /// session never writes to the store.
    pub fn open(store: S, options: SessionOptions) -> Self {
        let (tasks, load_error) = match store.load() {
            Ok(tasks) => (TaskList::from(tasks), None),
            Err(e) => {
                tracing::warn!(error = %e, "failed to load tasks, starting empty");
                (TaskList::new(), Some(e))
            }
        };
        Self {
            store,
            tasks,
            options,
            load_error,
            dirty: false,
            today: None,
        }
    }

    /// Pins the date used by date-relative commands instead of the local date.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn load_error(&self) -> Option<&StorageError> {
        self.load_error.as_ref()
    }

    /// Returns `true` if there are changes not yet written to the store.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Handles a single input line.
    pub fn respond(&mut self, input: &str) -> Response {
        let command = parse(input);
        let result = self.execute(&command);
        tracing::debug!(kind = %command.kind(), ok = result.is_ok(), "handled input");

        match result {
            Ok(message) => {
                let mut save_error = None;
                if command.kind().is_mutating() {
                    self.dirty = true;
                    if self.options.autosave && self.load_error.is_none() {
                        save_error = self.save().err();
                    }
                }
                Response {
                    message,
                    tone: Tone::Reply,
                    exit: command.is_exit(),
                    save_error,
                }
            }
            Err(e) => Response {
                message: e.to_string(),
                tone: Tone::Error,
                exit: false,
                save_error: None,
            },
        }
    }

    /// Writes the whole list to the store.
    ///
    /// Fails with [`StorageError::NotLoaded`] if the initial load failed.
    pub fn save(&mut self) -> zephyr_storage::Result<()> {
        if self.load_error.is_some() {
            return Err(StorageError::NotLoaded);
        }
        if let Err(e) = self.store.save(self.tasks.as_slice()) {
            tracing::warn!(error = %e, "failed to save tasks");
            return Err(e);
        }
        self.dirty = false;
        Ok(())
    }

    /// Reads and answers lines until `bye` or end of input, then saves.
    ///
    /// Only a failure to read input ends the loop early, and the list is
    /// still saved before that error is returned. When the initial load
    /// failed the store is left untouched so its content is not replaced by
    /// an empty list.
    pub fn run<L, M>(&mut self, input: &mut L, sink: &mut M) -> io::Result<()>
    where
        L: LineSource + ?Sized,
        M: MessageSink + ?Sized,
    {
        if self.options.welcome {
            sink.emit(Tone::Info, WELCOME);
        }
        if let Some(e) = &self.load_error {
            sink.emit(
                Tone::Error,
                &format!(
                    "could not load thine tasks ({e}), starting with an empty list \
                     that will not be saved"
                ),
            );
        }

        let result = self.answer_lines(input, sink);

        if self.load_error.is_none() {
            if let Err(e) = self.save() {
                sink.emit(Tone::Error, &format!("could not save thine tasks: {e}"));
            }
        }
        result
    }

    fn answer_lines<L, M>(&mut self, input: &mut L, sink: &mut M) -> io::Result<()>
    where
        L: LineSource + ?Sized,
        M: MessageSink + ?Sized,
    {
        while let Some(line) = input.next_line()? {
            let response = self.respond(&line);
            sink.emit(response.tone, &response.message);
            if let Some(e) = &response.save_error {
                sink.emit(Tone::Error, &format!("could not save thine tasks: {e}"));
            }
            if response.exit {
                break;
            }
        }
        Ok(())
    }

    fn execute(&mut self, command: &Command) -> crate::Result<String> {
        match self.today {
            Some(today) => command.execute_on(&mut self.tasks, today),
            None => command.execute(&mut self.tasks),
        }
    }
}
