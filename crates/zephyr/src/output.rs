//! Terminal input and output for sessions.

use std::io::{self, StdinLock, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use zephyr_command::{LineSource, MessageSink, Tone};
use zephyr_ui::styles::{
    render_bold, render_error, render_muted, render_notice, render_pass_icon, render_reply,
    render_task_line,
};
use zephyr_ui::terminal::{is_interactive, terminal_width};

const PROMPT: &str = "> ";

/// Set while a session without autosave is running.
static UNSAVED_ON_INTERRUPT: AtomicBool = AtomicBool::new(false);

/// Records whether an interrupt would discard changes not yet saved.
pub fn set_unsaved_on_interrupt(unsaved: bool) {
    UNSAVED_ON_INTERRUPT.store(unsaved, Ordering::SeqCst);
}

/// The warning to print when Ctrl+C ends a session, if any.
pub fn interrupt_notice() -> Option<&'static str> {
    UNSAVED_ON_INTERRUPT
        .load(Ordering::SeqCst)
        .then_some("Interrupted: autosave is off, changes since the last save were discarded.")
}

/// Prints session messages as framed chat replies on stdout.
pub struct TerminalSink {
    width: usize,
    quiet: bool,
}

impl TerminalSink {
    pub fn new(quiet: bool) -> Self {
        Self {
            width: terminal_width(),
            quiet,
        }
    }
}

impl MessageSink for TerminalSink {
    fn emit(&mut self, tone: Tone, text: &str) {
        let rendered = match tone {
            Tone::Info if self.quiet => return,
            Tone::Info => render_notice(text, self.width),
            Tone::Reply => render_reply(text, self.width),
            Tone::Error => render_error(text, self.width),
        };
        println!("{rendered}");
    }
}

/// Reads lines from stdin, showing a prompt when a person is typing.
pub struct PromptedStdin {
    stdin: StdinLock<'static>,
    prompt: bool,
}

impl PromptedStdin {
    pub fn new() -> Self {
        Self {
            stdin: io::stdin().lock(),
            prompt: is_interactive(),
        }
    }
}

impl Default for PromptedStdin {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSource for PromptedStdin {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        if self.prompt {
            let mut stdout = io::stdout().lock();
            write!(stdout, "{}", render_muted(PROMPT))?;
            stdout.flush()?;
        }
        self.stdin.next_line()
    }
}

/// Prints a reply without a frame, for one-shot commands.
pub fn print_plain_reply(text: &str) {
    for line in text.lines() {
        println!("{}", render_task_line(line));
    }
}

/// Prints a success line with a check mark.
pub fn print_success(message: &str, detail: &str) {
    println!("{} {message} {}", render_pass_icon(), render_bold(detail));
}
