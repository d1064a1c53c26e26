//! Terminal detection utilities.
//!
//! Colour support follows the usual environment conventions unless the
//! application pins it with [`set_color_override`] (from `--no-color` or the
//! `color` config key).

use std::env;
use std::sync::atomic::{AtomicU8, Ordering};

const OVERRIDE_NONE: u8 = 0;
const OVERRIDE_ON: u8 = 1;
const OVERRIDE_OFF: u8 = 2;

static COLOR_OVERRIDE: AtomicU8 = AtomicU8::new(OVERRIDE_NONE);

/// Returns `true` if stdout is connected to a terminal (TTY).
pub fn is_tty() -> bool {
    crossterm::tty::IsTty::is_tty(&std::io::stdout())
}

/// Returns `true` if stdin is connected to a terminal, i.e. a person is
/// typing rather than a script piping commands in.
pub fn is_interactive() -> bool {
    crossterm::tty::IsTty::is_tty(&std::io::stdin())
}

/// Returns the terminal width in columns, defaulting to 80 if detection fails.
pub fn terminal_width() -> usize {
    crossterm::terminal::size()
        .map(|(cols, _rows)| cols as usize)
        .unwrap_or(80)
}

/// Forces colour on (`Some(true)`) or off (`Some(false)`), or restores
/// detection (`None`).
pub fn set_color_override(choice: Option<bool>) {
    let value = match choice {
        None => OVERRIDE_NONE,
        Some(true) => OVERRIDE_ON,
        Some(false) => OVERRIDE_OFF,
    };
    COLOR_OVERRIDE.store(value, Ordering::Relaxed);
}

/// Determines if ANSI color codes should be used.
///
/// An override set with [`set_color_override`] wins. Otherwise:
/// - `NO_COLOR` (any value): disables color (<https://no-color.org/>)
/// - `CLICOLOR=0`: disables color
/// - `TERM=dumb`: disables color
/// - `CLICOLOR_FORCE` (any value): forces color even in non-TTY
/// - Falls back to TTY detection
pub fn supports_color() -> bool {
    match COLOR_OVERRIDE.load(Ordering::Relaxed) {
        OVERRIDE_ON => return true,
        OVERRIDE_OFF => return false,
        _ => {}
    }

    if env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if env::var("CLICOLOR").as_deref() == Ok("0") {
        return false;
    }
    if env::var("TERM").as_deref() == Ok("dumb") {
        return false;
    }
    if env::var_os("CLICOLOR_FORCE").is_some() {
        return true;
    }
    is_tty()
}
