//! Clap CLI definitions for the `zephyr` command.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// zephyr -- a chatty personal task tracker.
///
/// Without a subcommand, starts an interactive session that reads commands
/// such as `todo`, `deadline`, `event`, `list` and `bye` from standard input.
#[derive(Parser, Debug)]
#[command(
    name = "zephyr",
    about = "Personal task tracker",
    long_about = "A personal task tracker. Run without a subcommand for an interactive session, \
                  or use 'zephyr exec' to run a single command.",
    version,
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Global flags available to all subcommands.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Task file (default: discover .zephyr/, else data/tasks.md).
    #[arg(long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Enable verbose/debug output.
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output (no greeting).
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Never colour output.
    #[arg(long, global = true)]
    pub no_color: bool,
}

/// All available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a single command line, e.g. `zephyr exec todo buy milk`.
    Exec(ExecArgs),

    /// Create a .zephyr directory with a default config in the current directory.
    Init(InitArgs),

    /// Generate shell completion scripts.
    Completion(CompletionArgs),
}

/// Arguments for `zephyr exec`.
#[derive(Args, Debug)]
pub struct ExecArgs {
    /// The command words, joined with single spaces.
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub words: Vec<String>,
}

/// Arguments for `zephyr init`.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(long)]
    pub force: bool,
}

/// Arguments for `zephyr completion`.
#[derive(Args, Debug)]
pub struct CompletionArgs {
    #[command(subcommand)]
    pub command: CompletionCommands,
}

/// Completion subcommands.
#[derive(Subcommand, Debug)]
pub enum CompletionCommands {
    /// Generate Bash completions.
    Bash,
    /// Generate Zsh completions.
    Zsh,
    /// Generate Fish completions.
    Fish,
    /// Generate PowerShell completions.
    Powershell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn exec_keeps_hyphenated_words() {
        let cli = Cli::parse_from(["zephyr", "--file", "t.md", "exec", "todo", "-x", "y"]);
        let Some(Commands::Exec(args)) = cli.command else {
            panic!("expected exec");
        };
        assert_eq!(args.words, vec!["todo", "-x", "y"]);
        assert_eq!(cli.global.file, Some(PathBuf::from("t.md")));
    }
}
