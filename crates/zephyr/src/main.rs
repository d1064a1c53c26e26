//! `zephyr` -- a chatty personal task tracker.
//!
//! Parses CLI arguments with clap, resolves the runtime context, and
//! dispatches to command handlers. With no subcommand it runs an interactive
//! session on stdin.

mod cli;
mod commands;
mod context;
mod output;

use std::sync::atomic::{AtomicBool, Ordering};

use clap::Parser;

use cli::{Cli, Commands};
use context::RuntimeContext;

/// Log filter used with `--verbose`.
const VERBOSE_FILTER: &str = "zephyr=debug,zephyr_command=debug,zephyr_storage=debug";

/// Tracks whether a Ctrl+C has already been received.
static CTRLC_RECEIVED: AtomicBool = AtomicBool::new(false);

fn main() {
    // First Ctrl+C: exit cleanly without saving. Second: force exit.
    let _ = ctrlc::set_handler(|| {
        if CTRLC_RECEIVED.swap(true, Ordering::SeqCst) {
            std::process::exit(1);
        }
        if let Some(notice) = output::interrupt_notice() {
            eprintln!("\n{notice}");
        }
        std::process::exit(0);
    });

    let cli = Cli::parse();

    if cli.global.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(VERBOSE_FILTER)
            .with_writer(std::io::stderr)
            .init();
    }

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let ctx = RuntimeContext::from_global_args(&cli.global)?;

    match cli.command {
        None => commands::repl::run(&ctx),
        Some(Commands::Exec(args)) => commands::exec::run(&ctx, &args),
        Some(Commands::Init(args)) => commands::init::run(&ctx, &args),
        Some(Commands::Completion(args)) => commands::completion::run(&ctx, &args),
    }
}
