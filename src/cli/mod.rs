//! cli
//!
//! Command-line interface layer for Repilot's normal launch path.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Delegate to command handlers
//! - Read-only: no command here mutates repository state
//!
//! # Architecture
//!
//! The CLI layer only ever runs when the editor dispatcher in
//! [`crate::editor`] did not recognize the invocation - the fixed editor
//! flags must never reach the argument parser. The mutating side of the
//! protocol (writing the plan, launching `git rebase -i`) belongs to the
//! host application.

pub mod args;
pub mod commands;

pub use args::Cli;

use std::path::PathBuf;

use anyhow::Result;

use crate::ui::output::Verbosity;

/// Execution context shared by command handlers.
#[derive(Debug, Clone)]
pub struct Context {
    /// Directory to run from, if overridden with `--cwd`.
    pub cwd: Option<PathBuf>,
    /// Output verbosity derived from `--quiet` / `--debug`.
    pub verbosity: Verbosity,
}

impl Context {
    /// Resolve the directory commands should start repository discovery
    /// from.
    pub fn start_dir(&self) -> Result<PathBuf> {
        match &self.cwd {
            Some(dir) => Ok(dir.clone()),
            None => Ok(std::env::current_dir()?),
        }
    }
}

/// Run the CLI application.
///
/// This is the normal-startup entry point called from `main.rs` after the
/// editor dispatcher declined the invocation.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let ctx = Context {
        cwd: cli.cwd.clone(),
        verbosity: Verbosity::from_flags(cli.quiet, cli.debug),
    };

    commands::dispatch(cli.command, &ctx)
}
