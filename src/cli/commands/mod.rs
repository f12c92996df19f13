//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler validates its arguments, inspects repository state
//! through the [`crate::git`] interface, and formats output. All handlers
//! are read-only.

mod completion;
mod show_plan;
mod status;

pub use completion::completion;
pub use show_plan::show_plan;
pub use status::status;

use anyhow::Result;

use crate::cli::args::Command;
use crate::cli::Context;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Status => status(ctx),
        Command::ShowPlan => show_plan(ctx),
        Command::Completion { shell } => completion(shell),
    }
}
