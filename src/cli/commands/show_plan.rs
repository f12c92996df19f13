//! show-plan command - Print the stored rebase plan
//!
//! Renders the plan sidecar as a table: step number, action, abbreviated
//! commit id, and the first line of the planned message.

use anyhow::{Context as _, Result};

use crate::cli::Context;
use crate::core::paths::RepilotPaths;
use crate::core::plan::load_plan;
use crate::core::types::Job;
use crate::git::Repo;
use crate::ui::output;

/// Print the stored rebase plan.
pub fn show_plan(ctx: &Context) -> Result<()> {
    let start = ctx.start_dir()?;
    let repo = Repo::discover(&start).context("repository discovery failed")?;

    let paths = RepilotPaths::new(repo.git_dir().to_path_buf());
    let plan_path = paths.plan_path();
    if !plan_path.is_file() {
        output::print("No rebase plan is stored for this repository.", ctx.verbosity);
        return Ok(());
    }

    let plan = load_plan(&plan_path).context("stored plan is unreadable")?;
    if plan.is_empty() {
        output::print("The stored plan has no steps.", ctx.verbosity);
        return Ok(());
    }

    for (index, job) in plan.iter().enumerate() {
        output::print(format_row(index, job), ctx.verbosity);
    }

    Ok(())
}

/// Format one plan row: `"  2  reword  def456a     fix typo"`.
fn format_row(index: usize, job: &Job) -> String {
    format!(
        "{:>3}  {:<7} {:<12} {}",
        index + 1,
        job.action.tag(),
        abbreviate(&job.commit_id),
        job.message.lines().next().unwrap_or("")
    )
}

/// Abbreviate a commit id to at most 10 characters for display.
fn abbreviate(commit_id: &str) -> &str {
    commit_id.get(..10).unwrap_or(commit_id)
}
