//! status command - Show the repository's rebase state and plan status
//!
//! Reports whether a rebase is in progress, whether a plan sidecar is
//! present, and whether the plan and Git's progress marker agree.

use anyhow::{Context as _, Result};

use crate::cli::Context;
use crate::core::paths::RepilotPaths;
use crate::core::plan::load_plan;
use crate::editor::message::completed_steps;
use crate::git::Repo;
use crate::ui::output;

/// Show the repository's rebase state and plan status.
pub fn status(ctx: &Context) -> Result<()> {
    let start = ctx.start_dir()?;
    let repo = Repo::discover(&start).context("repository discovery failed")?;

    let state = repo.state();
    output::print(output::field("State", state), ctx.verbosity);

    let paths = RepilotPaths::new(repo.git_dir().to_path_buf());
    let plan_path = paths.plan_path();
    if !plan_path.is_file() {
        output::print(output::field("Plan", "none"), ctx.verbosity);
        return Ok(());
    }

    match load_plan(&plan_path) {
        Ok(plan) => {
            output::print(
                output::field("Plan", format!("{} steps", plan.len())),
                ctx.verbosity,
            );

            let done_path = paths.done_path();
            if done_path.is_file() {
                let completed = completed_steps(&done_path)
                    .context("failed to read Git's progress marker")?;
                output::print(
                    output::field("Progress", format!("{}/{} steps", completed, plan.len())),
                    ctx.verbosity,
                );
                if completed > plan.len() {
                    output::warn(
                        "progress marker has advanced beyond the plan; the \
                         message editor will decline further rewrites",
                        ctx.verbosity,
                    );
                }
            }
        }
        Err(err) => {
            // Surface it but keep going: status is diagnostic, and a broken
            // plan is exactly what the user wants to hear about.
            output::print(output::field("Plan", "unreadable"), ctx.verbosity);
            output::error(err);
        }
    }

    Ok(())
}
