//! editor::todo
//!
//! The sequence-editor callback: render the plan into Git's rebase-todo
//! line syntax and overwrite the todo file wholesale.
//!
//! # Guard Checks
//!
//! Preconditions run in order; each failure is a silent decline, not an
//! error - don't crash, don't corrupt, just leave the file alone:
//!
//! 1. the target's base name is `git-rebase-todo` (any case);
//! 2. the target sits in an existing directory named exactly `rebase-merge`
//!    (Git's own convention - its absence means Git did not create this
//!    todo context);
//! 3. the plan sidecar exists one level above `rebase-merge`.
//!
//! Only a sidecar that exists but fails to parse is fatal: that indicates a
//! bug on the write side, not an absent plan.

use std::ffi::OsStr;
use std::path::Path;

use crate::core::paths::{file_name_matches, RepilotPaths, REBASE_MERGE_DIR_NAME, TODO_FILE_NAME};
use crate::core::plan::load_plan;
use crate::core::types::JobPlan;
use crate::editor::{Decline, EditorError, Verdict};

/// Render a plan into rebase-todo lines, one `"<letter> <commitId>"` per
/// job, in plan order, each newline-terminated.
///
/// Deterministic: the same plan always renders to the same bytes.
///
/// # Example
///
/// ```
/// use repilot::core::types::{Job, JobPlan, RebaseAction};
/// use repilot::editor::todo::render_todo;
///
/// let plan = JobPlan::new(vec![
///     Job { action: RebaseAction::Pick, commit_id: "abc123".into(), message: String::new() },
///     Job { action: RebaseAction::Reword, commit_id: "def456".into(), message: "fix typo".into() },
/// ]);
/// assert_eq!(render_todo(&plan), "p abc123\nr def456\n");
/// ```
pub fn render_todo(plan: &JobPlan) -> String {
    let mut out = String::new();
    for job in plan.iter() {
        out.push_str(&job.todo_line());
        out.push('\n');
    }
    out
}

/// Service the sequence-editor callback for `todo_path`.
///
/// On success the todo file's entire contents are replaced with the rendered
/// plan. On any precondition mismatch the file is left byte-for-byte
/// untouched and the verdict says why.
///
/// # Errors
///
/// - [`EditorError::Plan`] if the sidecar exists but is unreadable or
///   malformed
/// - [`EditorError::Write`] if the rewrite itself fails
pub fn rewrite(todo_path: &Path) -> Result<Verdict, EditorError> {
    if !file_name_matches(todo_path, TODO_FILE_NAME) {
        return Ok(Verdict::Declined(Decline::WrongFileName));
    }

    let Some(rebase_dir) = todo_path.parent() else {
        return Ok(Verdict::Declined(Decline::NotARebaseDir));
    };
    if rebase_dir.file_name() != Some(OsStr::new(REBASE_MERGE_DIR_NAME)) || !rebase_dir.is_dir() {
        return Ok(Verdict::Declined(Decline::NotARebaseDir));
    }

    let base = rebase_dir.parent().unwrap_or(Path::new(""));
    let paths = RepilotPaths::new(base.to_path_buf());
    let plan_path = paths.plan_path();
    if !plan_path.is_file() {
        return Ok(Verdict::Declined(Decline::MissingPlan));
    }

    let plan = load_plan(&plan_path)?;

    std::fs::write(todo_path, render_todo(&plan)).map_err(|source| EditorError::Write {
        path: todo_path.to_path_buf(),
        source,
    })?;

    Ok(Verdict::Rewritten)
}
