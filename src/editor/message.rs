//! editor::message
//!
//! The message-editor callback: resolve which planned step is currently in
//! flight from Git's progress marker, and overwrite the commit message file
//! with that step's message.
//!
//! # The Off-By-One Contract
//!
//! `rebase-merge/done` accumulates one line per *completed* step, and Git
//! appends the in-flight step's line before invoking the message editor for
//! it. So with `completed` non-empty lines in the marker, the job whose
//! message belongs in this invocation is `plan[completed - 1]` - never
//! `plan[completed]`. A marker with zero lines would index job −1; that
//! boundary and `completed > plan.len()` are both treated as a
//! plan/progress desync, which declines rather than fails: the rebase
//! itself is still Git's responsibility.

use std::path::Path;

use crate::core::config::Config;
use crate::core::paths::{file_name_matches, RepilotPaths, COMMIT_EDITMSG_FILE_NAME};
use crate::core::plan::load_plan;
use crate::editor::{Decline, EditorError, Verdict};

/// Count completed steps: non-empty lines in Git's progress marker.
///
/// # Errors
///
/// [`EditorError::Progress`] if the marker cannot be read.
pub fn completed_steps(done_path: &Path) -> Result<usize, EditorError> {
    let text = std::fs::read_to_string(done_path).map_err(|source| EditorError::Progress {
        path: done_path.to_path_buf(),
        source,
    })?;

    Ok(text.lines().filter(|line| !line.trim().is_empty()).count())
}

/// Service the message-editor callback for `msg_path`.
///
/// On success the message file's entire contents are replaced with the
/// current job's message, verbatim - no newline processing beyond what the
/// message itself contains. On any precondition mismatch the file is left
/// byte-for-byte untouched.
///
/// # Errors
///
/// - [`EditorError::Plan`] if the sidecar exists but is unreadable or
///   malformed
/// - [`EditorError::Config`] if the config file exists but is malformed
/// - [`EditorError::Progress`] if the progress marker cannot be read
/// - [`EditorError::ProgressDesync`] on a plan/progress mismatch when
///   `strict_progress` is enabled
/// - [`EditorError::Write`] if the rewrite itself fails
pub fn rewrite(msg_path: &Path) -> Result<Verdict, EditorError> {
    if !file_name_matches(msg_path, COMMIT_EDITMSG_FILE_NAME) {
        return Ok(Verdict::Declined(Decline::WrongFileName));
    }

    let base = msg_path.parent().unwrap_or(Path::new(""));
    let paths = RepilotPaths::new(base.to_path_buf());

    let plan_path = paths.plan_path();
    if !plan_path.is_file() {
        return Ok(Verdict::Declined(Decline::MissingPlan));
    }

    let done_path = paths.done_path();
    if !done_path.is_file() {
        return Ok(Verdict::Declined(Decline::MissingProgressMarker));
    }

    let plan = load_plan(&plan_path)?;
    let completed = completed_steps(&done_path)?;

    // completed is one-based over finished steps; the in-flight step is the
    // last counted one. checked_sub covers the zero-progress boundary, get
    // covers completed > plan.len().
    let current = completed.checked_sub(1).and_then(|index| plan.get(index));
    let Some(job) = current else {
        let config = Config::load(&paths.config_path())?;
        if config.strict_progress {
            return Err(EditorError::ProgressDesync {
                completed,
                planned: plan.len(),
            });
        }
        return Ok(Verdict::Declined(Decline::ProgressOutOfRange {
            completed,
            planned: plan.len(),
        }));
    };

    std::fs::write(msg_path, job.message.as_bytes()).map_err(|source| EditorError::Write {
        path: msg_path.to_path_buf(),
        source,
    })?;

    Ok(Verdict::Rewritten)
}
