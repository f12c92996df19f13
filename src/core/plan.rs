//! core::plan
//!
//! Loading the plan sidecar file.
//!
//! # Read-Only Contract
//!
//! The sidecar is written once, atomically, by the host application before
//! the rebase subprocess starts. This module only ever reads it. A file that
//! exists but does not parse indicates an internal bug on the write side and
//! is an error; an absent file is not this module's concern (callers treat
//! absence as "no plan prepared" and decline).

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::types::JobPlan;

/// Errors from loading the plan sidecar.
#[derive(Debug, Error)]
pub enum PlanError {
    /// The sidecar exists but could not be read.
    #[error("failed to read plan file {path}: {source}")]
    Io {
        /// Path of the sidecar file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The sidecar exists but is not a valid plan.
    #[error("malformed plan file {path}: {message}")]
    Malformed {
        /// Path of the sidecar file.
        path: PathBuf,
        /// Parser diagnostic.
        message: String,
    },
}

/// Parse a plan from its JSON text.
///
/// Strict: the document must be an array of `{action, commitId, message}`
/// records with no unknown fields. Unknown *action tags* do parse - they
/// fold into drop, see [`crate::core::types::RebaseAction`].
///
/// # Example
///
/// ```
/// use repilot::core::plan::parse_plan;
///
/// let plan = parse_plan(r#"[{"action":"pick","commitId":"abc","message":""}]"#).unwrap();
/// assert_eq!(plan.len(), 1);
/// ```
pub fn parse_plan(json: &str) -> Result<JobPlan, serde_json::Error> {
    serde_json::from_str(json)
}

/// Load the plan from a sidecar file.
///
/// # Errors
///
/// - [`PlanError::Io`] if the file cannot be read
/// - [`PlanError::Malformed`] if the contents fail strict parsing
pub fn load_plan(path: &Path) -> Result<JobPlan, PlanError> {
    let text = std::fs::read_to_string(path).map_err(|source| PlanError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_plan(&text).map_err(|err| PlanError::Malformed {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::RebaseAction;

    #[test]
    fn parses_ordered_jobs() {
        let plan = parse_plan(
            r#"[
                {"action":"pick","commitId":"abc123","message":""},
                {"action":"reword","commitId":"def456","message":"fix typo"}
            ]"#,
        )
        .unwrap();

        assert_eq!(plan.len(), 2);
        assert_eq!(plan.get(0).unwrap().action, RebaseAction::Pick);
        assert_eq!(plan.get(1).unwrap().commit_id, "def456");
        assert_eq!(plan.get(1).unwrap().message, "fix typo");
    }

    #[test]
    fn parses_empty_plan() {
        let plan = parse_plan("[]").unwrap();
        assert!(plan.is_empty());
    }

    #[test]
    fn rejects_non_array_document() {
        assert!(parse_plan(r#"{"jobs":[]}"#).is_err());
        assert!(parse_plan("not json").is_err());
    }

    #[test]
    fn rejects_missing_fields() {
        assert!(parse_plan(r#"[{"action":"pick"}]"#).is_err());
        assert!(parse_plan(r#"[{"commitId":"abc","message":""}]"#).is_err());
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_plan(&dir.path().join("plan.json")).unwrap_err();
        assert!(matches!(err, PlanError::Io { .. }));
    }

    #[test]
    fn load_malformed_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plan.json");
        std::fs::write(&path, "{{{").unwrap();

        let err = load_plan(&path).unwrap_err();
        assert!(matches!(err, PlanError::Malformed { .. }));
        assert!(err.to_string().contains("plan.json"));
    }

    #[test]
    fn load_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plan.json");
        std::fs::write(
            &path,
            r#"[{"action":"drop","commitId":"ccc","message":""}]"#,
        )
        .unwrap();

        let plan = load_plan(&path).unwrap();
        assert_eq!(plan.len(), 1);
        assert_eq!(plan.get(0).unwrap().action, RebaseAction::Drop);
    }
}
