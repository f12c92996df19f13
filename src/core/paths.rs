//! core::paths
//!
//! Centralized path routing for the files this tool touches.
//!
//! # Layout
//!
//! Everything hangs off one base directory: the parent of Git's
//! `rebase-merge/` state directory, which is the repository's git dir as far
//! as the editor callbacks can see. Repilot's own data lives under
//! `<base>/repilot/`:
//!
//! - `plan.json` - the rebase plan, written by the host application
//! - `config.toml` - repository configuration
//!
//! Git owns the rest:
//!
//! - `rebase-merge/` - in-progress interactive rebase marker
//! - `rebase-merge/git-rebase-todo` - sequence-editor target
//! - `rebase-merge/done` - progress marker, one line per completed step
//! - `COMMIT_EDITMSG` - message-editor target
//!
//! No code outside this module should compute these joins directly.

use std::path::{Path, PathBuf};

/// Base name of Git's rebase todo file. Matched case-insensitively.
pub const TODO_FILE_NAME: &str = "git-rebase-todo";

/// Base name of Git's commit message file. Matched case-insensitively.
pub const COMMIT_EDITMSG_FILE_NAME: &str = "COMMIT_EDITMSG";

/// Name of Git's interactive-rebase state directory. Case-sensitive; this is
/// Git's own spelling and its presence is the rebase-in-progress marker.
pub const REBASE_MERGE_DIR_NAME: &str = "rebase-merge";

/// Name of Git's progress marker file inside `rebase-merge/`.
pub const DONE_FILE_NAME: &str = "done";

/// Check whether a path's base name equals `expected`, ignoring ASCII case.
///
/// Returns `false` for paths without a UTF-8 base name.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use repilot::core::paths::{file_name_matches, TODO_FILE_NAME};
///
/// assert!(file_name_matches(Path::new("/r/GIT-REBASE-TODO"), TODO_FILE_NAME));
/// assert!(!file_name_matches(Path::new("/r/todo.txt"), TODO_FILE_NAME));
/// ```
pub fn file_name_matches(path: &Path, expected: &str) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.eq_ignore_ascii_case(expected))
}

/// Path routing rooted at the parent of `rebase-merge/`.
///
/// # Example
///
/// ```
/// use std::path::PathBuf;
/// use repilot::core::paths::RepilotPaths;
///
/// let paths = RepilotPaths::new(PathBuf::from("/repo/.git"));
/// assert_eq!(paths.plan_path(), PathBuf::from("/repo/.git/repilot/plan.json"));
/// assert_eq!(paths.done_path(), PathBuf::from("/repo/.git/rebase-merge/done"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepilotPaths {
    base: PathBuf,
}

impl RepilotPaths {
    /// Create path routing for the given base directory.
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    /// The base directory (the git dir during a rebase).
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Repilot's data directory: `<base>/repilot`.
    pub fn repilot_dir(&self) -> PathBuf {
        self.base.join("repilot")
    }

    /// The plan sidecar file: `<base>/repilot/plan.json`.
    pub fn plan_path(&self) -> PathBuf {
        self.repilot_dir().join("plan.json")
    }

    /// The repository configuration file: `<base>/repilot/config.toml`.
    pub fn config_path(&self) -> PathBuf {
        self.repilot_dir().join("config.toml")
    }

    /// Git's interactive-rebase state directory: `<base>/rebase-merge`.
    pub fn rebase_merge_dir(&self) -> PathBuf {
        self.base.join(REBASE_MERGE_DIR_NAME)
    }

    /// Git's rebase todo file: `<base>/rebase-merge/git-rebase-todo`.
    pub fn todo_path(&self) -> PathBuf {
        self.rebase_merge_dir().join(TODO_FILE_NAME)
    }

    /// Git's progress marker: `<base>/rebase-merge/done`.
    pub fn done_path(&self) -> PathBuf {
        self.rebase_merge_dir().join(DONE_FILE_NAME)
    }
}
