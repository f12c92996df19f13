//! git::interface
//!
//! Read-only repository inspection over libgit2.

use std::path::Path;

use thiserror::Error;

use crate::core::paths::REBASE_MERGE_DIR_NAME;

/// Errors from repository inspection.
#[derive(Debug, Error)]
pub enum GitError {
    /// No repository was found at or above the given path.
    #[error("not a git repository (or any parent): {path}")]
    NotARepository {
        /// The path discovery started from.
        path: String,
    },

    /// libgit2 reported an unexpected failure.
    #[error("git error: {message}")]
    Internal {
        /// libgit2's diagnostic.
        message: String,
    },
}

/// The repository's current operation state, as far as this tool cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoState {
    /// No operation in progress.
    Clean,
    /// An interactive rebase is in progress.
    Rebase {
        /// Current step (1-indexed), if Git recorded it.
        current: Option<usize>,
        /// Total steps, if Git recorded it.
        total: Option<usize>,
    },
    /// Some other operation (merge, cherry-pick, ...) is in progress.
    Other,
}

impl RepoState {
    /// Whether an interactive rebase is in progress.
    pub fn is_rebasing(&self) -> bool {
        matches!(self, RepoState::Rebase { .. })
    }
}

impl std::fmt::Display for RepoState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RepoState::Clean => write!(f, "clean"),
            RepoState::Rebase {
                current: Some(c),
                total: Some(t),
            } => write!(f, "rebase in progress ({c}/{t})"),
            RepoState::Rebase { .. } => write!(f, "rebase in progress"),
            RepoState::Other => write!(f, "another operation in progress"),
        }
    }
}

/// A discovered repository.
pub struct Repo {
    repo: git2::Repository,
}

impl Repo {
    /// Discover the repository containing `path`.
    ///
    /// # Errors
    ///
    /// [`GitError::NotARepository`] if discovery walks off the filesystem
    /// without finding one.
    pub fn discover(path: &Path) -> Result<Self, GitError> {
        let repo = git2::Repository::discover(path).map_err(|err| {
            if err.code() == git2::ErrorCode::NotFound {
                GitError::NotARepository {
                    path: path.display().to_string(),
                }
            } else {
                GitError::Internal {
                    message: err.message().to_string(),
                }
            }
        })?;

        Ok(Self { repo })
    }

    /// The repository's git dir (where `rebase-merge/` and the plan sidecar
    /// live during a rebase).
    pub fn git_dir(&self) -> &Path {
        self.repo.path()
    }

    /// The repository's current operation state.
    ///
    /// For an in-progress rebase, step counters come from Git's own
    /// `rebase-merge/msgnum` and `rebase-merge/end` files.
    pub fn state(&self) -> RepoState {
        match self.repo.state() {
            git2::RepositoryState::Clean => RepoState::Clean,
            git2::RepositoryState::Rebase
            | git2::RepositoryState::RebaseInteractive
            | git2::RepositoryState::RebaseMerge => {
                let (current, total) = self.rebase_progress();
                RepoState::Rebase { current, total }
            }
            _ => RepoState::Other,
        }
    }

    /// Read step counters from `rebase-merge/msgnum` and `rebase-merge/end`.
    fn rebase_progress(&self) -> (Option<usize>, Option<usize>) {
        let rebase_merge = self.git_dir().join(REBASE_MERGE_DIR_NAME);
        if !rebase_merge.exists() {
            return (None, None);
        }

        let read_counter = |name: &str| {
            std::fs::read_to_string(rebase_merge.join(name))
                .ok()
                .and_then(|s| s.trim().parse().ok())
        };

        (read_counter("msgnum"), read_counter("end"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn discover_fails_outside_a_repository() {
        let dir = TempDir::new().unwrap();
        // A temp dir normally has no repository above it; tolerate the rare
        // environment where one encloses it.
        match Repo::discover(dir.path()) {
            Err(GitError::NotARepository { path }) => {
                assert!(path.contains(dir.path().to_str().unwrap()));
            }
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => {}
        }
    }

    #[test]
    fn fresh_repository_is_clean() {
        let dir = TempDir::new().unwrap();
        git2::Repository::init(dir.path()).unwrap();

        let repo = Repo::discover(dir.path()).unwrap();
        assert_eq!(repo.state(), RepoState::Clean);
        assert!(!repo.state().is_rebasing());
        assert!(repo.git_dir().ends_with(".git"));
    }

    #[test]
    fn state_display() {
        assert_eq!(RepoState::Clean.to_string(), "clean");
        assert_eq!(
            RepoState::Rebase {
                current: Some(2),
                total: Some(5),
            }
            .to_string(),
            "rebase in progress (2/5)"
        );
        assert_eq!(
            RepoState::Rebase {
                current: None,
                total: None,
            }
            .to_string(),
            "rebase in progress"
        );
    }
}
