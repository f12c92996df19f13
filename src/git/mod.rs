//! git
//!
//! Single interface for repository state inspection.
//!
//! # Architecture
//!
//! This module is the only doorway to libgit2. It exists solely for the CLI
//! inspection commands; the editor callbacks never open a repository - they
//! operate purely on the paths Git hands them, and all their facts come from
//! files on disk.
//!
//! # Responsibilities
//!
//! - Repository discovery and git-dir resolution
//! - In-progress interactive-rebase detection with step counters

mod interface;

pub use interface::{GitError, Repo, RepoState};
