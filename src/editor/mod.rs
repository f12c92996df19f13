//! editor
//!
//! Dispatch and servicing of Git's external-editor callbacks.
//!
//! # Protocol
//!
//! The host application wires `GIT_SEQUENCE_EDITOR` and `GIT_EDITOR` to this
//! executable with a fixed flag, so Git invokes it as:
//!
//! ```text
//! repilot --rebase-todo <path-to-git-rebase-todo>
//! repilot --commit-msg  <path-to-COMMIT_EDITMSG>
//! ```
//!
//! The sequence-editor callback fires once per rebase; the message-editor
//! callback fires once per step that takes a new message. Every invocation
//! is a fresh process: all coordination happens through files on disk (the
//! plan sidecar, written up front by the host, and Git's own progress
//! marker, appended to by Git between invocations).
//!
//! # Outcomes
//!
//! A recognized callback is terminal. It either rewrites the target file
//! ([`Verdict::Rewritten`]), leaves it byte-for-byte untouched because a
//! precondition did not hold ([`Verdict::Declined`] - still exit 0, since
//! this path doubles as the fall-through to normal startup), or fails
//! ([`EditorError`] - non-zero exit so Git halts the rebase step instead of
//! consuming a garbage file).

pub mod message;
pub mod todo;

use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::core::config::ConfigError;
use crate::core::plan::PlanError;

/// Fixed flag Git passes for the sequence-editor callback.
pub const SEQUENCE_EDITOR_FLAG: &str = "--rebase-todo";

/// Fixed flag Git passes for the message-editor callback.
pub const MESSAGE_EDITOR_FLAG: &str = "--commit-msg";

/// A recognized editor callback invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorRequest {
    /// Rewrite the rebase todo file from the plan.
    Sequence {
        /// Path Git handed us, expected to be `git-rebase-todo`.
        todo_path: PathBuf,
    },
    /// Rewrite the commit message file for the current step.
    Message {
        /// Path Git handed us, expected to be `COMMIT_EDITMSG`.
        msg_path: PathBuf,
    },
}

impl EditorRequest {
    /// Recognize an editor callback from the process arguments (without the
    /// program name).
    ///
    /// Git appends exactly one path to the editor command, so the shape is
    /// exactly `[flag, path]`. Anything else is not an editor callback and
    /// control belongs to normal application startup.
    ///
    /// # Example
    ///
    /// ```
    /// use std::ffi::OsString;
    /// use repilot::editor::EditorRequest;
    ///
    /// let args = [OsString::from("--rebase-todo"), OsString::from("todo")];
    /// assert!(EditorRequest::from_args(&args).is_some());
    /// assert!(EditorRequest::from_args(&args[..1]).is_none());
    /// ```
    pub fn from_args(args: &[OsString]) -> Option<Self> {
        let [flag, path] = args else {
            return None;
        };

        match flag.to_str()? {
            SEQUENCE_EDITOR_FLAG => Some(Self::Sequence {
                todo_path: PathBuf::from(path),
            }),
            MESSAGE_EDITOR_FLAG => Some(Self::Message {
                msg_path: PathBuf::from(path),
            }),
            _ => None,
        }
    }
}

/// Outcome of servicing a recognized callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The target file was rewritten.
    Rewritten,
    /// A precondition did not hold; the target file was left untouched.
    Declined(Decline),
}

/// Why a callback declined.
///
/// Declines are not errors. The same invocation shape is used to fall
/// through to normal application behavior, so a mismatch must stay silent
/// and exit 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decline {
    /// The target's base name is not the expected one for this mode.
    WrongFileName,
    /// The target is not inside an existing `rebase-merge` directory.
    NotARebaseDir,
    /// No plan sidecar was prepared.
    MissingPlan,
    /// Git's progress marker does not exist.
    MissingProgressMarker,
    /// The progress marker and the plan disagree about how far the rebase
    /// has advanced.
    ProgressOutOfRange {
        /// Non-empty lines in the progress marker.
        completed: usize,
        /// Steps in the plan.
        planned: usize,
    },
}

impl fmt::Display for Decline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decline::WrongFileName => write!(f, "target file name does not match this mode"),
            Decline::NotARebaseDir => write!(f, "target is not inside a rebase-merge directory"),
            Decline::MissingPlan => write!(f, "no plan sidecar file present"),
            Decline::MissingProgressMarker => write!(f, "no progress marker present"),
            Decline::ProgressOutOfRange { completed, planned } => write!(
                f,
                "progress marker ({completed} steps) out of range for plan ({planned} steps)"
            ),
        }
    }
}

/// Errors that abort a callback with a non-zero exit.
#[derive(Debug, Error)]
pub enum EditorError {
    /// The plan sidecar exists but is unreadable or malformed.
    #[error(transparent)]
    Plan(#[from] PlanError),

    /// The configuration file exists but is unreadable or malformed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The progress marker exists but could not be read.
    #[error("failed to read progress marker {path}: {source}")]
    Progress {
        /// Path of the progress marker.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The target file could not be rewritten.
    #[error("failed to write {path}: {source}")]
    Write {
        /// Path of the target file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Strict mode only: the progress marker and the plan have
    /// desynchronized.
    #[error("rebase progress desynchronized from plan: {completed} steps done, {planned} planned")]
    ProgressDesync {
        /// Non-empty lines in the progress marker.
        completed: usize,
        /// Steps in the plan.
        planned: usize,
    },
}

/// Service a recognized editor callback.
///
/// # Errors
///
/// See [`EditorError`]. Declined invocations are `Ok`, not errors.
pub fn service(request: &EditorRequest) -> Result<Verdict, EditorError> {
    match request {
        EditorRequest::Sequence { todo_path } => todo::rewrite(todo_path),
        EditorRequest::Message { msg_path } => message::rewrite(msg_path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<OsString> {
        items.iter().map(OsString::from).collect()
    }

    #[test]
    fn recognizes_sequence_editor_invocation() {
        let request = EditorRequest::from_args(&args(&["--rebase-todo", "/g/rebase-merge/todo"]));
        assert_eq!(
            request,
            Some(EditorRequest::Sequence {
                todo_path: PathBuf::from("/g/rebase-merge/todo"),
            })
        );
    }

    #[test]
    fn recognizes_message_editor_invocation() {
        let request = EditorRequest::from_args(&args(&["--commit-msg", "/g/COMMIT_EDITMSG"]));
        assert_eq!(
            request,
            Some(EditorRequest::Message {
                msg_path: PathBuf::from("/g/COMMIT_EDITMSG"),
            })
        );
    }

    #[test]
    fn other_flags_are_not_ours() {
        assert_eq!(EditorRequest::from_args(&args(&["--help", "x"])), None);
        assert_eq!(EditorRequest::from_args(&args(&["status"])), None);
        assert_eq!(EditorRequest::from_args(&args(&[])), None);
    }

    #[test]
    fn extra_arguments_are_not_ours() {
        assert_eq!(
            EditorRequest::from_args(&args(&["--rebase-todo", "a", "b"])),
            None
        );
        assert_eq!(EditorRequest::from_args(&args(&["--rebase-todo"])), None);
    }

    #[test]
    fn decline_display_names_the_mismatch() {
        let text = Decline::ProgressOutOfRange {
            completed: 3,
            planned: 2,
        }
        .to_string();
        assert!(text.contains('3'));
        assert!(text.contains('2'));

        assert!(Decline::MissingPlan.to_string().contains("plan"));
    }
}
