//! Repilot - a silent editor backend for planned Git interactive rebases
//!
//! Repilot lets a host application plan an interactive rebase ahead of time
//! and then satisfy Git's external-editor callbacks without any human editing
//! a text file. The host writes the approved plan to a sidecar file, points
//! `GIT_SEQUENCE_EDITOR` / `GIT_EDITOR` at this executable, and launches
//! `git rebase -i`. From then on each editor invocation is serviced from the
//! plan: the todo file is rendered from the planned steps, and each commit
//! message is resolved from Git's own progress marker.
//!
//! # Architecture
//!
//! The codebase follows a layered architecture:
//!
//! - [`cli`] - Command-line interface layer (inspection commands)
//! - [`editor`] - Git editor callback dispatch and file rewriting
//! - [`core`] - Domain types, plan schema, configuration, and path routing
//! - [`git`] - Single interface for repository state inspection
//! - [`ui`] - Output utilities
//!
//! # Correctness Invariants
//!
//! Repilot maintains the following invariants:
//!
//! 1. Editor callbacks never assume in-memory state survives between
//!    invocations; every fact is re-derived from disk on every call
//! 2. A callback either rewrites its target file wholesale or leaves it
//!    byte-for-byte untouched
//! 3. The plan sidecar is read-only for this process; the write side belongs
//!    to the host application
//! 4. "Not applicable" is never an error: mismatched invocations decline
//!    silently so normal application startup can proceed

pub mod cli;
pub mod core;
pub mod editor;
pub mod git;
pub mod ui;
