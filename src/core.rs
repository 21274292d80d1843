//! Core runtime logic for kman.
//!
//! The non-UI pieces of the picker:
//! - [matcher]: wildcard filter translation and matching (see [WildcardMatcher]).
//! - [fm]: reading the directory snapshot (see [list_files]).
//! - [proc]: running the bulk actions through the external tool (see [run_bulk]).
//! - [terminal]: terminal setup/teardown and the main crossterm/ratatui event loop.

pub mod fm;
pub mod matcher;
pub mod proc;
pub mod terminal;

pub use fm::{browse_dir, list_files};
pub use matcher::{FilterError, WildcardMatcher};
pub use proc::{
    ActionError, BulkAction, CommandOutput, CommandRunner, Invocation, SystemRunner, TOOL, Verb,
    plan, run_bulk,
};
