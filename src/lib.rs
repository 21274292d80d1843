//! Internal library crate for kman.
//!
//! The shipped application is the `kman` binary (`src/main.rs`).
//!
//! This library exists to share code between targets (binary, tests) and to keep modules organized.
//! It is not considered a library for external use.

pub mod app;
pub mod core;
pub mod logging;
pub mod ui;
