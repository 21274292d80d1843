//! Application state and input handling for kman.
//!
//! - [selection]: the file snapshot, the filter and the selected subset
//! - [state]: [AppState], which applies key and resize events

pub mod selection;
pub mod state;

pub use selection::SelectionEngine;
pub use state::{AppState, KeypressResult, RenderParts};
