//! Terminal UI of kman.
//!
//! - [render]: screen layout and the per-frame render entry point
//! - [widgets]: builders for the file list and the instructions box
//! - [theme]: the fixed widget styles

pub mod render;
pub mod theme;
pub mod widgets;

pub use render::{LayoutMetrics, layout_chunks, render};
pub use theme::Theme;
