//! UI renderer implementation.
//!
//! Contains the top-level `render` entry point used by the terminal loop and the
//! layout helper that splits the screen into the list and instructions areas.
//!
//! This module stays "pure rendering": it reads the app state and theme and
//! produces widgets, without owning picker logic.

use crate::app::AppState;
use crate::ui::widgets;

use ratatui::{Frame, layout::Rect};

/// Rows reserved at the bottom of the screen for the instructions box.
pub const INSTRUCTIONS_HEIGHT: u16 = 3;

/// Screen areas of the two widgets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutMetrics {
    pub list: Rect,
    pub instructions: Rect,
}

/// Splits `area` into the file list (full width, all but the last three rows)
/// and the instructions box (the last three rows).
///
/// Terminals shorter than three rows give everything to the instructions box.
pub fn layout_chunks(area: Rect) -> LayoutMetrics {
    let instructions_height = INSTRUCTIONS_HEIGHT.min(area.height);
    let list_height = area.height - instructions_height;

    LayoutMetrics {
        list: Rect::new(area.x, area.y, area.width, list_height),
        instructions: Rect::new(
            area.x,
            area.y + list_height,
            area.width,
            instructions_height,
        ),
    }
}

/// Render function which draws the whole picker on each frame.
///
/// Uses the geometry last recorded by [AppState::resize], clipped to the frame so a
/// stale size can never draw out of bounds.
pub fn render(frame: &mut Frame, app: &mut AppState) {
    let area = frame.area();
    let layout = app.layout();
    let list_area = layout.list.intersection(area);
    let instructions_area = layout.instructions.intersection(area);

    let parts = app.render_parts();
    let theme = parts.theme;

    let list = widgets::file_list(parts.engine, theme);
    frame.render_stateful_widget(list, list_area, parts.list_state);

    let instructions = widgets::instructions(parts.instructions, theme);
    frame.render_widget(instructions, instructions_area);
}
