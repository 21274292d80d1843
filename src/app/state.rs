//! Application state of kman.
//!
//! [AppState] owns everything the picker mutates: the selection engine, the list cursor and the
//! widget geometry. Key and resize events from the terminal loop are applied here; the loop only
//! draws and decides when to stop.

use crate::app::SelectionEngine;
use crate::core::BulkAction;
use crate::ui::{LayoutMetrics, Theme, layout_chunks};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::widgets::ListState;

/// Text of the instructions box.
pub const INSTRUCTIONS: &str = "Start typing to filter files.     CTRL + r: restart     CTRL + a: apply     CTRL + d: delete     ESC: exit";

/// Outcome of a single key press.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeypressResult {
    Continue,
    Quit,
    Bulk(BulkAction),
}

/// Split borrow of [AppState] for one frame.
pub struct RenderParts<'a> {
    pub theme: &'a Theme,
    pub engine: &'a SelectionEngine,
    pub list_state: &'a mut ListState,
    pub instructions: &'static str,
}

#[derive(Debug, Clone, Copy)]
enum Nav {
    Up,
    Down,
    Top,
    Bottom,
}

/// Application state of the picker.
pub struct AppState {
    theme: Theme,
    engine: SelectionEngine,
    list_state: ListState,
    layout: LayoutMetrics,
}

impl AppState {
    pub fn new(files: Vec<String>) -> Self {
        let mut app = Self {
            theme: Theme::default(),
            engine: SelectionEngine::new(files),
            list_state: ListState::default(),
            layout: LayoutMetrics::default(),
        };
        app.clamp_cursor();
        app
    }

    // Getters / Accessors

    #[inline]
    pub fn engine(&self) -> &SelectionEngine {
        &self.engine
    }

    #[inline]
    pub fn cursor(&self) -> Option<usize> {
        self.list_state.selected()
    }

    #[inline]
    pub fn layout(&self) -> LayoutMetrics {
        self.layout
    }

    /// Borrows what a frame needs at once; the list state is mutable so rendering can
    /// keep the scroll offset in sync with the cursor.
    #[inline]
    pub fn render_parts(&mut self) -> RenderParts<'_> {
        RenderParts {
            theme: &self.theme,
            engine: &self.engine,
            list_state: &mut self.list_state,
            instructions: INSTRUCTIONS,
        }
    }

    /// Recomputes the widget rectangles for a terminal of `width` x `height` cells.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.layout = layout_chunks(Rect::new(0, 0, width, height));
    }

    /// Applies one key press.
    ///
    /// Control chords and the named keys are fixed; every other single character without
    /// Ctrl or Alt is filter input, punctuation and space included.
    pub fn handle_keypress(&mut self, key: KeyEvent) -> KeypressResult {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => return KeypressResult::Quit,
            KeyCode::Char(c) if ctrl => {
                return match c.to_ascii_lowercase() {
                    'a' => KeypressResult::Bulk(BulkAction::Apply),
                    'd' => KeypressResult::Bulk(BulkAction::Delete),
                    'r' => KeypressResult::Bulk(BulkAction::Restart),
                    'c' => KeypressResult::Quit,
                    _ => KeypressResult::Continue,
                };
            }

            KeyCode::Up => self.handle_nav(Nav::Up),
            KeyCode::Down => self.handle_nav(Nav::Down),
            KeyCode::Home => self.handle_nav(Nav::Top),
            KeyCode::End => self.handle_nav(Nav::Bottom),

            KeyCode::Backspace => {
                if self.engine.backspace() {
                    self.clamp_cursor();
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => {
                if self.engine.push(c) {
                    self.clamp_cursor();
                }
            }
            _ => {}
        }
        KeypressResult::Continue
    }

    fn handle_nav(&mut self, nav: Nav) {
        let len = self.engine.len();
        let Some(current) = self.list_state.selected() else {
            return;
        };

        let next = match nav {
            Nav::Up => current.saturating_sub(1),
            Nav::Down => (current + 1).min(len - 1),
            Nav::Top => 0,
            Nav::Bottom => len - 1,
        };
        self.list_state.select(Some(next));
    }

    /// Keeps the cursor inside `[0, len)` of the current selection, or clears it when empty.
    fn clamp_cursor(&mut self) {
        let len = self.engine.len();
        if len == 0 {
            self.list_state.select(None);
            *self.list_state.offset_mut() = 0;
            return;
        }
        let idx = self.list_state.selected().unwrap_or(0).min(len - 1);
        self.list_state.select(Some(idx));
    }
}
