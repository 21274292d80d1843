//! Colors of the picker screen.
//!
//! Yellow file names, a dark bold cursor row and plain borders. The styles are fixed;
//! widgets read them through [Theme] so the builders stay free of literals.

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    list: Style,
    selection: Style,
    accent: Style,
    instructions: Style,
    highlight_symbol: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            list: Style::default().fg(Color::Yellow),
            // Bold so the cursor stays visible on terminals without 256 colors.
            selection: Style::default()
                .bg(Color::Indexed(236))
                .add_modifier(Modifier::BOLD),
            accent: Style::default(),
            instructions: Style::default(),
            highlight_symbol: "> ",
        }
    }
}

impl Theme {
    #[inline]
    pub fn list_style(&self) -> Style {
        self.list
    }

    #[inline]
    pub fn selection_style(&self) -> Style {
        self.selection
    }

    #[inline]
    pub fn accent_style(&self) -> Style {
        self.accent
    }

    #[inline]
    pub fn instructions_style(&self) -> Style {
        self.instructions
    }

    #[inline]
    pub fn highlight_symbol(&self) -> &'static str {
        self.highlight_symbol
    }
}
