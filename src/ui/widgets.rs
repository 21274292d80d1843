//! Widget builders for the picker screen.

use crate::app::SelectionEngine;
use crate::ui::Theme;

use ratatui::{
    text::Line,
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

/// Bordered list of the selected files, titled with the active filter.
pub fn file_list<'a>(engine: &'a SelectionEngine, theme: &Theme) -> List<'a> {
    let items: Vec<ListItem> = engine
        .selection()
        .map(|name| ListItem::new(Line::raw(name)))
        .collect();

    List::new(items)
        .block(titled_block(engine.title(), theme))
        .style(theme.list_style())
        .highlight_style(theme.selection_style())
        .highlight_symbol(theme.highlight_symbol())
}

/// Static instructions box at the bottom of the screen.
pub fn instructions<'a>(text: &'a str, theme: &Theme) -> Paragraph<'a> {
    Paragraph::new(text)
        .block(titled_block("Instructions".to_string(), theme))
        .style(theme.instructions_style())
}

fn titled_block(title: String, theme: &Theme) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme.accent_style())
        .title(title)
}
