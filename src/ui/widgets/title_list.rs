//! Title list widget

use crate::ui::state::PickerState;
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Widget},
};

/// Renders the visible window of book titles with a cursor marker
pub struct TitleList<'a> {
    state: &'a PickerState,
    theme: &'a Theme,
}

impl<'a> TitleList<'a> {
    /// Create a new title list widget
    #[must_use]
    pub const fn new(state: &'a PickerState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for TitleList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let state = self.state;
        let items: Vec<ListItem> = state
            .visible_entries()
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let line = if state.list_offset + i == state.highlighted {
                    Line::from(vec![
                        Span::styled("> ", self.theme.cursor_style()),
                        Span::styled(entry.title.as_str(), self.theme.highlighted_style()),
                    ])
                } else {
                    Line::from(vec![
                        Span::raw("  "),
                        Span::styled(entry.title.as_str(), self.theme.normal_style()),
                    ])
                };
                ListItem::new(line)
            })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(" Books ");

        List::new(items).block(block).render(area, buf);
    }
}
