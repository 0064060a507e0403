//! Horizontal tag bar

use crate::ui::state::PickerState;
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Renders the visible window of tag names on one line
///
/// Selected tags are styled differently from the rest; the tag under the
/// tag cursor gets its own color. Arrows mark tags scrolled out of view.
pub struct TagBar<'a> {
    state: &'a PickerState,
    theme: &'a Theme,
}

impl<'a> TagBar<'a> {
    /// Create a new tag bar widget
    #[must_use]
    pub const fn new(state: &'a PickerState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for TagBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let state = self.state;
        let mut spans = Vec::new();

        if state.tag_offset > 0 {
            spans.push(Span::styled("‹ ", self.theme.dimmed_style()));
        }

        for (i, tag) in state.visible_tags().iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            let highlighted = state.tag_offset + i == state.tag_cursor;
            let style = self.theme.tag_style(state.is_selected(tag), highlighted);
            spans.push(Span::styled(tag.as_str(), style));
        }

        if state.tag_offset + state.tag_window < state.tag_names.len() {
            spans.push(Span::styled(" ›", self.theme.dimmed_style()));
        }

        let title = format!(" Tags ({}/{}) ", state.selected_tags.len(), state.tag_names.len());
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(title);

        Paragraph::new(Line::from(spans)).block(block).render(area, buf);
    }
}
