//! Status bar widget for displaying the latest message

use crate::ui::state::{MessageLevel, StatusMessage};
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Status bar widget showing the match count and the latest message
pub struct StatusBar<'a> {
    message: Option<&'a StatusMessage>,
    shown: usize,
    total: usize,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    /// Create a new status bar widget
    #[must_use]
    pub const fn new(
        message: Option<&'a StatusMessage>,
        shown: usize,
        total: usize,
        theme: &'a Theme,
    ) -> Self {
        Self {
            message,
            shown,
            total,
            theme,
        }
    }

    fn style_for_level(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Success => self.theme.success_style(),
            MessageLevel::Error => self.theme.error_style(),
            MessageLevel::Info => self.theme.info_style(),
        }
    }

    const fn prefix_for_level(level: MessageLevel) -> &'static str {
        match level {
            MessageLevel::Success => "✓ ",
            MessageLevel::Error => "✗ ",
            MessageLevel::Info => "ℹ ",
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::styled(
            format!("{}/{} books", self.shown, self.total),
            self.theme.dimmed_style(),
        )];

        if let Some(message) = self.message {
            let style = self.style_for_level(message.level);
            spans.push(Span::raw("  "));
            spans.push(Span::styled(Self::prefix_for_level(message.level), style));
            spans.push(Span::styled(message.text.as_str(), style));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
