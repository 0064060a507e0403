//! Color theme definitions for the picker
//!
//! Uses 256-color palette indices so the picker looks the same across
//! terminal color schemes.

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the picker
#[derive(Debug, Clone)]
pub struct Theme {
    /// Color for the cursor indicator and the highlighted title
    pub cursor: Color,
    /// Color for unselected tag names
    pub tag: Color,
    /// Color for selected tag names
    pub selected_tag: Color,
    /// Color for the tag under the tag cursor
    pub highlighted_tag: Color,
    /// Color for success messages
    pub success: Color,
    /// Color for error messages
    pub error: Color,
    /// Color for info messages
    pub info: Color,
    /// Color for borders
    pub border: Color,
    /// Color for dimmed/inactive text
    pub dimmed: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create a dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            cursor: Color::Indexed(212),
            tag: Color::Indexed(5),
            selected_tag: Color::Indexed(2),
            highlighted_tag: Color::Indexed(12),
            success: Color::Green,
            error: Color::Red,
            info: Color::Cyan,
            border: Color::DarkGray,
            dimmed: Color::DarkGray,
        }
    }

    /// Style for the cursor indicator (>)
    #[must_use]
    pub fn cursor_style(&self) -> Style {
        Style::default().fg(self.cursor)
    }

    /// Style for the highlighted title
    #[must_use]
    pub fn highlighted_style(&self) -> Style {
        Style::default()
            .fg(self.cursor)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for other titles
    #[must_use]
    pub fn normal_style(&self) -> Style {
        Style::default()
    }

    /// Style for a tag name
    ///
    /// The tag cursor wins over selection so the user can always see where
    /// the cursor is.
    #[must_use]
    pub fn tag_style(&self, selected: bool, highlighted: bool) -> Style {
        let style = if highlighted {
            Style::default().fg(self.highlighted_tag)
        } else if selected {
            Style::default().fg(self.selected_tag)
        } else {
            Style::default().fg(self.tag)
        };

        if selected {
            style.add_modifier(Modifier::ITALIC | Modifier::BOLD)
        } else {
            style
        }
    }

    /// Style for success messages
    #[must_use]
    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    /// Style for error messages
    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Style for info messages
    #[must_use]
    pub fn info_style(&self) -> Style {
        Style::default().fg(self.info)
    }

    /// Style for borders
    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style for dimmed text
    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed)
    }
}
