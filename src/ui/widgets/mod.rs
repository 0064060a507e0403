//! Ratatui widgets for the picker
//!
//! Custom widgets for rendering the tag bar, the title list, and the
//! bottom bars.

mod help_bar;
mod status_bar;
mod tag_bar;
mod title_list;

pub use help_bar::{HelpBar, KeyHint};
pub use status_bar::StatusBar;
pub use tag_bar::TagBar;
pub use title_list::TitleList;
