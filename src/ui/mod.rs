//! Interactive tag picker
//!
//! A terminal UI built on ratatui and crossterm. The top bar lists every
//! tag in the library; toggling tags narrows the title list below to the
//! books carrying all selected tags.
//!
//! ```text
//! ┌ Tags (1/3) ─────────────────────────┐
//! │ philosophy  religion  untagged      │
//! └─────────────────────────────────────┘
//! ┌ Books ──────────────────────────────┐
//! │> Meditations                        │
//! │  Confessions                        │
//! └─────────────────────────────────────┘
//! 2/3 books
//! j/k:move  h/l:tags  space:toggle  enter:open  r:rescan  q:quit
//! ```
//!
//! State handling is split from rendering: `state` holds a pure reducer,
//! `events` maps keys to reducer events, and `picker` drives the terminal.

mod error;
mod events;
mod picker;
mod state;
mod theme;
mod widgets;

pub use error::{Result, UiError};
pub use events::{KeyAction, map_key};
pub use picker::{Picker, PickerOutcome};
pub use state::{BookEntry, MessageLevel, PickerEvent, PickerState, StatusMessage};
pub use theme::Theme;
