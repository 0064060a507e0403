//! Picker state and reducer
//!
//! All picker state lives in `PickerState`. Key presses become
//! `PickerEvent`s and `PickerState::reduce` turns `(state, event)` into the
//! next state, calling the tag index synchronously when the tag selection
//! changes. Nothing in here touches the terminal.

use crate::index::TagIndex;
use crate::title::TitleLookup;
use std::collections::HashSet;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// One row of the title list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookEntry {
    /// File the row stands for
    pub path: PathBuf,
    /// Title shown to the user
    pub title: String,
}

/// Events the picker reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerEvent {
    /// Move the title cursor up
    Up,
    /// Move the title cursor down
    Down,
    /// Move the tag cursor left
    Left,
    /// Move the tag cursor right
    Right,
    /// Select or deselect the tag under the tag cursor
    Toggle,
    /// The visible area changed
    Resize {
        /// Number of title rows that fit
        list_height: usize,
        /// Number of tags that fit in the tag bar
        tag_window: usize,
    },
    /// The index was rebuilt; re-derive tags and titles
    Reindexed,
    /// Leave the picker
    Quit,
}

/// Severity of a status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Neutral information
    Info,
    /// An action succeeded
    Success,
    /// An action failed
    Error,
}

/// A status message with timestamp for TTL-based expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// Message level
    pub level: MessageLevel,
    /// Message text
    pub text: String,
    /// When the message was created
    pub created_at: Instant,
}

impl StatusMessage {
    /// Create a new status message
    #[must_use]
    pub fn new(level: MessageLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
            created_at: Instant::now(),
        }
    }

    /// Check if the message has expired based on TTL
    #[must_use]
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() > ttl
    }
}

/// Application state for the picker
#[derive(Debug, Clone)]
pub struct PickerState {
    /// Selectable tags, sorted
    pub tag_names: Vec<String>,
    /// Tags chosen by the user, in selection order
    pub selected_tags: Vec<String>,
    /// Books currently listed
    pub entries: Vec<BookEntry>,
    /// Index of the highlighted row in `entries`
    pub highlighted: usize,
    /// First visible row
    pub list_offset: usize,
    /// Number of visible rows
    pub list_height: usize,
    /// Index of the highlighted tag in `tag_names`
    pub tag_cursor: usize,
    /// First visible tag
    pub tag_offset: usize,
    /// Number of visible tags
    pub tag_window: usize,
    /// Total number of books in the index
    pub total: usize,
    /// Latest status message
    pub status: Option<StatusMessage>,
    /// Message TTL for auto-expiry
    pub message_ttl: Duration,
    /// Whether the picker should exit
    pub should_exit: bool,
}

impl PickerState {
    /// Create the initial state: no tags selected, every book listed
    pub fn new<L: TitleLookup + ?Sized>(
        index: &TagIndex,
        titles: &L,
        list_height: usize,
        tag_window: usize,
    ) -> Self {
        let mut state = Self {
            tag_names: index.unique_tags(),
            selected_tags: Vec::new(),
            entries: Vec::new(),
            highlighted: 0,
            list_offset: 0,
            list_height: list_height.max(1),
            tag_cursor: 0,
            tag_offset: 0,
            tag_window: tag_window.max(1),
            total: index.len(),
            status: None,
            message_ttl: Duration::from_secs(5),
            should_exit: false,
        };
        state.refresh_entries(index, titles);
        state
    }

    /// Apply one event and return the next state
    #[must_use]
    pub fn reduce<L: TitleLookup + ?Sized>(
        mut self,
        event: PickerEvent,
        index: &TagIndex,
        titles: &L,
    ) -> Self {
        match event {
            PickerEvent::Up => self.cursor_up(),
            PickerEvent::Down => self.cursor_down(),
            PickerEvent::Left => self.tag_left(),
            PickerEvent::Right => self.tag_right(),
            PickerEvent::Toggle => {
                if self.toggle_tag() {
                    self.refresh_entries(index, titles);
                }
            }
            PickerEvent::Resize {
                list_height,
                tag_window,
            } => {
                self.list_height = list_height.max(1);
                self.tag_window = tag_window.max(1);
                self.keep_cursor_visible();
                self.keep_tag_visible();
            }
            PickerEvent::Reindexed => {
                self.tag_names = index.unique_tags();
                let known: HashSet<&String> = self.tag_names.iter().collect();
                self.selected_tags.retain(|tag| known.contains(tag));
                self.tag_cursor = self.tag_cursor.min(self.tag_names.len().saturating_sub(1));
                self.keep_tag_visible();
                self.total = index.len();
                self.refresh_entries(index, titles);
            }
            PickerEvent::Quit => self.should_exit = true,
        }
        self
    }

    fn cursor_up(&mut self) {
        self.highlighted = self.highlighted.saturating_sub(1);
        self.keep_cursor_visible();
    }

    fn cursor_down(&mut self) {
        let last = self.entries.len().saturating_sub(1);
        self.highlighted = (self.highlighted + 1).min(last);
        self.keep_cursor_visible();
    }

    fn keep_cursor_visible(&mut self) {
        if self.highlighted < self.list_offset {
            self.list_offset = self.highlighted;
        } else if self.highlighted >= self.list_offset + self.list_height {
            self.list_offset = self.highlighted + 1 - self.list_height;
        }
    }

    fn tag_left(&mut self) {
        self.tag_cursor = self.tag_cursor.saturating_sub(1);
        self.keep_tag_visible();
    }

    fn tag_right(&mut self) {
        let last = self.tag_names.len().saturating_sub(1);
        self.tag_cursor = (self.tag_cursor + 1).min(last);
        self.keep_tag_visible();
    }

    fn keep_tag_visible(&mut self) {
        if self.tag_cursor < self.tag_offset {
            self.tag_offset = self.tag_cursor;
        } else if self.tag_cursor >= self.tag_offset + self.tag_window {
            self.tag_offset = self.tag_cursor + 1 - self.tag_window;
        }
    }

    /// Flip the tag under the cursor; returns whether the selection changed
    fn toggle_tag(&mut self) -> bool {
        let Some(tag) = self.tag_names.get(self.tag_cursor) else {
            return false;
        };

        if let Some(pos) = self.selected_tags.iter().position(|t| t == tag) {
            self.selected_tags.remove(pos);
        } else {
            self.selected_tags.push(tag.clone());
        }
        true
    }

    /// Recompute the listed books from the current selection
    ///
    /// With no tags selected every book is listed. Otherwise the books under
    /// all selected tags are listed. Either way rows follow the index's scan
    /// order, and the cursor returns to the top.
    fn refresh_entries<L: TitleLookup + ?Sized>(&mut self, index: &TagIndex, titles: &L) {
        self.entries = index
            .listing(&self.selected_tags)
            .into_iter()
            .map(|path| BookEntry {
                title: titles.title_for(&path),
                path,
            })
            .collect();

        self.highlighted = 0;
        self.list_offset = 0;
    }

    /// Record a status message
    pub fn set_status(&mut self, level: MessageLevel, text: impl Into<String>) {
        self.status = Some(StatusMessage::new(level, text));
    }

    /// Status message, unless it has expired
    #[must_use]
    pub fn active_status(&self) -> Option<&StatusMessage> {
        self.status
            .as_ref()
            .filter(|message| !message.is_expired(self.message_ttl))
    }

    /// The highlighted book, if any
    #[must_use]
    pub fn highlighted_entry(&self) -> Option<&BookEntry> {
        self.entries.get(self.highlighted)
    }

    /// Rows inside the visible window
    #[must_use]
    pub fn visible_entries(&self) -> &[BookEntry] {
        let start = self.list_offset.min(self.entries.len());
        let end = (start + self.list_height).min(self.entries.len());
        &self.entries[start..end]
    }

    /// Tags inside the visible window
    #[must_use]
    pub fn visible_tags(&self) -> &[String] {
        let start = self.tag_offset.min(self.tag_names.len());
        let end = (start + self.tag_window).min(self.tag_names.len());
        &self.tag_names[start..end]
    }

    /// Whether `tag` is selected
    #[must_use]
    pub fn is_selected(&self, tag: &str) -> bool {
        self.selected_tags.iter().any(|t| t == tag)
    }

    /// Paths of the listed books
    #[must_use]
    pub fn listed_paths(&self) -> Vec<PathBuf> {
        self.entries.iter().map(|e| e.path.clone()).collect()
    }
}
