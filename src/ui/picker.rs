//! Terminal picker
//!
//! Owns the terminal while the picker runs: draws the tag bar, the title
//! list and the bottom bars, feeds key presses to the reducer, and handles
//! the actions that leave the process (rescanning the library and opening
//! a book).

use super::error::Result;
use super::events::{KeyAction, map_key};
use super::state::{MessageLevel, PickerEvent, PickerState};
use super::theme::Theme;
use super::widgets::{HelpBar, KeyHint, StatusBar, TagBar, TitleList};
use crate::index::{IndexBuilder, TagIndex};
use crate::tags::TagStore;
use crate::title::{EpubTitles, TitleCache, TitleLookup, file_name_of};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::Duration;

/// Rows taken by everything except the title rows
const CHROME_HEIGHT: u16 = 7;

/// Columns lost to the tag bar's borders and scroll markers
const TAG_BAR_PADDING: usize = 6;

/// Gap between tag names
const TAG_GAP: usize = 2;

/// What the user was looking at when the picker closed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PickerOutcome {
    /// Tags selected at exit
    pub selected_tags: Vec<String>,
    /// Books listed at exit
    pub files: Vec<PathBuf>,
}

/// Interactive tag picker over an e-book library
pub struct Picker<'a, S: TagStore + ?Sized> {
    builder: IndexBuilder<'a, S>,
    list_height: usize,
    theme: Theme,
    hints: Vec<KeyHint>,
}

impl<'a, S: TagStore + ?Sized> Picker<'a, S> {
    /// Create a picker that indexes through `builder`
    #[must_use]
    pub fn new(builder: IndexBuilder<'a, S>, list_height: usize) -> Self {
        Self {
            builder,
            list_height: list_height.max(1),
            theme: Theme::default(),
            hints: HelpBar::default_hints(),
        }
    }

    /// Index the library and run the picker until the user quits
    ///
    /// # Errors
    ///
    /// Returns `UiError::Scan` if the initial scan fails and
    /// `UiError::IoError` if the terminal cannot be driven.
    pub fn run(&self) -> Result<PickerOutcome> {
        let index = self.builder.build()?;
        let titles = TitleCache::build(&index, &EpubTitles);
        tracing::info!(
            root = %self.builder.root().display(),
            books = index.len(),
            "starting picker"
        );

        let mut terminal = Self::setup_terminal()?;
        let result = self.run_loop(&mut terminal, index, titles);

        if let Err(e) = Self::cleanup_terminal() {
            tracing::warn!(error = %e, "terminal cleanup failed");
        }

        result
    }

    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let terminal = enter_or_restore(
            || {
                let mut stdout = io::stdout();
                execute!(stdout, EnterAlternateScreen)?;
                Terminal::new(CrosstermBackend::new(stdout))
            },
            || {
                disable_raw_mode()?;
                execute!(io::stdout(), LeaveAlternateScreen)
            },
        )?;
        Ok(terminal)
    }

    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        Ok(())
    }

    fn run_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        mut index: TagIndex,
        mut titles: TitleCache,
    ) -> Result<PickerOutcome> {
        let mut state = PickerState::new(&index, &titles, self.list_height, 1);

        while !state.should_exit {
            let size = terminal.size()?;
            state = fit_to_area(state, &index, &titles, self.list_height, size.width, size.height);

            terminal.draw(|frame| self.render(frame, &state))?;

            if !event::poll(Duration::from_millis(250))? {
                continue;
            }
            let Event::Key(key) = event::read()? else {
                continue;
            };

            match map_key(key) {
                KeyAction::Event(event) => state = state.reduce(event, &index, &titles),
                KeyAction::Rescan => match self.builder.build() {
                    Ok(rebuilt) => {
                        titles = TitleCache::build(&rebuilt, &EpubTitles);
                        index = rebuilt;
                        state = state.reduce(PickerEvent::Reindexed, &index, &titles);
                        let message = format!("Rescanned {} books", index.len());
                        state.set_status(MessageLevel::Success, message);
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "rescan failed");
                        state.set_status(MessageLevel::Error, format!("Rescan failed: {e}"));
                    }
                },
                KeyAction::Open => {
                    if let Some(path) = state.highlighted_entry().map(|e| e.path.clone()) {
                        let name = file_name_of(&path);
                        match open::that_detached(&path) {
                            Ok(()) => {
                                tracing::info!(path = %path.display(), "opened book");
                                state.set_status(MessageLevel::Info, format!("Opened {name}"));
                            }
                            Err(e) => {
                                tracing::warn!(path = %path.display(), error = %e, "open failed");
                                state.set_status(
                                    MessageLevel::Error,
                                    format!("Could not open {name}: {e}"),
                                );
                            }
                        }
                    }
                }
                KeyAction::Ignored => {}
            }
        }

        Ok(PickerOutcome {
            selected_tags: state.selected_tags.clone(),
            files: state.listed_paths(),
        })
    }

    fn render(&self, frame: &mut Frame, state: &PickerState) {
        let list_rows = u16::try_from(state.list_height).unwrap_or(u16::MAX).saturating_add(2);
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),         // Tag bar
                Constraint::Length(list_rows), // Titles
                Constraint::Length(1),         // Status bar
                Constraint::Length(1),         // Help bar
                Constraint::Min(0),
            ])
            .split(frame.area());

        frame.render_widget(TagBar::new(state, &self.theme), layout[0]);
        frame.render_widget(TitleList::new(state, &self.theme), layout[1]);
        frame.render_widget(
            StatusBar::new(
                state.active_status(),
                state.entries.len(),
                state.total,
                &self.theme,
            ),
            layout[2],
        );
        frame.render_widget(HelpBar::new(&self.hints, &self.theme), layout[3]);
    }
}

/// Resize `state` to a `width` x `height` terminal
///
/// The tag window depends on where the tag bar is scrolled, and applying a
/// window can scroll it, so the window is re-measured until it settles.
fn fit_to_area<L: TitleLookup + ?Sized>(
    mut state: PickerState,
    index: &TagIndex,
    titles: &L,
    max_rows: usize,
    width: u16,
    height: u16,
) -> PickerState {
    let list_height = max_rows.min(usize::from(height.saturating_sub(CHROME_HEIGHT)));

    for _ in 0..=state.tag_names.len() {
        let window = tag_window(&state.tag_names, state.tag_offset, usize::from(width));
        let settled = window == state.tag_window && list_height.max(1) == state.list_height;
        state = state.reduce(
            PickerEvent::Resize {
                list_height,
                tag_window: window,
            },
            index,
            titles,
        );
        if settled {
            break;
        }
    }

    state
}

/// Run `enter`, calling `restore` if it fails
///
/// The error from `enter` is returned; a failing `restore` is only logged.
fn enter_or_restore<T>(
    enter: impl FnOnce() -> io::Result<T>,
    restore: impl FnOnce() -> io::Result<()>,
) -> io::Result<T> {
    enter().inspect_err(|_| {
        if let Err(e) = restore() {
            tracing::warn!(error = %e, "terminal restore failed");
        }
    })
}

/// Number of tags, starting at `offset`, that fit in `width` columns
///
/// Always at least one so the tag cursor has somewhere to be.
fn tag_window(tags: &[String], offset: usize, width: usize) -> usize {
    let mut budget = width.saturating_sub(TAG_BAR_PADDING);
    let mut count = 0;

    for tag in tags.iter().skip(offset) {
        let needed = tag.chars().count() + if count == 0 { 0 } else { TAG_GAP };
        if needed > budget {
            break;
        }
        budget -= needed;
        count += 1;
    }

    count.max(1)
}
