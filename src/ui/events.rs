//! Key handling for the picker
//!
//! Maps crossterm key events to picker actions. Actions that only change
//! state become `PickerEvent`s for the reducer; rescanning and opening a
//! book need the outside world and are handled by the picker loop.

use super::state::PickerEvent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks the picker to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Feed an event to the reducer
    Event(PickerEvent),
    /// Rebuild the index from disk
    Rescan,
    /// Open the highlighted book
    Open,
    /// No action taken
    Ignored,
}

/// Map a key event to an action
#[must_use]
pub fn map_key(key: KeyEvent) -> KeyAction {
    if key.kind != KeyEventKind::Press {
        return KeyAction::Ignored;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => KeyAction::Event(PickerEvent::Quit),
            _ => KeyAction::Ignored,
        };
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => KeyAction::Event(PickerEvent::Up),
        KeyCode::Down | KeyCode::Char('j') => KeyAction::Event(PickerEvent::Down),
        KeyCode::Left | KeyCode::Char('h') => KeyAction::Event(PickerEvent::Left),
        KeyCode::Right | KeyCode::Char('l') => KeyAction::Event(PickerEvent::Right),
        KeyCode::Char(' ') => KeyAction::Event(PickerEvent::Toggle),
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Event(PickerEvent::Quit),
        KeyCode::Char('r') => KeyAction::Rescan,
        KeyCode::Enter => KeyAction::Open,
        _ => KeyAction::Ignored,
    }
}
