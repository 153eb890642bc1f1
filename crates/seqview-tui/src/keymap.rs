//! Keyboard shortcut handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// TUI keyboard actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    PrevKind,
    NextKind,
    IncTerms,
    DecTerms,
    PageUpTerms,
    PageDownTerms,
    MinTerms,
    MaxTerms,
    Generate,
    None,
}

/// Map a key event to an action.
#[must_use]
pub fn map_key(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Up | KeyCode::Char('k') => KeyAction::PrevKind,
        KeyCode::Down | KeyCode::Char('j') => KeyAction::NextKind,
        KeyCode::Right | KeyCode::Char('l') => KeyAction::IncTerms,
        KeyCode::Left | KeyCode::Char('h') => KeyAction::DecTerms,
        KeyCode::PageUp => KeyAction::PageUpTerms,
        KeyCode::PageDown => KeyAction::PageDownTerms,
        KeyCode::Home => KeyAction::MinTerms,
        KeyCode::End => KeyAction::MaxTerms,
        KeyCode::Enter | KeyCode::Char('g') => KeyAction::Generate,
        _ => KeyAction::None,
    }
}
