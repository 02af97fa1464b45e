//! Key mapping from terminal events to page actions and detector codes.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_cyberfolio_types::PageAction;

/// Map keyboard input to page actions.
pub fn handle_key_event(key: KeyEvent) -> Option<PageAction> {
    match key.code {
        // Scrolling
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => Some(PageAction::ScrollUp),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => Some(PageAction::ScrollDown),
        KeyCode::PageUp => Some(PageAction::PageUp),
        KeyCode::PageDown | KeyCode::Char(' ') => Some(PageAction::PageDown),

        // Jumps
        KeyCode::Home | KeyCode::Char('g') => Some(PageAction::Top),
        KeyCode::End | KeyCode::Char('G') => Some(PageAction::Bottom),
        KeyCode::Tab | KeyCode::Char('n') | KeyCode::Char('N') => Some(PageAction::NextSection),
        KeyCode::BackTab | KeyCode::Char('p') | KeyCode::Char('P') => {
            Some(PageAction::PrevSection)
        }

        _ => None,
    }
}

/// Check if key should quit the page.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Numeric code of a key press for the sequence detector.
///
/// Follows classic keyboard-event codes: arrows are 37-40, letters map to
/// their uppercase ASCII value, digits to 48-57. Every key press feeds the
/// detector, including keys that also scroll the page.
pub fn key_code(key: KeyEvent) -> Option<u16> {
    match key.code {
        KeyCode::Left => Some(37),
        KeyCode::Up => Some(38),
        KeyCode::Right => Some(39),
        KeyCode::Down => Some(40),
        KeyCode::Backspace => Some(8),
        KeyCode::Tab | KeyCode::BackTab => Some(9),
        KeyCode::Enter => Some(13),
        KeyCode::Esc => Some(27),
        KeyCode::Char(' ') => Some(32),
        KeyCode::Char(c) if c.is_ascii_alphanumeric() => {
            Some(c.to_ascii_uppercase() as u16)
        }
        _ => None,
    }
}
