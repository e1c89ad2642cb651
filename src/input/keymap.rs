//! Keymaps
//!
//! Per-mode key-to-action tables. Context-dependent interpretation (quick
//! questions, empty-buffer digits) happens in the app layer; these tables
//! stay pure.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,

    // Showcase
    GridView,
    StackView,
    Back,
    SelectPrev,
    SelectNext,
    ZoomIn,
    ZoomOut,
    Rotate,
    Activate,

    // Card actions
    ViewDocument,
    Share,
    ViewHistory,

    // Panels
    ToggleChat,
    ShowHelp,

    // Text input
    InsertChar(char),
    Submit,
    Cancel,

    // Scrolling within popups / transcript
    ScrollUp,
    ScrollDown,
}

pub fn normal_mode_action(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Char('g'), KeyModifiers::NONE) => Action::GridView,
        (KeyCode::Char('t'), KeyModifiers::NONE) => Action::StackView,
        (KeyCode::Char('b'), KeyModifiers::NONE) | (KeyCode::Esc, _) => Action::Back,
        (KeyCode::Char('h'), KeyModifiers::NONE) | (KeyCode::Left, _) => Action::SelectPrev,
        (KeyCode::Char('l'), KeyModifiers::NONE) | (KeyCode::Right, _) => Action::SelectNext,
        (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => Action::SelectPrev,
        (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => Action::SelectNext,
        (KeyCode::Char('+' | '='), _) => Action::ZoomIn,
        (KeyCode::Char('-'), _) => Action::ZoomOut,
        (KeyCode::Char('r'), KeyModifiers::NONE) => Action::Rotate,
        (KeyCode::Enter, _) | (KeyCode::Char('f'), KeyModifiers::NONE) => Action::Activate,
        (KeyCode::Char('o'), KeyModifiers::NONE) => Action::ViewDocument,
        (KeyCode::Char('s'), KeyModifiers::NONE) => Action::Share,
        (KeyCode::Char('y'), KeyModifiers::NONE) => Action::ViewHistory,
        (KeyCode::Char('c'), KeyModifiers::NONE) => Action::ToggleChat,
        (KeyCode::Char('?'), KeyModifiers::NONE | KeyModifiers::SHIFT) => Action::ShowHelp,
        _ => Action::None,
    }
}

/// Chat mode: Enter submits, Esc closes the panel, PageUp/PageDown scroll
/// the transcript; everything else is text editing resolved by the caller.
pub fn chat_mode_action(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Enter, KeyModifiers::NONE) => Action::Submit,
        (KeyCode::Esc, _) => Action::Cancel,
        (KeyCode::PageUp, _) => Action::ScrollUp,
        (KeyCode::PageDown, _) => Action::ScrollDown,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => Action::InsertChar(c),
        _ => Action::None,
    }
}

/// Shared by the help and history overlays.
pub fn popup_action(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) | (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Cancel,
        (KeyCode::Char('?'), KeyModifiers::NONE | KeyModifiers::SHIFT) => Action::Cancel,
        (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => Action::ScrollUp,
        (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => Action::ScrollDown,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_normal_mode_bindings() {
        assert_eq!(normal_mode_action(key(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(normal_mode_action(key(KeyCode::Char('g'))), Action::GridView);
        assert_eq!(normal_mode_action(key(KeyCode::Char('t'))), Action::StackView);
        assert_eq!(normal_mode_action(key(KeyCode::Char('r'))), Action::Rotate);
        assert_eq!(normal_mode_action(key(KeyCode::Char('+'))), Action::ZoomIn);
        assert_eq!(normal_mode_action(key(KeyCode::Enter)), Action::Activate);
        assert_eq!(normal_mode_action(key(KeyCode::Char('x'))), Action::None);
    }

    #[test]
    fn test_chat_mode_text_falls_through() {
        assert_eq!(chat_mode_action(key(KeyCode::Enter)), Action::Submit);
        assert_eq!(chat_mode_action(key(KeyCode::Esc)), Action::Cancel);
        assert_eq!(
            chat_mode_action(key(KeyCode::Char('a'))),
            Action::InsertChar('a')
        );
    }

    #[test]
    fn test_popup_bindings() {
        assert_eq!(popup_action(key(KeyCode::Esc)), Action::Cancel);
        assert_eq!(popup_action(key(KeyCode::Char('j'))), Action::ScrollDown);
        assert_eq!(popup_action(key(KeyCode::Char('k'))), Action::ScrollUp);
    }
}
