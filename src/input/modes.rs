//! Input Modes
//!
//! Modal input state: showcase navigation, chat typing, and the overlay
//! popups each capture keys differently.

use super::{TextBuffer, text_buffer};
use crossterm::event::{KeyCode, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Chat,
    Help,
    History,
}

impl InputMode {
    pub fn indicator(&self) -> &'static str {
        match self {
            Self::Normal => "BROWSE",
            Self::Chat => "CHAT",
            Self::Help => "HELP",
            Self::History => "HISTORY",
        }
    }

    pub fn is_text_input(&self) -> bool {
        matches!(self, Self::Chat)
    }
}

/// Mode plus the text buffer backing the chat input.
#[derive(Debug, Clone)]
pub struct ModeState {
    pub mode: InputMode,
    pub buffer: TextBuffer,
}

impl Default for ModeState {
    fn default() -> Self {
        Self {
            mode: InputMode::Normal,
            buffer: TextBuffer::new(),
        }
    }
}

impl ModeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn to_normal(&mut self) {
        self.mode = InputMode::Normal;
        self.buffer.clear();
    }

    /// Entering chat keeps whatever was typed before the panel lost focus.
    pub fn to_chat(&mut self) {
        self.mode = InputMode::Chat;
    }

    pub fn to_help(&mut self) {
        self.mode = InputMode::Help;
    }

    pub fn to_history(&mut self) {
        self.mode = InputMode::History;
    }

    pub fn get_buffer(&self) -> &str {
        self.buffer.content()
    }

    /// Takes the buffer contents, leaving it empty for the next turn.
    pub fn take_buffer(&mut self) -> String {
        let text = self.buffer.content().to_string();
        self.buffer.clear();
        text
    }

    pub fn handle_text_key(&mut self, code: KeyCode, mods: KeyModifiers) -> bool {
        text_buffer::handle_text_key(&mut self.buffer, code, mods)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_transitions() {
        let mut state = ModeState::new();
        assert_eq!(state.mode, InputMode::Normal);

        state.to_chat();
        assert_eq!(state.mode, InputMode::Chat);

        state.to_help();
        assert_eq!(state.mode, InputMode::Help);

        state.to_normal();
        assert_eq!(state.mode, InputMode::Normal);
    }

    #[test]
    fn test_chat_buffer_survives_refocus() {
        let mut state = ModeState::new();
        state.to_chat();
        for c in "what is ipfs".chars() {
            state.buffer.insert_char(c);
        }
        state.to_chat();
        assert_eq!(state.get_buffer(), "what is ipfs");
    }

    #[test]
    fn test_leaving_chat_clears_buffer() {
        let mut state = ModeState::new();
        state.to_chat();
        state.buffer.insert_char('x');
        state.to_normal();
        assert_eq!(state.get_buffer(), "");
    }

    #[test]
    fn test_take_buffer() {
        let mut state = ModeState::new();
        state.buffer.set_content("hello");
        assert_eq!(state.take_buffer(), "hello");
        assert!(state.buffer.is_empty());
    }

    #[test]
    fn test_is_text_input() {
        assert!(!InputMode::Normal.is_text_input());
        assert!(InputMode::Chat.is_text_input());
        assert!(!InputMode::Help.is_text_input());
        assert!(!InputMode::History.is_text_input());
    }
}
