//! Text Buffer
//!
//! Line-editing buffer with cursor management for the chat input.

use crossterm::event::{KeyCode, KeyModifiers};

#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    content: String,
    cursor: usize,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn set_content(&mut self, content: &str) {
        self.content = content.to_string();
        self.cursor = self.content.len();
    }

    pub fn set_cursor(&mut self, pos: usize) {
        self.cursor = pos.min(self.content.len());
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    pub fn insert_char(&mut self, c: char) {
        self.content.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_char(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let prev = prev_char_boundary(&self.content, self.cursor);
        self.content.remove(prev);
        self.cursor = prev;
    }

    pub fn delete_char_forward(&mut self) {
        if self.cursor >= self.content.len() {
            return;
        }
        self.content.remove(self.cursor);
    }

    pub fn delete_word(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let new_cursor = word_boundary_back(&self.content, self.cursor);
        self.content.drain(new_cursor..self.cursor);
        self.cursor = new_cursor;
    }

    pub fn clear_to_start(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.content.drain(..self.cursor);
        self.cursor = 0;
    }

    pub fn cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = prev_char_boundary(&self.content, self.cursor);
        }
    }

    pub fn cursor_right(&mut self) {
        if self.cursor < self.content.len() {
            self.cursor = next_char_boundary(&self.content, self.cursor);
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.content.len();
    }
}

/// Handles common text-editing keys, returns true if the key was consumed.
pub fn handle_text_key(buf: &mut TextBuffer, code: KeyCode, mods: KeyModifiers) -> bool {
    match (code, mods) {
        (KeyCode::Backspace, KeyModifiers::CONTROL | KeyModifiers::ALT) => buf.delete_word(),
        (KeyCode::Backspace, _) => buf.delete_char(),
        (KeyCode::Delete, _) => buf.delete_char_forward(),
        (KeyCode::Char('w'), KeyModifiers::CONTROL) => buf.delete_word(),
        (KeyCode::Char('a'), KeyModifiers::CONTROL) => buf.cursor_home(),
        (KeyCode::Char('e'), KeyModifiers::CONTROL) => buf.cursor_end(),
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => buf.clear_to_start(),
        (KeyCode::Left, _) => buf.cursor_left(),
        (KeyCode::Right, _) => buf.cursor_right(),
        (KeyCode::Home, _) => buf.cursor_home(),
        (KeyCode::End, _) => buf.cursor_end(),
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => buf.insert_char(c),
        _ => return false,
    }
    true
}

fn prev_char_boundary(s: &str, from: usize) -> usize {
    s[..from]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

fn next_char_boundary(s: &str, from: usize) -> usize {
    s[from..]
        .chars()
        .next()
        .map(|c| from + c.len_utf8())
        .unwrap_or(s.len())
}

fn word_boundary_back(s: &str, from: usize) -> usize {
    let is_word = |c: char| c.is_alphanumeric() || c == '_';
    let char_before = |pos: usize| s[..pos].chars().next_back();
    let mut pos = from;

    while pos > 0 && char_before(pos).is_some_and(|c| c.is_whitespace()) {
        pos = prev_char_boundary(s, pos);
    }
    if pos == 0 {
        return 0;
    }

    if char_before(pos).is_some_and(is_word) {
        while pos > 0 && char_before(pos).is_some_and(is_word) {
            pos = prev_char_boundary(s, pos);
        }
    } else {
        // Punctuation run, then any word chars in front of it
        while pos > 0 && char_before(pos).is_some_and(|c| !c.is_whitespace() && !is_word(c)) {
            pos = prev_char_boundary(s, pos);
        }
        while pos > 0 && char_before(pos).is_some_and(is_word) {
            pos = prev_char_boundary(s, pos);
        }
    }
    pos
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_delete() {
        let mut buf = TextBuffer::new();
        buf.insert_char('h');
        buf.insert_char('i');
        assert_eq!(buf.content(), "hi");
        assert_eq!(buf.cursor(), 2);

        buf.delete_char();
        assert_eq!(buf.content(), "h");
        assert_eq!(buf.cursor(), 1);
    }

    #[test]
    fn test_cursor_movement() {
        let mut buf = TextBuffer::new();
        buf.set_content("hello");
        assert_eq!(buf.cursor(), 5);

        buf.cursor_home();
        assert_eq!(buf.cursor(), 0);
        buf.cursor_end();
        assert_eq!(buf.cursor(), 5);
        buf.cursor_left();
        assert_eq!(buf.cursor(), 4);
        buf.cursor_right();
        assert_eq!(buf.cursor(), 5);
    }

    #[test]
    fn test_multibyte_input() {
        let mut buf = TextBuffer::new();
        buf.insert_char('é');
        buf.insert_char('!');
        buf.cursor_left();
        buf.cursor_left();
        assert_eq!(buf.cursor(), 0);
        buf.cursor_right();
        assert_eq!(buf.cursor(), 'é'.len_utf8());

        buf.cursor_end();
        buf.delete_char();
        buf.delete_char();
        assert!(buf.is_empty());
    }

    #[test]
    fn test_delete_word_simple() {
        let mut buf = TextBuffer::new();
        buf.set_content("hello world");
        buf.delete_word();
        assert_eq!(buf.content(), "hello ");
    }

    #[test]
    fn test_delete_word_trailing_spaces() {
        let mut buf = TextBuffer::new();
        buf.set_content("hello   ");
        buf.delete_word();
        assert_eq!(buf.content(), "");
    }

    #[test]
    fn test_delete_word_punctuation() {
        let mut buf = TextBuffer::new();
        buf.set_content("hello!");
        buf.delete_word();
        assert_eq!(buf.content(), "");
    }

    #[test]
    fn test_clear_to_start() {
        let mut buf = TextBuffer::new();
        buf.set_content("hello world");
        buf.set_cursor(6);
        buf.clear_to_start();
        assert_eq!(buf.content(), "world");
        assert_eq!(buf.cursor(), 0);
    }

    #[test]
    fn test_handle_text_key() {
        let mut buf = TextBuffer::new();

        assert!(handle_text_key(&mut buf, KeyCode::Char('a'), KeyModifiers::NONE));
        assert_eq!(buf.content(), "a");

        assert!(handle_text_key(&mut buf, KeyCode::Backspace, KeyModifiers::NONE));
        assert_eq!(buf.content(), "");

        assert!(!handle_text_key(&mut buf, KeyCode::Enter, KeyModifiers::NONE));
    }
}
