//! Dialogue Transcript
//!
//! Append-only log of user and bot turns, owned by the chat session.

use chrono::{DateTime, Local};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Bot,
}

impl Speaker {
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::User => "you",
            Self::Bot => "bot",
        }
    }
}

#[derive(Debug, Clone)]
pub struct TranscriptEntry {
    pub speaker: Speaker,
    pub text: String,
    pub created_at: DateTime<Local>,
}

/// Entries are only ever appended; nothing mutates or deletes a turn once
/// it is recorded.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&mut self, text: impl Into<String>) {
        self.push(Speaker::User, text.into());
    }

    pub fn push_bot(&mut self, text: impl Into<String>) {
        self.push(Speaker::Bot, text.into());
    }

    fn push(&mut self, speaker: Speaker, text: String) {
        self.entries.push(TranscriptEntry {
            speaker,
            text,
            created_at: Local::now(),
        });
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_order() {
        let mut t = Transcript::new();
        t.push_bot("hello");
        t.push_user("hi");
        t.push_bot("how can I help?");

        let speakers: Vec<Speaker> = t.entries().iter().map(|e| e.speaker).collect();
        assert_eq!(speakers, vec![Speaker::Bot, Speaker::User, Speaker::Bot]);
        assert_eq!(t.entries()[1].text, "hi");
        assert_eq!(t.len(), 3);
    }

    #[test]
    fn test_timestamps_monotonic() {
        let mut t = Transcript::new();
        t.push_user("a");
        t.push_user("b");
        assert!(t.entries()[0].created_at <= t.entries()[1].created_at);
    }
}
