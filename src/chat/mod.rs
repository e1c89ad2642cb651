//! Assistant Chat
//!
//! Scripted dialogue session: an append-only transcript, an ordered rule
//! table for responses, and a simulated "thinking" delay between a user
//! turn and the bot reply. The delay is a scheduled reply owned by the
//! session; closing the panel cancels it, so a reply can never land in a
//! dismissed transcript.

pub mod rules;
pub mod transcript;

use std::time::{Duration, Instant};

pub use transcript::{Speaker, Transcript};

use crate::ui::components::ScrollState;

/// A bot reply waiting out the thinking delay. Doubles as the typing
/// placeholder: the indicator is shown exactly while one of these exists.
#[derive(Debug, Clone)]
struct PendingReply {
    due: Instant,
    text: &'static str,
}

#[derive(Debug)]
pub struct ChatSession {
    open: bool,
    greeted: bool,
    transcript: Transcript,
    pending: Option<PendingReply>,
    pub scroll: ScrollState,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            open: false,
            greeted: false,
            transcript: Transcript::new(),
            pending: None,
            scroll: ScrollState::following(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Opens the panel. The first open schedules the greeting.
    pub fn open(&mut self, greeting_delay: Duration) {
        self.open = true;
        if !self.greeted && self.transcript.is_empty() {
            self.greeted = true;
            self.schedule(rules::GREETING, greeting_delay);
        }
    }

    /// Closes the panel and cancels any scheduled reply along with its
    /// typing placeholder.
    pub fn close(&mut self) {
        self.open = false;
        self.pending = None;
    }

    pub fn toggle(&mut self, greeting_delay: Duration) {
        if self.open {
            self.close();
        } else {
            self.open(greeting_delay);
        }
    }

    pub fn is_typing(&self) -> bool {
        self.pending.is_some()
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Quick questions are offered only while the greeting is the sole
    /// transcript entry and no reply is in flight.
    pub fn show_quick_questions(&self) -> bool {
        self.open && self.transcript.len() == 1 && self.pending.is_none()
    }

    /// Records a user turn and schedules the matched reply. Returns false
    /// without touching the transcript when the input is blank or a reply
    /// is already pending (input is disabled while the bot is "typing").
    pub fn submit(&mut self, text: &str, delay: Duration) -> bool {
        let text = text.trim();
        if text.is_empty() || self.pending.is_some() {
            return false;
        }
        let reply = rules::respond(text);
        self.transcript.push_user(text);
        self.schedule(reply, delay);
        true
    }

    /// Submits the n-th quick question verbatim as a user turn.
    pub fn submit_quick(&mut self, index: usize, delay: Duration) -> bool {
        match rules::QUICK_QUESTIONS.get(index) {
            Some(question) => self.submit(question, delay),
            None => false,
        }
    }

    /// Delivers a due reply: the typing placeholder is cleared before the
    /// bot entry is appended. Returns true when a reply was delivered.
    pub fn tick(&mut self) -> bool {
        let Some(reply) = self.pending.take_if(|p| Instant::now() >= p.due) else {
            return false;
        };
        self.transcript.push_bot(reply.text);
        true
    }

    fn schedule(&mut self, text: &'static str, delay: Duration) {
        debug_assert!(self.pending.is_none());
        self.pending = Some(PendingReply {
            due: Instant::now() + delay,
            text,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: Duration = Duration::ZERO;

    #[test]
    fn test_open_schedules_greeting_once() {
        let mut chat = ChatSession::new();
        chat.open(NOW);
        assert!(chat.is_typing());
        assert!(chat.tick());
        assert_eq!(chat.transcript().len(), 1);
        assert_eq!(chat.transcript().entries()[0].text, rules::GREETING);

        // Reopening never re-greets.
        chat.close();
        chat.open(NOW);
        assert!(!chat.is_typing());
        assert_eq!(chat.transcript().len(), 1);
    }

    #[test]
    fn test_submit_appends_user_then_bot() {
        let mut chat = ChatSession::new();
        chat.open(NOW);
        chat.tick();

        assert!(chat.submit("What is STORIUM?", NOW));
        assert_eq!(chat.transcript().len(), 2);
        assert!(chat.is_typing());

        assert!(chat.tick());
        assert!(!chat.is_typing());
        let entries = chat.transcript().entries();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[1].speaker, Speaker::User);
        assert_eq!(entries[2].speaker, Speaker::Bot);
        assert!(entries[2].text.starts_with("🌟 STORIUM is a decentralized"));
    }

    #[test]
    fn test_unmatched_input_gets_default_reply() {
        let mut chat = ChatSession::new();
        chat.open(NOW);
        chat.tick();
        chat.submit("asdf", NOW);
        chat.tick();
        assert_eq!(
            chat.transcript().entries().last().unwrap().text,
            rules::DEFAULT_RESPONSE
        );
    }

    #[test]
    fn test_blank_input_is_filtered() {
        let mut chat = ChatSession::new();
        chat.open(NOW);
        chat.tick();
        assert!(!chat.submit("", NOW));
        assert!(!chat.submit("   ", NOW));
        assert_eq!(chat.transcript().len(), 1);
    }

    #[test]
    fn test_input_disabled_while_typing() {
        let mut chat = ChatSession::new();
        chat.open(NOW);
        chat.tick();
        assert!(chat.submit("ipfs", Duration::from_secs(60)));
        // Reply still pending; the second submit is rejected.
        assert!(!chat.submit("ethereum", NOW));
        assert_eq!(chat.transcript().len(), 2);
    }

    #[test]
    fn test_close_cancels_pending_reply() {
        let mut chat = ChatSession::new();
        chat.open(NOW);
        chat.tick();
        chat.submit("ipfs", NOW);
        chat.close();

        // The deadline has long passed, but the cancelled reply must never
        // be delivered.
        assert!(!chat.tick());
        assert_eq!(chat.transcript().len(), 2);
        assert_eq!(
            chat.transcript().entries().last().unwrap().speaker,
            Speaker::User
        );
    }

    #[test]
    fn test_reply_not_delivered_before_deadline() {
        let mut chat = ChatSession::new();
        chat.open(NOW);
        chat.tick();
        chat.submit("ipfs", Duration::from_secs(60));
        assert!(!chat.tick());
        assert!(chat.is_typing());
    }

    #[test]
    fn test_quick_questions_window() {
        let mut chat = ChatSession::new();
        assert!(!chat.show_quick_questions());
        chat.open(NOW);
        assert!(!chat.show_quick_questions()); // greeting still pending
        chat.tick();
        assert!(chat.show_quick_questions());

        assert!(chat.submit_quick(0, NOW));
        assert!(!chat.show_quick_questions());
        chat.tick();
        assert!(!chat.show_quick_questions()); // three entries now

        assert!(!chat.submit_quick(99, NOW));
    }
}
