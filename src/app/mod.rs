//! Application State

pub mod actions;
pub mod config;
pub mod input;

use std::time::Instant;

use ratatui::layout::Rect;

use crate::catalog::Catalog;
use crate::chat::ChatSession;
use crate::input::ModeState;
use crate::showcase::ShowcaseState;
use crate::ui::components::{HelpState, HistoryView, MessageType};

pub use config::AppConfig;

pub struct App {
    pub config: AppConfig,
    pub catalog: Catalog,
    pub showcase: ShowcaseState,
    pub chat: ChatSession,
    pub mode_state: ModeState,

    pub history_view: Option<HistoryView>,
    pub help_state: HelpState,
    pub help_open: bool,

    /// Transient status message with its creation time.
    pub message: Option<(String, MessageType, Instant)>,

    /// Geometry from the last render, consumed by mouse dispatch.
    pub card_areas: Vec<Rect>,
    pub chat_area: Rect,
    pub chat_scroll_max: usize,

    pub should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig, catalog: Catalog) -> Self {
        let showcase = ShowcaseState::new(catalog.len());
        Self {
            config,
            catalog,
            showcase,
            chat: ChatSession::new(),
            mode_state: ModeState::new(),
            history_view: None,
            help_state: HelpState::default(),
            help_open: false,
            message: None,
            card_areas: Vec::new(),
            chat_area: Rect::ZERO,
            chat_scroll_max: 0,
            should_quit: false,
        }
    }

    /// Periodic upkeep: deliver due chat replies and expire the status
    /// message.
    pub fn tick(&mut self) {
        self.chat.tick();
        if let Some((_, _, created)) = &self.message {
            if created.elapsed() >= self.config.message_ttl {
                self.message = None;
            }
        }
    }

    pub fn set_message(&mut self, text: &str, msg_type: MessageType) {
        self.message = Some((text.to_string(), msg_type, Instant::now()));
    }

    pub fn toggle_chat(&mut self) {
        self.chat.toggle(self.config.greeting_delay);
        if self.chat.is_open() {
            self.mode_state.to_chat();
        } else {
            self.mode_state.to_normal();
        }
    }

    pub fn open_help(&mut self) {
        self.help_open = true;
        self.help_state.scroll.reset();
        self.mode_state.to_help();
    }

    pub fn close_help(&mut self) {
        self.help_open = false;
        self.mode_state.to_normal();
    }

    pub fn close_history(&mut self) {
        self.history_view = None;
        self.mode_state.to_normal();
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::time::Duration;

    /// Two credentials, one backed by a database record; all chat delays
    /// zeroed so tests can tick replies through immediately.
    pub(crate) fn sample_app() -> App {
        let catalog: Catalog = serde_json::from_str(
            r#"{
                "credentials": [
                    {
                        "token_id": 1,
                        "degree": "BSc Computer Science",
                        "institution": "Royal University",
                        "issue_date": 1719792000,
                        "ipfs_hash": "QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG",
                        "student_address": "0x9f8b2c4d6e8fa1b3c5d7e9fb1a3c5d7e9fb1a3c5"
                    },
                    {
                        "token_id": 2,
                        "degree": "MSc Cryptography",
                        "institution": "Royal University",
                        "issue_date": 1722470400,
                        "ipfs_hash": "QmT78zSuBmuS4z925WZfrqQ1qHaJ56DQaTfyMUF7F8ff5w",
                        "student_address": "0x1a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b",
                        "revoked": true
                    }
                ],
                "records": [
                    {
                        "id": "rec-1",
                        "token_id": 1,
                        "document_url": "https://gateway.pinata.cloud/ipfs/QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG",
                        "share_url": "https://storium.app/c/rec-1",
                        "history": [
                            { "at": 1719792000, "action": "issued" }
                        ]
                    }
                ]
            }"#,
        )
        .unwrap();

        let config = AppConfig {
            greeting_delay: Duration::ZERO,
            quick_reply_delay: Duration::ZERO,
            reply_delay_min: Duration::ZERO,
            reply_delay_max: Duration::ZERO,
            ..AppConfig::default()
        };
        App::new(config, catalog)
    }

    #[test]
    fn test_message_expires_after_ttl() {
        let mut app = sample_app();
        app.config.message_ttl = Duration::ZERO;
        app.set_message("copied", MessageType::Success);
        assert!(app.message.is_some());
        app.tick();
        assert!(app.message.is_none());
    }

    #[test]
    fn test_toggle_chat_switches_mode() {
        let mut app = sample_app();
        app.toggle_chat();
        assert!(app.chat.is_open());
        assert!(app.mode_state.mode.is_text_input());

        app.toggle_chat();
        assert!(!app.chat.is_open());
        assert!(!app.mode_state.mode.is_text_input());
    }

    #[test]
    fn test_tick_delivers_due_reply() {
        let mut app = sample_app();
        app.toggle_chat();
        app.tick();
        assert_eq!(app.chat.transcript().len(), 1);
    }
}
