//! UI Components

pub mod card;
pub mod chat;
pub mod dialogs;
pub mod help;
pub mod layout;
pub mod scroll;
pub mod showcase;
pub mod statusline;

pub use card::CredentialCard;
pub use chat::ChatWindow;
pub use dialogs::{HistoryDialog, HistoryView};
pub use help::{HelpScreen, HelpState};
pub use scroll::ScrollState;
pub use showcase::{card_at, card_layouts, ControlBar, FocusFooter, InfoPanel};
pub use statusline::{HelpBar, MessageType, StatusLine};
