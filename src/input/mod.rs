//! Input Handling
//!
//! Modal key handling and the reusable text-editing buffer.

pub mod keymap;
pub mod modes;
pub mod text_buffer;

pub use keymap::Action;
pub use modes::{InputMode, ModeState};
pub use text_buffer::TextBuffer;
