//! Card Interaction State
//!
//! Per-card flip and hover-tilt state. Tilt is transient and reset on
//! pointer leave; the flip toggles on activation and survives hover.

use super::tilt::Tilt;

#[derive(Debug, Clone, Copy, Default)]
pub struct CardState {
    pub flipped: bool,
    pub tilt: Tilt,
}

impl CardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_flip(&mut self) {
        self.flipped = !self.flipped;
    }

    pub fn set_tilt(&mut self, tilt: Tilt) {
        self.tilt = tilt;
    }

    pub fn reset_tilt(&mut self) {
        self.tilt = Tilt::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::showcase::tilt::tilt_for;

    #[test]
    fn test_flip_toggles() {
        let mut card = CardState::new();
        assert!(!card.flipped);
        card.toggle_flip();
        assert!(card.flipped);
        card.toggle_flip();
        assert!(!card.flipped);
    }

    #[test]
    fn test_tilt_reset_keeps_flip() {
        let mut card = CardState::new();
        card.toggle_flip();
        card.set_tilt(tilt_for(0.3, 0.3));
        card.reset_tilt();
        assert!(card.tilt.is_level());
        assert!(card.flipped);
    }
}
