//! Showcase Composer
//!
//! View-mode state machine for the card showcase: grid, stack, and focus
//! layouts, with zoom and rotation as view transforms orthogonal to mode.
//! Transitions: grid <-> stack via explicit controls, stack -> focus by
//! activating a card, focus -> stack via back. Grid and focus never reach
//! each other directly.

pub mod card;
pub mod tilt;

pub use card::CardState;
pub use tilt::Tilt;

pub const ZOOM_MIN_TENTHS: i32 = 6;
pub const ZOOM_MAX_TENTHS: i32 = 20;
pub const ZOOM_STEP_TENTHS: i32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Grid,
    Stack,
    Focus,
}

impl ViewMode {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Grid => "Grid View",
            Self::Stack => "Stack View",
            Self::Focus => "Focus View",
        }
    }
}

#[derive(Debug)]
pub struct ShowcaseState {
    mode: ViewMode,
    /// Valid only while mode == Focus.
    focus: Option<usize>,
    /// Keyboard cursor over the card sequence, always in 0..len (0 when empty).
    selected: usize,
    /// Zoom stored in tenths so repeated steps stay exact.
    zoom_tenths: i32,
    /// Accumulated rotation in degrees, 90-degree increments, unbounded.
    rotation: i32,
    hovered: Option<usize>,
    cards: Vec<CardState>,
}

impl ShowcaseState {
    pub fn new(card_count: usize) -> Self {
        Self {
            mode: ViewMode::Grid,
            focus: None,
            selected: 0,
            zoom_tenths: 10,
            rotation: 0,
            hovered: None,
            cards: vec![CardState::new(); card_count],
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    pub fn focus_index(&self) -> Option<usize> {
        self.focus
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn zoom(&self) -> f32 {
        self.zoom_tenths as f32 / 10.0
    }

    pub fn zoom_percent(&self) -> i32 {
        self.zoom_tenths * 10
    }

    /// Rotation reduced to a display angle in 0..360.
    pub fn rotation_display(&self) -> i32 {
        self.rotation.rem_euclid(360)
    }

    pub fn card(&self, index: usize) -> Option<&CardState> {
        self.cards.get(index)
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    // --- mode transitions -------------------------------------------------

    /// Grid is only adjacent to stack; focus must go back first.
    pub fn to_grid(&mut self) {
        if self.mode == ViewMode::Focus {
            return;
        }
        self.enter_mode(ViewMode::Grid);
    }

    pub fn to_stack(&mut self) {
        self.enter_mode(ViewMode::Stack);
    }

    /// Stack -> focus, on card activation. Ignored in other modes.
    pub fn focus_card(&mut self, index: usize) {
        if self.mode != ViewMode::Stack || index >= self.cards.len() {
            return;
        }
        self.enter_mode(ViewMode::Focus);
        self.focus = Some(index);
        self.selected = index;
    }

    /// Focus -> stack, the explicit back action. Ignored in other modes.
    pub fn back_to_stack(&mut self) {
        if self.mode != ViewMode::Focus {
            return;
        }
        self.enter_mode(ViewMode::Stack);
    }

    /// Every mode switch resets zoom, rotation, focus, and flip state.
    fn enter_mode(&mut self, mode: ViewMode) {
        self.mode = mode;
        self.focus = None;
        self.zoom_tenths = 10;
        self.rotation = 0;
        self.hovered = None;
        for card in &mut self.cards {
            *card = CardState::new();
        }
    }

    // --- view transforms --------------------------------------------------

    pub fn zoom_in(&mut self) {
        self.zoom_tenths = (self.zoom_tenths + ZOOM_STEP_TENTHS).min(ZOOM_MAX_TENTHS);
    }

    pub fn zoom_out(&mut self) {
        self.zoom_tenths = (self.zoom_tenths - ZOOM_STEP_TENTHS).max(ZOOM_MIN_TENTHS);
    }

    pub fn rotate(&mut self) {
        self.rotation += 90;
    }

    // --- navigation -------------------------------------------------------

    /// Moves the focus pointer, clamped at the sequence boundaries.
    pub fn focus_prev(&mut self) {
        if let Some(i) = self.focus {
            let i = i.saturating_sub(1);
            self.focus = Some(i);
            self.selected = i;
        }
    }

    pub fn focus_next(&mut self) {
        if let Some(i) = self.focus {
            let i = (i + 1).min(self.cards.len().saturating_sub(1));
            self.focus = Some(i);
            self.selected = i;
        }
    }

    pub fn select_prev(&mut self) {
        match self.mode {
            ViewMode::Focus => self.focus_prev(),
            _ => self.selected = self.selected.saturating_sub(1),
        }
    }

    pub fn select_next(&mut self) {
        match self.mode {
            ViewMode::Focus => self.focus_next(),
            _ => {
                self.selected = (self.selected + 1).min(self.cards.len().saturating_sub(1));
            }
        }
    }

    /// The card any explicit action applies to.
    pub fn active_index(&self) -> Option<usize> {
        if self.cards.is_empty() {
            return None;
        }
        match self.mode {
            ViewMode::Focus => self.focus,
            _ => Some(self.selected),
        }
    }

    // --- interaction ------------------------------------------------------

    /// Card activation (click or Enter): flips in grid and focus, promotes
    /// to focus from the stack.
    pub fn activate(&mut self, index: usize) {
        if index >= self.cards.len() {
            return;
        }
        match self.mode {
            ViewMode::Stack => self.focus_card(index),
            ViewMode::Grid | ViewMode::Focus => {
                self.selected = index;
                self.cards[index].toggle_flip();
            }
        }
    }

    pub fn flip_active(&mut self) {
        if let Some(i) = self.active_index() {
            match self.mode {
                // Enter on a stacked card focuses it, same as a click.
                ViewMode::Stack => self.focus_card(i),
                _ => self.cards[i].toggle_flip(),
            }
        }
    }

    /// Pointer-driven tilt over a card; disabled while stacked. `None`
    /// means the pointer left every card and all tilt resets.
    pub fn hover(&mut self, over: Option<(usize, Tilt)>) {
        if self.mode == ViewMode::Stack {
            self.hovered = over.map(|(i, _)| i);
            return;
        }
        self.hovered = None;
        for card in &mut self.cards {
            card.reset_tilt();
        }
        if let Some((index, tilt)) = over {
            if let Some(card) = self.cards.get_mut(index) {
                card.set_tilt(tilt);
                self.hovered = Some(index);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::showcase::tilt::tilt_for;

    #[test]
    fn test_initial_state() {
        let s = ShowcaseState::new(3);
        assert_eq!(s.mode(), ViewMode::Grid);
        assert_eq!(s.zoom(), 1.0);
        assert_eq!(s.rotation_display(), 0);
        assert_eq!(s.focus_index(), None);
    }

    #[test]
    fn test_zoom_clamps() {
        let mut s = ShowcaseState::new(1);
        for _ in 0..20 {
            s.zoom_in();
        }
        assert_eq!(s.zoom(), 2.0);
        for _ in 0..20 {
            s.zoom_out();
        }
        assert_eq!(s.zoom(), 0.6);

        // Any interleaving stays inside the bounds.
        for i in 0..50 {
            if i % 3 == 0 {
                s.zoom_in();
            } else {
                s.zoom_out();
            }
            assert!(s.zoom() >= 0.6 && s.zoom() <= 2.0);
        }
    }

    #[test]
    fn test_rotation_accumulates_and_wraps_for_display() {
        let mut s = ShowcaseState::new(1);
        for _ in 0..5 {
            s.rotate();
        }
        assert_eq!(s.rotation_display(), 90);
    }

    #[test]
    fn test_mode_switch_resets_transforms() {
        let mut s = ShowcaseState::new(3);
        s.zoom_in();
        s.rotate();
        s.to_stack();
        assert_eq!(s.zoom(), 1.0);
        assert_eq!(s.rotation_display(), 0);

        s.zoom_out();
        s.rotate();
        s.focus_card(1);
        assert_eq!(s.mode(), ViewMode::Focus);
        assert_eq!(s.zoom(), 1.0);
        assert_eq!(s.rotation_display(), 0);
        assert_eq!(s.focus_index(), Some(1));
    }

    #[test]
    fn test_grid_and_focus_only_meet_through_stack() {
        let mut s = ShowcaseState::new(3);
        // Grid cannot focus.
        s.focus_card(0);
        assert_eq!(s.mode(), ViewMode::Grid);

        s.to_stack();
        s.focus_card(2);
        assert_eq!(s.mode(), ViewMode::Focus);

        // Focus cannot jump straight to grid.
        s.to_grid();
        assert_eq!(s.mode(), ViewMode::Focus);

        // Back lands in stack, never grid.
        s.back_to_stack();
        assert_eq!(s.mode(), ViewMode::Stack);
        assert_eq!(s.focus_index(), None);

        // Back outside focus is a no-op.
        s.to_grid();
        s.back_to_stack();
        assert_eq!(s.mode(), ViewMode::Grid);
    }

    #[test]
    fn test_focus_navigation_clamps() {
        let mut s = ShowcaseState::new(3);
        s.to_stack();
        s.focus_card(0);
        s.focus_prev();
        assert_eq!(s.focus_index(), Some(0));

        s.focus_next();
        s.focus_next();
        s.focus_next();
        assert_eq!(s.focus_index(), Some(2));
    }

    #[test]
    fn test_focus_out_of_bounds_ignored() {
        let mut s = ShowcaseState::new(2);
        s.to_stack();
        s.focus_card(5);
        assert_eq!(s.mode(), ViewMode::Stack);
    }

    #[test]
    fn test_activation_per_mode() {
        let mut s = ShowcaseState::new(2);
        s.activate(0);
        assert!(s.card(0).unwrap().flipped);

        s.to_stack();
        s.activate(1);
        assert_eq!(s.mode(), ViewMode::Focus);
        assert_eq!(s.focus_index(), Some(1));

        s.activate(1);
        assert!(s.card(1).unwrap().flipped);
    }

    #[test]
    fn test_hover_disabled_in_stack() {
        let mut s = ShowcaseState::new(2);
        let tilt = tilt_for(0.5, 0.0);

        s.hover(Some((0, tilt)));
        assert_eq!(s.card(0).unwrap().tilt, tilt);

        s.hover(None);
        assert!(s.card(0).unwrap().tilt.is_level());

        s.to_stack();
        s.hover(Some((1, tilt)));
        assert!(s.card(1).unwrap().tilt.is_level());
        assert_eq!(s.hovered(), Some(1));
    }

    #[test]
    fn test_selection_clamps() {
        let mut s = ShowcaseState::new(3);
        s.select_prev();
        assert_eq!(s.selected(), 0);
        for _ in 0..10 {
            s.select_next();
        }
        assert_eq!(s.selected(), 2);
    }

    #[test]
    fn test_empty_showcase() {
        let mut s = ShowcaseState::new(0);
        assert_eq!(s.active_index(), None);
        s.select_next();
        s.flip_active();
        s.activate(0);
        assert_eq!(s.card_count(), 0);
    }
}
