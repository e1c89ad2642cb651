//! Scroll state management

#[derive(Debug, Default, Clone)]
pub struct ScrollState {
    offset: usize,
    /// When set, the view sticks to the newest content until the user
    /// scrolls up.
    follow: bool,
}

impl ScrollState {
    pub fn following() -> Self {
        Self {
            offset: 0,
            follow: true,
        }
    }

    pub fn offset(&self, max: usize) -> usize {
        if self.follow { max } else { self.offset.min(max) }
    }

    pub fn reset(&mut self) {
        self.offset = 0;
        self.follow = false;
    }

    pub fn scroll_up(&mut self, amount: usize, max: usize) {
        self.offset = self.offset(max).saturating_sub(amount);
        self.follow = false;
    }

    pub fn scroll_down(&mut self, amount: usize, max: usize) {
        let next = (self.offset(max) + amount).min(max);
        self.offset = next;
        self.follow = next >= max;
    }

    /// Jump back to the newest content and stay there.
    pub fn follow_bottom(&mut self) {
        self.follow = true;
    }
}
