//! Help Screen
//!
//! Scrollable keybinding reference popup.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Widget},
};

use super::layout::{centered_rect_fixed, create_popup_block, render_footer};
use super::scroll::ScrollState;

#[derive(Debug, Default)]
pub struct HelpState {
    pub scroll: ScrollState,
}

const BINDINGS: &[(&str, &str)] = &[
    ("", "── Views ──"),
    ("g", "Grid view"),
    ("t", "Stack view"),
    ("enter / f", "Open card (stack) or flip card"),
    ("b / esc", "Back to stack from focus"),
    ("h l j k", "Move selection / navigate focus"),
    ("", "── Cards ──"),
    ("+ / -", "Zoom in / out"),
    ("r", "Rotate 90°"),
    ("o", "Copy document link"),
    ("s", "Copy share link"),
    ("y", "View issuance history"),
    ("", "── Assistant ──"),
    ("c", "Open / close the chat"),
    ("1-7", "Ask a quick question"),
    ("enter", "Send message"),
    ("pgup / pgdn", "Scroll transcript"),
    ("", "── General ──"),
    ("mouse", "Hover tilts, click activates"),
    ("?", "This help"),
    ("q / ctrl-c", "Quit"),
];

pub struct HelpScreen<'a> {
    state: &'a HelpState,
}

impl<'a> HelpScreen<'a> {
    pub fn new(state: &'a HelpState) -> Self {
        Self { state }
    }

    pub fn line_count() -> usize {
        BINDINGS.len()
    }
}

impl Widget for HelpScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = 52.min(area.width);
        let height = (BINDINGS.len() as u16 + 4).min(area.height);
        let popup = centered_rect_fixed(width, height, area);

        Clear.render(popup, buf);
        let block = create_popup_block(" Help ", Color::Blue);
        let inner = block.inner(popup);
        block.render(popup, buf);

        let viewport = inner.height.saturating_sub(1) as usize;
        let max = BINDINGS.len().saturating_sub(viewport);
        let offset = self.state.scroll.offset(max);

        for (row, (key, desc)) in BINDINGS.iter().skip(offset).take(viewport).enumerate() {
            let y = inner.y + row as u16;
            if key.is_empty() {
                buf.set_string(
                    inner.x + 1,
                    y,
                    *desc,
                    Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
                );
            } else {
                let line = Line::from(vec![
                    Span::styled(
                        format!("  {:<12}", key),
                        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(*desc, Style::default().fg(Color::White)),
                ]);
                buf.set_line(inner.x + 1, y, &line, inner.width.saturating_sub(2));
            }
        }

        render_footer(buf, popup, " j/k scroll · esc close ");
    }
}
