//! Popup Dialogs
//!
//! Issuance history viewer, opened from a credential card.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Widget},
};

use crate::catalog::HistoryEvent;

use super::layout::{centered_rect_fixed, create_popup_block, render_footer, truncate_with_ellipsis};
use super::scroll::ScrollState;

/// Open history popup: a titled, scrollable event list.
#[derive(Debug)]
pub struct HistoryView {
    pub title: String,
    pub events: Vec<HistoryEvent>,
    pub scroll: ScrollState,
}

impl HistoryView {
    pub fn new(title: String, events: Vec<HistoryEvent>) -> Self {
        Self {
            title,
            events,
            scroll: ScrollState::default(),
        }
    }
}

pub struct HistoryDialog<'a> {
    view: &'a HistoryView,
}

impl<'a> HistoryDialog<'a> {
    pub fn new(view: &'a HistoryView) -> Self {
        Self { view }
    }
}

impl Widget for HistoryDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = (area.width * 2 / 3).clamp(40, 72).min(area.width);
        let height = (self.view.events.len() as u16 + 6).clamp(9, 18).min(area.height);
        let popup = centered_rect_fixed(width, height, area);

        Clear.render(popup, buf);
        let block = create_popup_block(" Credential History ", Color::Magenta);
        let inner = block.inner(popup);
        block.render(popup, buf);

        buf.set_string(
            inner.x + 1,
            inner.y,
            truncate_with_ellipsis(&self.view.title, inner.width.saturating_sub(2) as usize),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        );

        let list = Rect::new(
            inner.x + 1,
            inner.y + 2,
            inner.width.saturating_sub(2),
            inner.height.saturating_sub(4),
        );

        if self.view.events.is_empty() {
            buf.set_string(
                list.x,
                list.y,
                "No recorded events",
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            );
        } else {
            let viewport = list.height as usize;
            let max = self.view.events.len().saturating_sub(viewport);
            let offset = self.view.scroll.offset(max);
            for (row, event) in self
                .view
                .events
                .iter()
                .skip(offset)
                .take(viewport)
                .enumerate()
            {
                let mut spans = vec![
                    Span::styled(event.at_display(), Style::default().fg(Color::DarkGray)),
                    Span::raw("  "),
                    Span::styled(
                        event.action.clone(),
                        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                    ),
                ];
                if let Some(details) = &event.details {
                    spans.push(Span::styled(
                        format!("  {}", details),
                        Style::default().fg(Color::Gray),
                    ));
                }
                let line = Line::from(spans);
                buf.set_line(list.x, list.y + row as u16, &line, list.width);
            }
        }

        render_footer(buf, popup, " j/k scroll · esc close ");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn events(n: usize) -> Vec<HistoryEvent> {
        (0..n)
            .map(|i| HistoryEvent {
                at: 1_719_792_000 + i as i64 * 86_400,
                action: format!("event-{}", i),
                details: (i % 2 == 0).then(|| "details".to_string()),
            })
            .collect()
    }

    fn buffer_text(buf: &Buffer) -> String {
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_history_lists_events() {
        let view = HistoryView::new("#1 BSc Computer Science".to_string(), events(2));
        let mut buf = Buffer::empty(Rect::new(0, 0, 80, 24));
        HistoryDialog::new(&view).render(buf.area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains("BSc Computer Science"));
        assert!(text.contains("event-0"));
        assert!(text.contains("event-1"));
    }

    #[test]
    fn test_history_empty_state() {
        let view = HistoryView::new("#2 MSc Cryptography".to_string(), Vec::new());
        let mut buf = Buffer::empty(Rect::new(0, 0, 80, 24));
        HistoryDialog::new(&view).render(buf.area, &mut buf);
        assert!(buffer_text(&buf).contains("No recorded events"));
    }

    #[test]
    fn test_history_scrolls_past_viewport() {
        let mut view = HistoryView::new("#1".to_string(), events(30));
        let mut buf = Buffer::empty(Rect::new(0, 0, 80, 24));
        HistoryDialog::new(&view).render(buf.area, &mut buf);
        let top = buffer_text(&buf);
        assert!(top.contains("event-0"));
        assert!(!top.contains("event-29"));

        view.scroll.scroll_down(30, 30);
        let mut buf = Buffer::empty(Rect::new(0, 0, 80, 24));
        HistoryDialog::new(&view).render(buf.area, &mut buf);
        assert!(buffer_text(&buf).contains("event-29"));
    }
}
