//! Assistant Chat Window
//!
//! Floating chat panel: scrollable transcript, quick questions, typing
//! indicator, and the message input line. Reply scheduling lives in
//! `chat::ChatSession`; this is presentation only.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Widget},
};

use crate::chat::rules::QUICK_QUESTIONS;
use crate::chat::{ChatSession, Speaker};

use super::layout::wrap_text;

const INPUT_HEIGHT: u16 = 3;

pub struct ChatWindow<'a> {
    session: &'a ChatSession,
    input: &'a str,
    input_active: bool,
    scroll_max_out: Option<&'a mut usize>,
}

impl<'a> ChatWindow<'a> {
    pub fn new(session: &'a ChatSession, input: &'a str) -> Self {
        Self {
            session,
            input,
            input_active: false,
            scroll_max_out: None,
        }
    }

    pub fn input_active(mut self, active: bool) -> Self {
        self.input_active = active;
        self
    }

    /// Receives the scroll range so key handling can page through the
    /// transcript without re-measuring it.
    pub fn scroll_max_out(mut self, out: &'a mut usize) -> Self {
        self.scroll_max_out = Some(out);
        self
    }

    fn transcript_lines(&self, width: usize) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for entry in self.session.transcript().entries() {
            let (name, color) = match entry.speaker {
                Speaker::User => ("You", Color::Yellow),
                Speaker::Bot => ("STORIUM AI", Color::Cyan),
            };
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{} {}", entry.speaker.glyph(), name),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}", entry.created_at.format("%H:%M")),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
            for wrapped in wrap_text(&entry.text, width.saturating_sub(2).max(8)) {
                lines.push(Line::from(Span::styled(
                    format!("  {}", wrapped),
                    Style::default().fg(Color::White),
                )));
            }
            lines.push(Line::default());
        }

        if self.session.show_quick_questions() {
            lines.push(Line::from(Span::styled(
                "Quick questions:",
                Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
            )));
            for (i, question) in QUICK_QUESTIONS.iter().enumerate() {
                lines.push(Line::from(vec![
                    Span::styled(format!("  [{}] ", i + 1), Style::default().fg(Color::Yellow)),
                    Span::styled(*question, Style::default().fg(Color::White)),
                ]));
            }
            lines.push(Line::default());
        }

        if self.session.is_typing() {
            lines.push(Line::from(Span::styled(
                "STORIUM AI is typing...",
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            )));
        }
        lines
    }

    fn render_input(&self, area: Rect, buf: &mut Buffer) {
        let border = if self.input_active {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border)
            .title(" Message ");
        let inner = block.inner(area);
        block.render(area, buf);

        if self.session.is_typing() {
            buf.set_string(
                inner.x,
                inner.y,
                "waiting for reply...",
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            );
            return;
        }

        // Keep the tail visible when the text outgrows the field.
        let visible: String = {
            let budget = inner.width.saturating_sub(1) as usize;
            let chars: Vec<char> = self.input.chars().collect();
            let start = chars.len().saturating_sub(budget);
            chars[start..].iter().collect()
        };
        let mut spans = vec![Span::styled(visible, Style::default().fg(Color::White))];
        if self.input_active {
            spans.push(Span::styled("▌", Style::default().fg(Color::Green)));
        }
        buf.set_line(inner.x, inner.y, &Line::from(spans), inner.width);
    }
}

impl Widget for ChatWindow<'_> {
    fn render(mut self, area: Rect, buf: &mut Buffer) {
        if area.width < 24 || area.height < 8 {
            return;
        }
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" STORIUM Assistant ")
            .title_bottom(Line::from(" esc close ").right_aligned());
        let inner = block.inner(area);
        block.render(area, buf);

        let transcript_area = Rect::new(
            inner.x,
            inner.y,
            inner.width,
            inner.height.saturating_sub(INPUT_HEIGHT),
        );
        let input_area = Rect::new(
            inner.x,
            inner.y + transcript_area.height,
            inner.width,
            INPUT_HEIGHT.min(inner.height),
        );

        let lines = self.transcript_lines(transcript_area.width as usize);
        let viewport = transcript_area.height as usize;
        let max = lines.len().saturating_sub(viewport);
        let offset = self.session.scroll.offset(max);
        if let Some(out) = self.scroll_max_out.take() {
            *out = max;
        }

        for (row, line) in lines.iter().skip(offset).take(viewport).enumerate() {
            buf.set_line(
                transcript_area.x,
                transcript_area.y + row as u16,
                line,
                transcript_area.width,
            );
        }

        self.render_input(input_area, buf);
    }
}
