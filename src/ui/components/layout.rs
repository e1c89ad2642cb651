//! Layout helpers and common rendering utilities

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

/// Fixed-size rect centered in `r`, shrunk to fit if necessary.
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let w = width.min(r.width);
    let h = height.min(r.height);
    let x = r.x + (r.width - w) / 2;
    let y = r.y + (r.height - h) / 2;
    Rect::new(x, y, w, h)
}

pub fn create_popup_block(title: &str, color: Color) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
        .style(Style::default().bg(Color::Black))
}

pub fn render_empty_message(area: Rect, buf: &mut Buffer, msg: &str) {
    Paragraph::new(msg)
        .style(Style::default().fg(Color::DarkGray))
        .render(area, buf);
}

pub fn render_footer(buf: &mut Buffer, popup: Rect, text: &str) {
    if popup.height == 0 {
        return;
    }
    let y = popup.y + popup.height - 1;
    let x = popup.x + (popup.width.saturating_sub(text.chars().count() as u16)) / 2;
    buf.set_string(x, y, text, Style::default().fg(Color::DarkGray));
}

pub fn truncate_with_ellipsis(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    let head: String = s.chars().take(max_len.saturating_sub(1)).collect();
    format!("{}…", head)
}

/// Greedy word wrap; words longer than the width are split hard. Newlines
/// in the input start fresh lines.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    let mut lines = Vec::new();
    for raw in text.split('\n') {
        if raw.is_empty() {
            lines.push(String::new());
            continue;
        }
        let mut line = String::new();
        let mut line_len = 0;
        for word in raw.split_whitespace() {
            let word_len = word.chars().count();
            if line_len > 0 && line_len + 1 + word_len > width {
                lines.push(std::mem::take(&mut line));
                line_len = 0;
            }
            if line_len > 0 {
                line.push(' ');
                line_len += 1;
            }
            // Hard-split oversized words
            let mut rest = word;
            while rest.chars().count() > width {
                let split: usize = rest.chars().take(width - line_len).map(|c| c.len_utf8()).sum();
                line.push_str(&rest[..split]);
                lines.push(std::mem::take(&mut line));
                line_len = 0;
                rest = &rest[split..];
            }
            line.push_str(rest);
            line_len += rest.chars().count();
        }
        lines.push(line);
    }
    lines
}
