//! Status Line Component
//!
//! Mode indicator, transient messages, and showcase context on the right.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::input::InputMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Info,
    Success,
    Warning,
    Error,
}

impl MessageType {
    pub fn color(&self) -> Color {
        match self {
            Self::Info => Color::Blue,
            Self::Success => Color::Green,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }
}

pub struct StatusLine<'a> {
    mode: InputMode,
    message: Option<(&'a str, MessageType)>,
    view_label: Option<&'a str>,
    zoom_percent: Option<i32>,
    rotation: Option<i32>,
    card_count: Option<(usize, usize)>,
}

impl<'a> StatusLine<'a> {
    pub fn new(mode: InputMode) -> Self {
        Self {
            mode,
            message: None,
            view_label: None,
            zoom_percent: None,
            rotation: None,
            card_count: None,
        }
    }

    pub fn message(mut self, msg: &'a str, msg_type: MessageType) -> Self {
        self.message = Some((msg, msg_type));
        self
    }

    pub fn view_label(mut self, label: &'a str) -> Self {
        self.view_label = Some(label);
        self
    }

    pub fn zoom_percent(mut self, percent: i32) -> Self {
        self.zoom_percent = Some(percent);
        self
    }

    pub fn rotation(mut self, degrees: i32) -> Self {
        self.rotation = Some(degrees);
        self
    }

    /// `selected` is the zero-based card index; display is one-based.
    pub fn card_count(mut self, selected: usize, total: usize) -> Self {
        self.card_count = Some((selected, total));
        self
    }
}

fn mode_style(mode: InputMode) -> Style {
    let base = Style::default().fg(Color::Black);
    match mode {
        InputMode::Normal => base.bg(Color::Yellow),
        InputMode::Chat => base.bg(Color::Green),
        InputMode::Help => base.bg(Color::Blue),
        InputMode::History => base.bg(Color::Magenta),
    }
}

fn render_mode_indicator(buf: &mut Buffer, area: Rect, mode: InputMode) -> u16 {
    let style = mode_style(mode).add_modifier(Modifier::BOLD);
    let mode_text = format!(" {} ", mode.indicator());
    buf.set_string(area.x, area.y, &mode_text, style);
    mode_text.len() as u16
}

fn render_right_section(
    buf: &mut Buffer,
    area: Rect,
    view_label: Option<&str>,
    zoom_percent: Option<i32>,
    rotation: Option<i32>,
    card_count: Option<(usize, usize)>,
) {
    let mut spans: Vec<Span> = Vec::new();
    let sep = Span::styled(" | ", Style::default().fg(Color::White).bg(Color::DarkGray));

    if let Some(label) = view_label {
        spans.push(Span::styled(
            label.to_string(),
            Style::default().fg(Color::Yellow).bg(Color::DarkGray),
        ));
    }

    if let Some(percent) = zoom_percent {
        if !spans.is_empty() {
            spans.push(sep.clone());
        }
        spans.push(Span::styled(
            format!("{}%", percent),
            Style::default().fg(Color::Cyan).bg(Color::DarkGray),
        ));
    }

    if let Some(degrees) = rotation {
        if !spans.is_empty() {
            spans.push(sep.clone());
        }
        spans.push(Span::styled(
            format!("{}°", degrees),
            Style::default().fg(Color::Cyan).bg(Color::DarkGray),
        ));
    }

    if let Some((selected, total)) = card_count {
        if !spans.is_empty() {
            spans.push(sep);
        }
        spans.push(Span::styled(
            format!("{}/{}", selected + 1, total),
            Style::default()
                .fg(Color::Cyan)
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let line = Line::from(spans);
    let width = line.width() as u16;
    let x = area.x + area.width.saturating_sub(width + 1);
    buf.set_line(x, area.y, &line, width);
}

impl Widget for StatusLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(Color::DarkGray));

        let mode_width = render_mode_indicator(buf, area, self.mode);
        let x = area.x + mode_width + 1;

        if let Some((msg, msg_type)) = self.message {
            buf.set_string(
                x,
                area.y,
                msg,
                Style::default().bg(Color::DarkGray).fg(msg_type.color()),
            );
        }

        render_right_section(
            buf,
            area,
            self.view_label,
            self.zoom_percent,
            self.rotation,
            self.card_count,
        );
    }
}

pub struct HelpBar {
    hints: Vec<(&'static str, &'static str)>,
}

impl HelpBar {
    pub fn for_mode(mode: InputMode) -> Self {
        Self {
            hints: hints_for_mode(mode),
        }
    }
}

fn hints_for_mode(mode: InputMode) -> Vec<(&'static str, &'static str)> {
    match mode {
        InputMode::Normal => vec![
            ("g/t", "grid/stack"),
            ("enter", "flip/focus"),
            ("h/l", "navigate"),
            ("+/-", "zoom"),
            ("r", "rotate"),
            ("o/s/y", "doc/share/history"),
            ("c", "chat"),
            ("?", "help"),
        ],
        InputMode::Chat => vec![
            ("enter", "send"),
            ("1-7", "quick question"),
            ("pgup/pgdn", "scroll"),
            ("esc", "close"),
        ],
        InputMode::Help | InputMode::History => {
            vec![("j/k", "scroll"), ("esc", "close")]
        }
    }
}

fn build_hint_spans(hints: &[(&'static str, &'static str)]) -> Vec<Span<'static>> {
    let mut spans: Vec<Span> = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            *key,
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::Gray),
        ));
    }

    spans
}

impl Widget for HelpBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let spans = build_hint_spans(&self.hints);
        let line = Line::from(spans);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
