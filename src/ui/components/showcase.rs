//! Showcase Component
//!
//! Control bar, card layout geometry for the three view modes, and the
//! info panel. The geometry is shared with mouse hit-testing, so layout
//! and input always agree on where a card is.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::catalog::Catalog;
use crate::showcase::tilt::stack_offset;
use crate::showcase::{ShowcaseState, ViewMode};

/// Card footprint at zoom 1.0.
pub const CARD_BASE_WIDTH: u16 = 34;
pub const CARD_BASE_HEIGHT: u16 = 12;
const CARD_GAP: u16 = 2;

fn card_size(zoom: f32) -> (u16, u16) {
    let w = ((CARD_BASE_WIDTH as f32 * zoom) as u16).max(14);
    let h = ((CARD_BASE_HEIGHT as f32 * zoom) as u16).max(6);
    (w, h)
}

/// Index-aligned card rects for the current mode. Cards that do not fit
/// the viewport come back as empty rects and are skipped by rendering and
/// hit-testing alike.
pub fn card_layouts(state: &ShowcaseState, count: usize, area: Rect) -> Vec<Rect> {
    match state.mode() {
        ViewMode::Grid => grid_layouts(state, count, area),
        ViewMode::Stack => stack_layouts(state, count, area),
        ViewMode::Focus => focus_layouts(state, count, area),
    }
}

fn grid_layouts(state: &ShowcaseState, count: usize, area: Rect) -> Vec<Rect> {
    let (w, h) = card_size(state.zoom());
    let cols = ((area.width + CARD_GAP) / (w + CARD_GAP)).max(1) as usize;
    let rotation = state.rotation_display();

    let mut rects = Vec::with_capacity(count);
    for i in 0..count {
        // Rotation reorders the flow: 180 reverses it, 90/270 run it
        // column-major to mimic the turned canvas.
        let j = match rotation {
            180 => count - 1 - i,
            90 | 270 => {
                let rows = count.div_ceil(cols);
                let col = i / rows;
                let row = i % rows;
                row * cols + col
            }
            _ => i,
        };
        let col = (j % cols) as u16;
        let row = (j / cols) as u16;
        let x = area.x + col * (w + CARD_GAP);
        let y = area.y + row * (h + 1);
        if x + w <= area.x + area.width && y + h <= area.y + area.height {
            rects.push(Rect::new(x, y, w, h));
        } else {
            rects.push(Rect::ZERO);
        }
    }
    rects
}

fn stack_layouts(state: &ShowcaseState, count: usize, area: Rect) -> Vec<Rect> {
    let (w, h) = card_size(state.zoom());
    let base_x = area.x + area.width.saturating_sub(w) / 2;
    // Leave headroom above the top card for the receding ones.
    let base_y = area.y + area.height.saturating_sub(h) / 2 + (count.min(4) as u16);

    (0..count)
        .map(|i| {
            let off = stack_offset(i);
            // 8 px of offset maps to one terminal row; scale trims width.
            let mut dy = (-off.y / 8.0) as u16;
            // The hovered card lifts out of the pile.
            if state.hovered() == Some(i) {
                dy += 1;
            }
            let shrink = ((1.0 - off.scale) * w as f32) as u16;
            let x = base_x + shrink / 2;
            let y = base_y.saturating_sub(dy);
            let width = w.saturating_sub(shrink);
            if y + h <= area.y + area.height && y >= area.y && width >= 14 {
                Rect::new(x, y, width, h)
            } else {
                Rect::ZERO
            }
        })
        .collect()
}

fn focus_layouts(state: &ShowcaseState, count: usize, area: Rect) -> Vec<Rect> {
    let (w, h) = card_size(state.zoom());
    let mut rects = vec![Rect::ZERO; count];
    if let Some(focused) = state.focus_index() {
        if focused < count {
            let rect = super::layout::centered_rect_fixed(w, h, area);
            rects[focused] = rect;
        }
    }
    rects
}

/// Topmost card under the pointer. Stack rects overlap; index 0 is drawn
/// last, so the first hit in index order wins.
pub fn card_at(layouts: &[Rect], x: u16, y: u16) -> Option<usize> {
    layouts
        .iter()
        .position(|r| !r.is_empty() && r.contains((x, y).into()))
}

pub struct ControlBar {
    mode: ViewMode,
    zoom_percent: i32,
}

impl ControlBar {
    pub fn new(state: &ShowcaseState) -> Self {
        Self {
            mode: state.mode(),
            zoom_percent: state.zoom_percent(),
        }
    }
}

fn mode_button(label: &str, key: &str, active: bool) -> Vec<Span<'static>> {
    let style = if active {
        Style::default().fg(Color::Black).bg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    vec![
        Span::styled(format!("[{}]", key), Style::default().fg(Color::Yellow)),
        Span::styled(format!(" {} ", label), style),
        Span::raw(" "),
    ]
}

impl Widget for ControlBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        spans.extend(mode_button("Grid", "g", self.mode == ViewMode::Grid));
        spans.extend(mode_button("Stack", "t", self.mode == ViewMode::Stack));
        if self.mode == ViewMode::Focus {
            spans.extend(mode_button("Focus", "b: back", true));
        }

        spans.push(Span::styled("  Zoom ", Style::default().fg(Color::Gray)));
        spans.push(Span::styled("[-]", Style::default().fg(Color::Yellow)));
        spans.push(Span::styled(
            format!(" {}% ", self.zoom_percent),
            Style::default().fg(Color::White),
        ));
        spans.push(Span::styled("[+]", Style::default().fg(Color::Yellow)));
        spans.push(Span::styled("  [r]", Style::default().fg(Color::Yellow)));
        spans.push(Span::styled(" Rotate", Style::default().fg(Color::Gray)));

        buf.set_line(area.x + 1, area.y, &Line::from(spans), area.width);
    }
}

pub struct InfoPanel<'a> {
    catalog: &'a Catalog,
    mode: ViewMode,
}

impl<'a> InfoPanel<'a> {
    pub fn new(catalog: &'a Catalog, mode: ViewMode) -> Self {
        Self { catalog, mode }
    }
}

impl Widget for InfoPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled("Total: ", Style::default().fg(Color::Gray)),
            Span::styled(
                self.catalog.len().to_string(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Active: ", Style::default().fg(Color::Gray)),
            Span::styled(
                self.catalog.active_count().to_string(),
                Style::default().fg(Color::Yellow),
            ),
            Span::styled("  Revoked: ", Style::default().fg(Color::Gray)),
            Span::styled(
                self.catalog.revoked_count().to_string(),
                Style::default().fg(Color::Red),
            ),
        ]);
        buf.set_line(area.x + 1, area.y, &line, area.width);

        let label = self.mode.label();
        let x = area.x + area.width.saturating_sub(label.len() as u16 + 1);
        buf.set_string(x, area.y, label, Style::default().fg(Color::Gray));
    }
}

/// Navigation footer shown under the focused card.
pub struct FocusFooter {
    index: usize,
    total: usize,
}

impl FocusFooter {
    pub fn new(index: usize, total: usize) -> Self {
        Self { index, total }
    }
}

impl Widget for FocusFooter {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let at_start = self.index == 0;
        let at_end = self.index + 1 >= self.total;
        let nav = |enabled: bool| {
            if enabled {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::DarkGray)
            }
        };
        let line = Line::from(vec![
            Span::styled("[h] Previous", nav(!at_start)),
            Span::styled(
                format!("  {} / {}  ", self.index + 1, self.total),
                Style::default().fg(Color::White),
            ),
            Span::styled("[l] Next", nav(!at_end)),
            Span::styled("   [b] Back to Stack", Style::default().fg(Color::Yellow)),
        ]);
        let width = line.width() as u16;
        let x = area.x + area.width.saturating_sub(width) / 2;
        buf.set_line(x, area.y, &line, width);
    }
}
