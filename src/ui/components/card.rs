//! Credential Card Component
//!
//! Two-sided card for one credential. The front carries the headline
//! fields and status badge, the back the on-chain detail plus the action
//! hints. Hover tilt is expressed as edge highlighting and a one-cell
//! content parallax; stacked cards render dimmed and inert.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Widget},
};

use crate::catalog::Credential;
use crate::showcase::CardState;
use crate::showcase::tilt::Tilt;

use super::layout::{render_footer, truncate_with_ellipsis};

/// Tilt below this angle produces no visible shading.
const TILT_SHADE_DEG: f32 = 4.0;

pub struct CredentialCard<'a> {
    credential: &'a Credential,
    state: &'a CardState,
    stacked: bool,
    stack_depth: usize,
    selected: bool,
}

impl<'a> CredentialCard<'a> {
    pub fn new(credential: &'a Credential, state: &'a CardState) -> Self {
        Self {
            credential,
            state,
            stacked: false,
            stack_depth: 0,
            selected: false,
        }
    }

    pub fn stacked(mut self, depth: usize) -> Self {
        self.stacked = true;
        self.stack_depth = depth;
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    fn dimmed(&self) -> bool {
        self.stacked && self.stack_depth > 0
    }

    fn text_color(&self) -> Color {
        if self.dimmed() { Color::DarkGray } else { Color::White }
    }

    fn accent_color(&self) -> Color {
        if self.dimmed() { Color::DarkGray } else { Color::Yellow }
    }

    fn border_color(&self) -> Color {
        if self.selected {
            Color::Yellow
        } else if self.dimmed() {
            Color::DarkGray
        } else {
            Color::Gray
        }
    }
}

fn render_field(buf: &mut Buffer, x: u16, y: &mut u16, width: u16, label: &str, value: &[Span]) {
    buf.set_string(x, *y, format!("{}:", label), Style::default().fg(Color::DarkGray));
    let value_x = x + 9;
    let line = Line::from(value.to_vec());
    buf.set_line(value_x, *y, &line, width.saturating_sub(9));
    *y += 1;
}

fn shade_tilt_edges(buf: &mut Buffer, area: Rect, tilt: Tilt) {
    let highlight = Style::default().fg(Color::Yellow);
    if tilt.rotate_y >= TILT_SHADE_DEG {
        for y in area.y..area.y + area.height {
            if let Some(cell) = buf.cell_mut((area.x + area.width - 1, y)) {
                cell.set_style(highlight);
            }
        }
    } else if tilt.rotate_y <= -TILT_SHADE_DEG {
        for y in area.y..area.y + area.height {
            if let Some(cell) = buf.cell_mut((area.x, y)) {
                cell.set_style(highlight);
            }
        }
    }
    if tilt.rotate_x >= TILT_SHADE_DEG {
        for x in area.x..area.x + area.width {
            if let Some(cell) = buf.cell_mut((x, area.y)) {
                cell.set_style(highlight);
            }
        }
    } else if tilt.rotate_x <= -TILT_SHADE_DEG {
        for x in area.x..area.x + area.width {
            if let Some(cell) = buf.cell_mut((x, area.y + area.height - 1)) {
                cell.set_style(highlight);
            }
        }
    }
}

/// One-cell horizontal content shift toward the cursor.
fn parallax_shift(tilt: Tilt) -> u16 {
    if tilt.rotate_y >= TILT_SHADE_DEG { 1 } else { 0 }
}

impl CredentialCard<'_> {
    fn render_front(&self, inner: Rect, buf: &mut Buffer) {
        let x = inner.x + parallax_shift(self.state.tilt);
        let width = inner.width.saturating_sub(parallax_shift(self.state.tilt));
        let mut y = inner.y;

        buf.set_string(
            x,
            y,
            "VERIFIED CREDENTIAL",
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::BOLD),
        );
        self.render_status_badge(inner, buf);
        y += 1;
        buf.set_string(x, y, format!("#{}", self.credential.token_id), Style::default().fg(Color::DarkGray));
        y += 2;

        buf.set_string(
            x,
            y,
            truncate_with_ellipsis(&self.credential.degree, width as usize),
            Style::default().fg(self.text_color()).add_modifier(Modifier::BOLD),
        );
        y += 1;
        buf.set_string(
            x,
            y,
            truncate_with_ellipsis(&self.credential.institution, width as usize),
            Style::default().fg(self.text_color()),
        );
        y += 2;

        if y < inner.y + inner.height {
            buf.set_string(
                x,
                y,
                format!("Issued: {}", self.credential.issue_date_display()),
                Style::default().fg(Color::DarkGray),
            );
        }

        let banner_y = inner.y + inner.height.saturating_sub(2);
        if banner_y > y {
            let banner = "BLOCKCHAIN VERIFIED";
            let bx = inner.x + (inner.width.saturating_sub(banner.len() as u16)) / 2;
            buf.set_string(bx, banner_y, banner, Style::default().fg(self.accent_color()));
        }
    }

    fn render_status_badge(&self, inner: Rect, buf: &mut Buffer) {
        let (text, style) = if self.credential.revoked {
            (
                " REVOKED ",
                Style::default().fg(Color::White).bg(Color::Red).add_modifier(Modifier::BOLD),
            )
        } else {
            ("ACTIVE", Style::default().fg(self.accent_color()))
        };
        let x = inner.x + inner.width.saturating_sub(text.len() as u16);
        buf.set_string(x, inner.y, text, style);
    }

    fn render_back(&self, inner: Rect, buf: &mut Buffer) {
        let x = inner.x + parallax_shift(self.state.tilt);
        let mut y = inner.y;

        buf.set_string(
            x,
            y,
            "Credential Details",
            Style::default().fg(self.accent_color()).add_modifier(Modifier::BOLD),
        );
        y += 2;

        let value_style = Style::default().fg(self.text_color());
        render_field(buf, x, &mut y, inner.width, "Token", &[
            Span::styled(format!("#{}", self.credential.token_id), value_style),
        ]);
        render_field(buf, x, &mut y, inner.width, "IPFS", &[
            Span::styled(self.credential.short_hash(), value_style),
        ]);
        render_field(buf, x, &mut y, inner.width, "Student", &[
            Span::styled(self.credential.short_address(), value_style),
        ]);

        let (status, color) = if self.credential.revoked {
            ("Revoked", Color::Red)
        } else {
            ("Active & Verified", self.accent_color())
        };
        render_field(buf, x, &mut y, inner.width, "Status", &[
            Span::styled(status, Style::default().fg(color)),
        ]);

        let actions_y = inner.y + inner.height.saturating_sub(1);
        if actions_y > y {
            let hint = Line::from(vec![
                Span::styled("[o]", Style::default().fg(self.accent_color())),
                Span::styled(" document  ", Style::default().fg(Color::Gray)),
                Span::styled("[s]", Style::default().fg(self.accent_color())),
                Span::styled(" share  ", Style::default().fg(Color::Gray)),
                Span::styled("[y]", Style::default().fg(self.accent_color())),
                Span::styled(" history", Style::default().fg(Color::Gray)),
            ]);
            buf.set_line(x, actions_y, &hint, inner.width);
        }
    }
}

impl Widget for CredentialCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 10 || area.height < 5 {
            return;
        }

        let title = if self.state.flipped { " details " } else { "" };
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.border_color()))
            .style(Style::default().bg(Color::Black));
        let inner = block.inner(area);
        block.render(area, buf);

        if self.state.flipped {
            self.render_back(inner, buf);
        } else {
            self.render_front(inner, buf);
        }

        if !self.stacked {
            shade_tilt_edges(buf, area, self.state.tilt);
            if self.selected && !self.state.flipped {
                render_footer(buf, area, " enter flip ");
            }
        }
    }
}
