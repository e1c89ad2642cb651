//! Frame Composition
//!
//! Lays the screen out and paints every component from the current
//! application state. Card rects are written back to the app so mouse
//! hit-testing sees exactly what was drawn.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use crate::app::App;
use crate::showcase::ViewMode;
use crate::ui::components::{
    card_layouts, layout::render_empty_message, ChatWindow, ControlBar, CredentialCard,
    FocusFooter, HelpBar, HelpScreen, HistoryDialog, InfoPanel, StatusLine,
};

const CHAT_WIDTH: u16 = 48;
const CHAT_HEIGHT: u16 = 22;

pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // control bar
            Constraint::Min(0),    // showcase
            Constraint::Length(1), // info panel
            Constraint::Length(1), // key hints
            Constraint::Length(1), // status line
        ])
        .split(frame.area());

    frame.render_widget(ControlBar::new(&app.showcase), chunks[0]);
    render_showcase(frame, app, chunks[1]);
    frame.render_widget(InfoPanel::new(&app.catalog, app.showcase.mode()), chunks[2]);
    frame.render_widget(HelpBar::for_mode(app.mode_state.mode), chunks[3]);
    render_status(frame, app, chunks[4]);

    if app.chat.is_open() {
        render_chat(frame, app, chunks[1]);
    }
    if let Some(view) = &app.history_view {
        frame.render_widget(HistoryDialog::new(view), frame.area());
    }
    if app.help_open {
        frame.render_widget(HelpScreen::new(&app.help_state), frame.area());
    }
}

fn render_showcase(frame: &mut Frame, app: &mut App, area: Rect) {
    if app.catalog.is_empty() {
        render_empty_message(area, frame.buffer_mut(), "No credentials issued yet");
        app.card_areas.clear();
        return;
    }

    let count = app.catalog.len();
    let layouts = card_layouts(&app.showcase, count, area);

    // Stack renders deepest card first so the top of the pile wins.
    let order: Vec<usize> = match app.showcase.mode() {
        ViewMode::Stack => (0..count).rev().collect(),
        _ => (0..count).collect(),
    };

    for i in order {
        let rect = layouts[i];
        if rect.is_empty() {
            continue;
        }
        let Some(state) = app.showcase.card(i) else {
            continue;
        };
        let credential = &app.catalog.credentials[i];
        let mut card = CredentialCard::new(credential, state);
        if app.showcase.mode() == ViewMode::Stack {
            card = card.stacked(i);
        }
        card = card.selected(app.showcase.active_index() == Some(i));
        frame.render_widget(card, rect);
    }

    if let Some(focused) = app.showcase.focus_index() {
        let card_rect = layouts[focused];
        if !card_rect.is_empty() && card_rect.bottom() + 1 < area.bottom() {
            let footer = Rect::new(area.x, card_rect.bottom() + 1, area.width, 1);
            frame.render_widget(FocusFooter::new(focused, count), footer);
        }
    }

    app.card_areas = layouts;
}

fn render_chat(frame: &mut Frame, app: &mut App, area: Rect) {
    let width = CHAT_WIDTH.min(area.width.saturating_sub(2));
    let height = CHAT_HEIGHT.min(area.height);
    let rect = Rect::new(
        area.x + area.width.saturating_sub(width + 1),
        area.y + area.height.saturating_sub(height),
        width,
        height,
    );
    let window = ChatWindow::new(&app.chat, app.mode_state.get_buffer())
        .input_active(app.mode_state.mode.is_text_input())
        .scroll_max_out(&mut app.chat_scroll_max);
    frame.render_widget(window, rect);
    app.chat_area = rect;
}

fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let mut status = StatusLine::new(app.mode_state.mode)
        .view_label(app.showcase.mode().label())
        .zoom_percent(app.showcase.zoom_percent())
        .rotation(app.showcase.rotation_display());
    if !app.catalog.is_empty() {
        status = status.card_count(app.showcase.selected(), app.catalog.len());
    }
    if let Some((text, msg_type, _)) = &app.message {
        status = status.message(text, *msg_type);
    }
    frame.render_widget(status, area);
}
