//! Event Dispatch
//!
//! Routes terminal events through the active input mode. Mouse position
//! is resolved against the card rects recorded by the last render, so
//! hover tilt and clicks land on what the user actually sees.

use crossterm::event::{
    Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};

use crate::app::{actions, App};
use crate::input::{keymap, Action, InputMode};
use crate::showcase::tilt::{normalized_offset, tilt_for};
use crate::ui::components::{card_at, HelpScreen};

pub fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(app, key),
        Event::Mouse(mouse) => handle_mouse(app, mouse),
        _ => {}
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    match app.mode_state.mode {
        InputMode::Normal => actions::execute(app, keymap::normal_mode_action(key)),
        InputMode::Chat => handle_chat_key(app, key),
        InputMode::Help => handle_help_key(app, key),
        InputMode::History => handle_history_key(app, key),
    }
}

fn handle_chat_key(app: &mut App, key: KeyEvent) {
    match keymap::chat_mode_action(key) {
        Action::Submit => {
            let text = app.mode_state.take_buffer();
            let delay = app.config.typed_reply_delay();
            if app.chat.submit(&text, delay) {
                app.chat.scroll.follow_bottom();
            } else {
                // Rejected (blank, or a reply is still pending): keep the draft.
                app.mode_state.buffer.set_content(&text);
            }
        }
        Action::Cancel => {
            app.chat.close();
            app.mode_state.to_normal();
        }
        Action::ScrollUp => app.chat.scroll.scroll_up(3, app.chat_scroll_max),
        Action::ScrollDown => app.chat.scroll.scroll_down(3, app.chat_scroll_max),
        Action::Quit => app.should_quit = true,
        Action::InsertChar(c) => {
            if let Some(slot) = quick_question_slot(app, c) {
                if app.chat.submit_quick(slot, app.config.quick_reply_delay) {
                    app.chat.scroll.follow_bottom();
                    return;
                }
            }
            app.mode_state.handle_text_key(key.code, key.modifiers);
        }
        _ => {
            app.mode_state.handle_text_key(key.code, key.modifiers);
        }
    }
}

/// Digits select a quick question, but only while the list is on screen
/// and nothing has been typed yet.
fn quick_question_slot(app: &App, c: char) -> Option<usize> {
    if !app.mode_state.buffer.is_empty() || !app.chat.show_quick_questions() {
        return None;
    }
    match c.to_digit(10) {
        Some(d @ 1..=7) => Some(d as usize - 1),
        _ => None,
    }
}

fn handle_help_key(app: &mut App, key: KeyEvent) {
    let max = HelpScreen::line_count();
    match keymap::popup_action(key) {
        Action::Cancel => app.close_help(),
        Action::ScrollUp => app.help_state.scroll.scroll_up(1, max),
        Action::ScrollDown => app.help_state.scroll.scroll_down(1, max),
        _ => {}
    }
}

fn handle_history_key(app: &mut App, key: KeyEvent) {
    let max = app
        .history_view
        .as_ref()
        .map(|v| v.events.len())
        .unwrap_or(0);
    match keymap::popup_action(key) {
        Action::Cancel => app.close_history(),
        Action::ScrollUp => {
            if let Some(view) = &mut app.history_view {
                view.scroll.scroll_up(1, max);
            }
        }
        Action::ScrollDown => {
            if let Some(view) = &mut app.history_view {
                view.scroll.scroll_down(1, max);
            }
        }
        _ => {}
    }
}

fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    // Overlays swallow the pointer.
    if app.history_view.is_some() || app.help_open {
        return;
    }
    let over_chat = app.chat.is_open() && app.chat_area.contains((mouse.column, mouse.row).into());

    match mouse.kind {
        MouseEventKind::Moved => {
            if over_chat {
                app.showcase.hover(None);
                return;
            }
            let hover = card_at(&app.card_areas, mouse.column, mouse.row).map(|i| {
                let rect = app.card_areas[i];
                let (ox, oy) = normalized_offset(
                    (mouse.column - rect.x) as f32,
                    (mouse.row - rect.y) as f32,
                    rect.width as f32,
                    rect.height as f32,
                );
                (i, tilt_for(ox, oy))
            });
            app.showcase.hover(hover);
        }
        MouseEventKind::Down(MouseButton::Left) => {
            if over_chat {
                app.mode_state.to_chat();
                return;
            }
            if let Some(i) = card_at(&app.card_areas, mouse.column, mouse.row) {
                app.showcase.activate(i);
            }
        }
        _ => {}
    }
}
