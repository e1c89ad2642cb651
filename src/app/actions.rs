//! Action Execution
//!
//! Applies `Action`s produced by the normal-mode keymap. Card actions
//! (document, share, history) resolve through the catalog record for the
//! active card; a credential without a record has them disabled, so they
//! fall through without comment.

use crate::app::App;
use crate::catalog::CatalogRecord;
use crate::input::Action;
use crate::ui::components::{HistoryView, MessageType};

pub fn execute(app: &mut App, action: Action) {
    match action {
        Action::Quit => app.should_quit = true,
        Action::GridView => app.showcase.to_grid(),
        Action::StackView => app.showcase.to_stack(),
        Action::Back => app.showcase.back_to_stack(),
        Action::SelectPrev => app.showcase.select_prev(),
        Action::SelectNext => app.showcase.select_next(),
        Action::ZoomIn => app.showcase.zoom_in(),
        Action::ZoomOut => app.showcase.zoom_out(),
        Action::Rotate => app.showcase.rotate(),
        Action::Activate => {
            if let Some(index) = app.showcase.active_index() {
                app.showcase.activate(index);
            }
        }
        Action::ViewDocument => view_document(app),
        Action::Share => share(app),
        Action::ViewHistory => view_history(app),
        Action::ToggleChat => app.toggle_chat(),
        Action::ShowHelp => app.open_help(),
        _ => {}
    }
}

fn active_record(app: &App) -> Option<&CatalogRecord> {
    let index = app.showcase.active_index()?;
    let credential = app.catalog.credentials.get(index)?;
    app.catalog.record_for(credential.token_id)
}

fn view_document(app: &mut App) {
    let Some(url) = active_record(app).map(|r| r.document_url.clone()) else {
        return;
    };
    copy_to_clipboard(app, &url, "Document link copied");
}

fn share(app: &mut App) {
    let Some((id, url)) = active_record(app).map(|r| (r.id.clone(), r.share_url.clone())) else {
        return;
    };
    copy_to_clipboard(app, &url, &format!("Share link copied ({})", id));
}

fn view_history(app: &mut App) {
    let Some(index) = app.showcase.active_index() else {
        return;
    };
    let Some(credential) = app.catalog.credentials.get(index) else {
        return;
    };
    let Some(record) = app.catalog.record_for(credential.token_id) else {
        return;
    };
    let title = format!("#{} {}", credential.token_id, credential.degree);
    app.history_view = Some(HistoryView::new(title, record.history.clone()));
    app.mode_state.to_history();
}

fn copy_to_clipboard(app: &mut App, text: &str, success: &str) {
    match arboard::Clipboard::new().and_then(|mut cb| cb.set_text(text.to_string())) {
        Ok(()) => app.set_message(success, MessageType::Success),
        Err(e) => app.set_message(&format!("Clipboard error: {}", e), MessageType::Error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::sample_app;
    use crate::showcase::ViewMode;

    #[test]
    fn test_view_modes_switch() {
        let mut app = sample_app();
        execute(&mut app, Action::StackView);
        assert_eq!(app.showcase.mode(), ViewMode::Stack);
        execute(&mut app, Action::GridView);
        assert_eq!(app.showcase.mode(), ViewMode::Grid);
    }

    #[test]
    fn test_history_opens_for_recorded_credential() {
        let mut app = sample_app();
        execute(&mut app, Action::ViewHistory);
        assert!(app.history_view.is_some());
    }

    #[test]
    fn test_history_silent_without_record() {
        let mut app = sample_app();
        execute(&mut app, Action::SelectNext); // credential 2 has no record
        execute(&mut app, Action::ViewHistory);
        assert!(app.history_view.is_none());
        assert!(app.message.is_none());
    }

    #[test]
    fn test_quit() {
        let mut app = sample_app();
        execute(&mut app, Action::Quit);
        assert!(app.should_quit);
    }
}
