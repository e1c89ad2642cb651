mod app;
mod catalog;
mod chat;
mod input;
mod showcase;
mod ui;

use std::io::{stdout, Stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::app::{App, AppConfig};
use crate::catalog::{Catalog, CatalogError};
use crate::ui::components::MessageType;

const TICK_RATE: Duration = Duration::from_millis(50);

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut out = stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen, EnableMouseCapture) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }

        let backend = CrosstermBackend::new(out);
        let terminal = match Terminal::new(backend) {
            Ok(t) => t,
            Err(err) => {
                let _ = disable_raw_mode();
                let mut out = stdout();
                let _ = execute!(out, LeaveAlternateScreen, DisableMouseCapture);
                return Err(err.into());
            }
        };

        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}

fn main() -> Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => AppConfig::with_catalog_path(path.into()),
        None => AppConfig::default(),
    };

    // A missing catalog is a normal first run; anything else is fatal.
    let (catalog, load_warning) = match Catalog::load(&config.catalog_path) {
        Ok(catalog) => (catalog, None),
        Err(CatalogError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => (
            Catalog::default(),
            Some(format!("No catalog at {}", config.catalog_path.display())),
        ),
        Err(e) => {
            return Err(e).with_context(|| {
                format!("failed to load catalog {}", config.catalog_path.display())
            });
        }
    };

    let mut app = App::new(config, catalog);
    if let Some(warning) = load_warning {
        app.set_message(&warning, MessageType::Warning);
    }

    let mut session = TerminalSession::new()?;
    run_app(&mut session.terminal, &mut app)
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        app.tick();

        terminal.draw(|frame| ui::render(frame, app))?;

        if event::poll(TICK_RATE)? {
            app::input::handle_event(app, event::read()?);
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
