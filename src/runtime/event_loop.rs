use std::path::Path;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::{App, View};
use crate::config;
use crate::runtime::startup;
use crate::ui;

/// State tracked by the runtime event loop across iterations.
struct EventLoopState {
    /// Internal two-key prefix state used for `gg` handling.
    pending_gg: bool,
}

impl EventLoopState {
    fn new() -> Self {
        Self { pending_gg: false }
    }
}

/// Main terminal event loop: draws the UI and dispatches key input to the
/// active view. Returns `Ok(())` when shutdown is requested.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    source_path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut state = EventLoopState::new();

    loop {
        terminal.draw(|f| ui::draw(f, app, &settings.ui))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, app, source_path, &mut state) {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Dispatch one key press to the view that owns the keyboard. Returns
/// `true` when the app should quit.
fn handle_key_event(
    key: KeyEvent,
    app: &mut App,
    source_path: &Path,
    state: &mut EventLoopState,
) -> bool {
    match app.view() {
        View::Browse => handle_browse_key(key, app, source_path, state),
        View::Form => {
            handle_form_key(key, app);
            false
        }
        View::Search => {
            handle_search_key(key, app);
            false
        }
        View::Detail(_) => handle_detail_key(key, app),
    }
}

fn handle_browse_key(
    key: KeyEvent,
    app: &mut App,
    source_path: &Path,
    state: &mut EventLoopState,
) -> bool {
    match key.code {
        KeyCode::Char('q') => {
            state.pending_gg = false;
            return true;
        }
        KeyCode::Char('a') => {
            state.pending_gg = false;
            app.open_form();
        }
        KeyCode::Char('/') => {
            state.pending_gg = false;
            app.open_search();
        }
        KeyCode::Char('s') => {
            state.pending_gg = false;
            app.toggle_sort();
        }
        KeyCode::Char('r') => {
            state.pending_gg = false;
            startup::merge_source(app, source_path);
        }
        KeyCode::Char('g') => {
            if state.pending_gg {
                state.pending_gg = false;
                app.select_first();
            } else {
                state.pending_gg = true;
            }
        }
        KeyCode::Char('G') => {
            state.pending_gg = false;
            app.select_last();
        }
        KeyCode::Char('j') | KeyCode::Down => {
            state.pending_gg = false;
            app.select_next();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            state.pending_gg = false;
            app.select_prev();
        }
        KeyCode::Enter => {
            state.pending_gg = false;
            app.open_detail_selected();
        }
        KeyCode::Char(_) => {
            // g pending should clear on any other printable char
            state.pending_gg = false;
        }
        _ => {}
    }

    false
}

fn handle_form_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Esc => app.cancel_form(),
        KeyCode::Enter => app.form_submit(),
        KeyCode::Backspace => app.form_backspace(),
        KeyCode::Char(c) => {
            if !c.is_control() {
                app.form_input(c);
            }
        }
        _ => {}
    }
}

fn handle_search_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Esc => app.cancel_search(),
        KeyCode::Enter => app.search_submit(),
        KeyCode::Backspace => app.search_backspace(),
        KeyCode::Char(c) => {
            if !c.is_control() {
                app.search_input(c);
            }
        }
        _ => {}
    }
}

fn handle_detail_key(key: KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => app.close_detail(),
        KeyCode::Char('q') => return true,
        _ => {}
    }

    false
}
