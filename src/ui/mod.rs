pub mod layout;

use crate::app::AppState;
use crate::error::Result;
use crate::types::Orientation;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key press to its handler on the application state. Keys bound to
/// disabled controls fall through to the handlers, which ignore them.
pub fn handle_key_event(app: &mut AppState, key: KeyEvent) -> Result<()> {
    match key.code {
        // Quit
        KeyCode::Char('q') => {
            app.should_quit = true;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }

        // Countdown controls
        KeyCode::Enter => {
            app.start();
        }
        KeyCode::Char(' ') => {
            app.pause_or_resume();
        }
        KeyCode::Char('r') => {
            app.reset();
        }

        // Orientation toggle group
        KeyCode::Char('v') => {
            app.set_orientation(Orientation::Portrait);
        }
        KeyCode::Char('h') => {
            app.set_orientation(Orientation::Landscape);
        }

        // Fullscreen toggle
        KeyCode::Char('f') => {
            app.toggle_fullscreen();
        }

        // Duration input editing
        KeyCode::Tab => {
            app.focus_next();
        }
        KeyCode::BackTab => {
            app.focus_previous();
        }
        KeyCode::Char(c) if c.is_ascii_digit() => {
            app.push_digit(c);
        }
        KeyCode::Backspace => {
            app.pop_digit();
        }
        KeyCode::Delete | KeyCode::Esc => {
            app.clear_field();
        }

        _ => {}
    }
    Ok(())
}
