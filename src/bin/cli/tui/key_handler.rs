use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app_state::TuiState;

pub fn handle_key(state: &mut TuiState, key: KeyEvent, now: Instant) {
    // Clear flash message on any keypress
    state.flash_message = None;

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.quit = true;
        return;
    }

    if state.show_help {
        // Any key closes the help overlay
        state.show_help = false;
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => state.quit = true,
        KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Char('n') | KeyCode::Char('l')
        | KeyCode::Right => state.advance(now),
        KeyCode::Char('r') => state.reset_cycle(),
        KeyCode::Char('p') => state.toggle_pause(now),
        KeyCode::Char('?') => state.show_help = true,
        _ => {}
    }
}
