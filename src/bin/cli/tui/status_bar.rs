use std::time::Instant;

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use super::app_state::TuiState;

pub fn draw(f: &mut Frame, area: Rect, state: &TuiState) {
    // Show flash message if present
    if let Some(ref msg) = state.flash_message {
        let flash = Paragraph::new(format!(" {}", msg))
            .style(Style::default().bg(Color::Green).fg(Color::Black));
        f.render_widget(flash, area);
        return;
    }

    let mut status = format!(
        " Round: {}/{}  Read: {}",
        state.view.shown_this_cycle, state.view.corpus_len, state.sentences_read
    );

    if state.auto_advance.is_some() {
        match state.seconds_until_advance(Instant::now()) {
            Some(secs) => status.push_str(&format!("  Next in {}s", secs)),
            None => status.push_str("  Paused"),
        }
    }

    status.push_str("  |  Space: next  r: reset  ?: help  q: quit ");

    let bar = Paragraph::new(status).style(Style::default().bg(Color::DarkGray).fg(Color::White));
    f.render_widget(bar, area);
}
