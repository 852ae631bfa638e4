use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::app_state::TuiState;

pub fn draw(f: &mut Frame, area: Rect, state: &TuiState) {
    let title = format!(
        " Sentence {} of {} ",
        state.view.index + 1,
        state.view.corpus_len
    );

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner_height = area.height.saturating_sub(2) as usize;
    // Roughly center the sentence vertically
    let padding = inner_height.saturating_sub(1) / 2;

    let mut lines: Vec<Line> = std::iter::repeat(Line::from("")).take(padding).collect();
    lines.push(Line::from(Span::styled(
        state.view.text.clone(),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )));

    if state.view.shown_this_cycle == 0 {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Press Space for a random sentence.",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}
