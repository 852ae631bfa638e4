use khmer_drill_lib::sentences::SentenceView;

/// ANSI color codes
pub struct Color;

impl Color {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";
}

/// Wrap `text` in an ANSI style when colors are enabled
pub fn paint(text: &str, style: &str, use_color: bool) -> String {
    if use_color {
        format!("{}{}{}", style, text, Color::RESET)
    } else {
        text.to_string()
    }
}

/// `[shown/total] sentence`
pub fn sentence_line(view: &SentenceView, use_color: bool) -> String {
    let progress = format!("[{}/{}]", view.shown_this_cycle, view.corpus_len);
    format!(
        "{} {}",
        paint(&progress, Color::CYAN, use_color),
        paint(&view.text, Color::BOLD, use_color)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> SentenceView {
        SentenceView {
            index: 4,
            text: "សួស្តី".to_string(),
            shown_this_cycle: 2,
            corpus_len: 5,
        }
    }

    #[test]
    fn test_sentence_line_plain() {
        assert_eq!(sentence_line(&view(), false), "[2/5] សួស្តី");
    }

    #[test]
    fn test_sentence_line_colored() {
        let line = sentence_line(&view(), true);
        assert!(line.starts_with(Color::CYAN));
        assert!(line.ends_with(Color::RESET));
        assert!(line.contains("សួស្តី"));
    }
}
