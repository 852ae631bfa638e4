use anyhow::Result;

use crate::app::App;
use crate::render::terminal::{self, Color};
use crate::OutputFormat;

pub fn run(app: &App, index: usize, format: &OutputFormat, use_color: bool) -> Result<()> {
    let text = app.sentence_at(index)?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "index": index,
                "text": text,
                "corpusLen": app.corpus().len(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("{}", terminal::paint(&text, Color::BOLD, use_color));
        }
    }

    Ok(())
}
