use anyhow::Result;

use crate::app::App;
use crate::render::terminal::{self, Color};
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let corpus = app.corpus();

    match format {
        OutputFormat::Json => {
            let output: Vec<_> = (0..corpus.len())
                .map(|index| -> Result<serde_json::Value> {
                    Ok(serde_json::json!({
                        "index": index,
                        "text": app.sentence_at(index)?,
                    }))
                })
                .collect::<Result<_>>()?;
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            let width = corpus.len().to_string().len();
            for index in 0..corpus.len() {
                let label = format!("{:>width$}", index, width = width);
                println!(
                    "{}  {}",
                    terminal::paint(&label, Color::GRAY, use_color),
                    app.sentence_at(index)?
                );
            }
            println!();
            println!("{} sentences", corpus.len());
        }
    }

    Ok(())
}
