use anyhow::Result;

use khmer_drill_lib::sentences::SentenceView;

use crate::app::App;
use crate::render::terminal::{self, Color};
use crate::OutputFormat;

pub fn run(app: &mut App, count: usize, format: &OutputFormat, use_color: bool) -> Result<()> {
    let views: Vec<_> = (0..count).map(|_| app.next_sentence()).collect();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&views)?);
        }
        OutputFormat::Plain => {
            for (i, view) in views.iter().enumerate() {
                println!("{}", terminal::sentence_line(view, use_color));

                // Only announce a reshuffle that the following draw shows
                if reshuffles_before(&views, i) {
                    let notice = format!("-- all {} sentences shown, reshuffling --", view.corpus_len);
                    println!("{}", terminal::paint(&notice, Color::DIM, use_color));
                }
            }
        }
    }

    Ok(())
}

/// True when the view after `i` opens a new cycle
fn reshuffles_before(views: &[SentenceView], i: usize) -> bool {
    i + 1 < views.len() && views[i].cycle_complete()
}
