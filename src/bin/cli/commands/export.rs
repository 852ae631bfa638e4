use std::path::Path;

use anyhow::{Context, Result};

use khmer_drill_lib::sentences::CorpusStorage;

use crate::app::App;

pub fn run(app: &App, path: &Path) -> Result<()> {
    let written = CorpusStorage::save_json(path, app.corpus())
        .with_context(|| format!("Failed to export corpus to {}", path.display()))?;
    println!("Exported {} sentences to {}", app.corpus().len(), written.display());
    Ok(())
}
