mod app;
mod commands;
mod render;
#[cfg(feature = "tui")]
mod tui;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "khmer-drill", about = "Khmer sentence reading drill", version)]
struct Cli {
    /// Sentence file to drill (JSON array or one sentence per line)
    #[arg(long, global = true)]
    corpus: Option<PathBuf>,

    /// Config file (default: <config dir>/khmer-drill/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Fixed seed for a reproducible order
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Never open a new cycle with the sentence that closed the previous one
    #[arg(long, global = true)]
    avoid_repeat: bool,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Draw the next sentences
    Next {
        /// Number of sentences to draw
        #[arg(long, short = 'n', default_value = "1")]
        count: usize,
    },

    /// List every sentence in the corpus
    List,

    /// Show one sentence by index
    Show {
        /// Zero-based sentence index
        index: usize,
    },

    /// Write the active corpus as a JSON array
    Export {
        /// Destination file
        path: PathBuf,
    },

    /// Launch interactive TUI
    #[cfg(feature = "tui")]
    Tui,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let use_color = !cli.no_color && atty_check();

    let overrides = app::Overrides {
        config_path: cli.config,
        corpus_path: cli.corpus,
        seed: cli.seed,
        avoid_repeat: cli.avoid_repeat,
    };
    let mut app = app::App::new(overrides)?;

    match cli.command {
        None => {
            // No subcommand → launch TUI
            #[cfg(feature = "tui")]
            {
                tui::run(app)?;
            }
            #[cfg(not(feature = "tui"))]
            {
                let _ = app;
                eprintln!("TUI not available (built without 'tui' feature). Use a subcommand.");
                eprintln!("Run with --help for usage.");
                std::process::exit(1);
            }
        }
        Some(Command::Next { count }) => {
            commands::next::run(&mut app, count, &cli.format, use_color)?;
        }
        Some(Command::List) => {
            commands::list::run(&app, &cli.format, use_color)?;
        }
        Some(Command::Show { index }) => {
            commands::show::run(&app, index, &cli.format, use_color)?;
        }
        Some(Command::Export { path }) => {
            commands::export::run(&app, &path)?;
        }
        #[cfg(feature = "tui")]
        Some(Command::Tui) => {
            tui::run(app)?;
        }
    }

    Ok(())
}

/// Check if stdout is a terminal (for color support)
fn atty_check() -> bool {
    unsafe { libc_isatty(1) != 0 }
}

extern "C" {
    #[link_name = "isatty"]
    fn libc_isatty(fd: i32) -> i32;
}
