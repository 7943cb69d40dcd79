use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use wordle_tui::logging;
use wordle_tui::tui;
use wordle_tui::words::{DictionaryApi, WordSource, DICTIONARY_URL, WORD_LIST_URL};

/// Play Wordle in the terminal
#[derive(Parser)]
#[command(name = "wordle-tui", version)]
struct Cli {
    /// Play against a fixed answer instead of fetching a random one
    #[arg(long)]
    answer: Option<String>,

    /// URL of the JSON word list the answer is picked from
    #[arg(long, default_value = WORD_LIST_URL)]
    word_list_url: String,

    /// Base URL of the dictionary used to validate guesses
    #[arg(long, default_value = DICTIONARY_URL)]
    dictionary_url: String,

    /// Append logs to this file (filtered via RUST_LOG)
    #[arg(long)]
    log: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Some(path) = &cli.log {
        logging::init(path)?;
    }

    let source = match &cli.answer {
        Some(word) => WordSource::fixed(word)?,
        None => WordSource::remote(cli.word_list_url),
    };
    let target = source
        .select_target()
        .await
        .context("Failed to fetch the word list")?;
    let dictionary = DictionaryApi::new(cli.dictionary_url);

    tui::initialize_panic_handler();
    let mut terminal = tui::init()?;
    let result = tui::App::init(target, source, dictionary)
        .run(&mut terminal)
        .await;
    tui::restore()?;
    Ok(result?)
}
