//! Summarize command implementation.

use super::require_api_key;
use crate::cli::Output;
use crate::config::Settings;
use crate::error::YtgistError;
use crate::pipeline::Summarizer;
use anyhow::Result;
use std::io::{self, BufRead, Write};

/// Run the summarize command.
pub async fn run_summarize(url: Option<String>, raw: bool, settings: Settings) -> Result<()> {
    let api_key = require_api_key()?;
    let summarizer = Summarizer::from_settings(&settings, &api_key)?;

    let url = match url {
        Some(url) => url,
        None => prompt_for_url()?,
    };

    let transcript = summarizer.transcript(&url).await?;

    println!("\nGenerating summary...\n");
    let spinner = Output::spinner("Waiting for Gemini...");
    let result = if raw {
        summarizer.generate_raw(&transcript).await
    } else {
        summarizer.summarize_transcript(&transcript).await
    };
    spinner.finish_and_clear();

    println!("{}", result?);
    Ok(())
}

/// Ask for a URL on stdin.
fn prompt_for_url() -> crate::error::Result<String> {
    print!("Enter YouTube video URL: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;

    let url = input.trim();
    if url.is_empty() {
        return Err(YtgistError::InvalidInput("no video URL given".to_string()));
    }
    Ok(url.to_string())
}
