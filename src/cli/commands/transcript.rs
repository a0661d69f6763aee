//! Transcript command implementation.

use crate::config::Settings;
use crate::youtube::{extract_video_id, fetch_transcript, YtTranscriptSource};
use anyhow::Result;

/// Run the transcript command. No API key is needed.
pub async fn run_transcript(url: &str, settings: Settings) -> Result<()> {
    let source = YtTranscriptSource::new(&settings.transcript)?;
    let transcript = fetch_transcript(&source, &extract_video_id(url)).await?;
    println!("{}", transcript);
    Ok(())
}
