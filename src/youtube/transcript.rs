//! Caption retrieval and transcript assembly.

use crate::config::TranscriptSettings;
use crate::error::{Result, YtgistError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use yt_transcript_rs::api::YouTubeTranscriptApi;

/// A single caption entry as returned by the caption service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptionSegment {
    /// Caption text.
    pub text: String,
    /// Start time in seconds.
    #[serde(default)]
    pub start: f64,
    /// Duration in seconds.
    #[serde(default)]
    pub duration: f64,
}

/// Trait for caption providers.
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    /// Fetch the ordered caption segments for a video.
    async fn fetch_segments(&self, video_id: &str) -> Result<Vec<CaptionSegment>>;
}

/// Join caption texts with single spaces, preserving order. Timing is discarded.
pub fn join_segments(segments: &[CaptionSegment]) -> String {
    segments
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Fetch a video's captions and join them into one transcript string.
///
/// Every failure from the source is reported as [`YtgistError::Transcript`].
pub async fn fetch_transcript(source: &dyn TranscriptSource, video_id: &str) -> Result<String> {
    let segments = source.fetch_segments(video_id).await.map_err(|e| match e {
        YtgistError::Transcript(_) => e,
        other => YtgistError::Transcript(other.to_string()),
    })?;

    if segments.is_empty() {
        return Err(YtgistError::Transcript(format!(
            "No captions returned for video {}",
            video_id
        )));
    }

    debug!("Joining {} caption segments", segments.len());
    Ok(join_segments(&segments))
}

/// Caption source backed by YouTube's public timed-text endpoints.
pub struct YtTranscriptSource {
    api: YouTubeTranscriptApi,
    languages: Vec<String>,
    preserve_formatting: bool,
}

impl YtTranscriptSource {
    pub fn new(settings: &TranscriptSettings) -> Result<Self> {
        let api = YouTubeTranscriptApi::new(None, None, None).map_err(|e| {
            YtgistError::Config(format!("Failed to initialize caption client: {}", e))
        })?;

        Ok(Self {
            api,
            languages: settings.languages.clone(),
            preserve_formatting: settings.preserve_formatting,
        })
    }
}

#[async_trait]
impl TranscriptSource for YtTranscriptSource {
    async fn fetch_segments(&self, video_id: &str) -> Result<Vec<CaptionSegment>> {
        let languages: Vec<&str> = self.languages.iter().map(String::as_str).collect();
        info!("Fetching captions for {} ({})", video_id, self.languages.join(", "));

        let fetched = self
            .api
            .fetch_transcript(video_id, &languages, self.preserve_formatting)
            .await
            .map_err(|e| YtgistError::Transcript(e.to_string()))?;

        Ok(fetched
            .snippets
            .into_iter()
            .map(|s| CaptionSegment {
                text: s.text,
                start: s.start,
                duration: s.duration,
            })
            .collect())
    }
}
