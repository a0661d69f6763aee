//! Summarization pipeline.
//!
//! URL -> video ID -> transcript -> prompt -> generation -> normalized bullets.
//! Collaborators are injected, so every request runs against the same read-only
//! clients and holds no state of its own.

use crate::config::{Prompts, Settings};
use crate::error::Result;
use crate::llm::{GeminiClient, TextGenerator};
use crate::summary::normalize_bullets;
use crate::youtube::{extract_video_id, fetch_transcript, TranscriptSource, YtTranscriptSource};
use std::sync::Arc;
use tracing::{info, instrument};

/// The summarization pipeline.
#[derive(Clone)]
pub struct Summarizer {
    transcripts: Arc<dyn TranscriptSource>,
    generator: Arc<dyn TextGenerator>,
    prompts: Prompts,
}

impl Summarizer {
    /// Build the production pipeline: YouTube captions and Gemini.
    pub fn from_settings(settings: &Settings, api_key: &str) -> Result<Self> {
        let prompts = Prompts::load(
            settings.prompts.custom_dir.as_deref(),
            Some(&settings.prompts.variables),
        )?;
        let transcripts = Arc::new(YtTranscriptSource::new(&settings.transcript)?);
        let generator = Arc::new(GeminiClient::new(api_key, &settings.gemini)?);
        info!("Using Gemini model {}", generator.model());

        Ok(Self::new(transcripts, generator, prompts))
    }

    pub fn new(
        transcripts: Arc<dyn TranscriptSource>,
        generator: Arc<dyn TextGenerator>,
        prompts: Prompts,
    ) -> Self {
        Self {
            transcripts,
            generator,
            prompts,
        }
    }

    /// Fetch the joined transcript for a URL or bare video ID.
    pub async fn transcript(&self, url: &str) -> Result<String> {
        let video_id = extract_video_id(url);
        info!("Fetching transcript for {}", video_id);
        fetch_transcript(self.transcripts.as_ref(), &video_id).await
    }

    /// Generate the model's unnormalized summary text for a transcript.
    pub async fn generate_raw(&self, transcript: &str) -> Result<String> {
        let prompt = self.prompts.summary_prompt(transcript);
        self.generator.generate(&prompt).await
    }

    /// Summarize a transcript into a normalized bullet list.
    pub async fn summarize_transcript(&self, transcript: &str) -> Result<String> {
        let raw = self.generate_raw(transcript).await?;
        Ok(normalize_bullets(&raw))
    }

    /// Run the full pipeline for a URL.
    ///
    /// A transcript failure short-circuits: the generator is never called.
    #[instrument(skip(self))]
    pub async fn summarize_url(&self, url: &str) -> Result<String> {
        let transcript = self.transcript(url).await?;
        info!("Summarizing transcript ({} chars)", transcript.len());
        self.summarize_transcript(&transcript).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::YtgistError;
    use crate::youtube::CaptionSegment;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSource {
        requested: Mutex<Vec<String>>,
        fail: bool,
    }

    #[async_trait]
    impl TranscriptSource for RecordingSource {
        async fn fetch_segments(&self, video_id: &str) -> Result<Vec<CaptionSegment>> {
            self.requested.lock().unwrap().push(video_id.to_string());
            if self.fail {
                return Err(YtgistError::Transcript(
                    "Could not retrieve a transcript for the video".to_string(),
                ));
            }
            Ok(["a", "b", "c"]
                .iter()
                .map(|t| CaptionSegment {
                    text: t.to_string(),
                    start: 0.0,
                    duration: 0.0,
                })
                .collect())
        }
    }

    struct CountingGenerator {
        calls: AtomicUsize,
        prompts: Mutex<Vec<String>>,
        reply: std::result::Result<String, String>,
    }

    impl CountingGenerator {
        fn replying(reply: &str) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                prompts: Mutex::new(Vec::new()),
                reply: Ok(reply.to_string()),
            }
        }

        fn failing(msg: &str) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                prompts: Mutex::new(Vec::new()),
                reply: Err(msg.to_string()),
            }
        }
    }

    #[async_trait]
    impl TextGenerator for CountingGenerator {
        async fn generate(&self, prompt: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.reply.clone().map_err(YtgistError::Generation)
        }
    }

    fn pipeline(
        source: Arc<RecordingSource>,
        generator: Arc<CountingGenerator>,
    ) -> Summarizer {
        Summarizer::new(source, generator, Prompts::default())
    }

    #[tokio::test]
    async fn test_summarize_url_end_to_end() {
        let source = Arc::new(RecordingSource::default());
        let generator = Arc::new(CountingGenerator::replying("• point\nother point"));

        let summary = pipeline(source.clone(), generator.clone())
            .summarize_url("https://youtu.be/abc123")
            .await
            .unwrap();

        assert_eq!(summary, "- point\n- other point");
        assert_eq!(*source.requested.lock().unwrap(), vec!["abc123"]);
        let prompts = generator.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("Transcript:\na b c"));
    }

    #[tokio::test]
    async fn test_transcript_failure_skips_generation() {
        let source = Arc::new(RecordingSource {
            fail: true,
            ..Default::default()
        });
        let generator = Arc::new(CountingGenerator::replying("- unused"));

        let err = pipeline(source, generator.clone())
            .summarize_url("https://www.youtube.com/watch?v=missing&t=10")
            .await
            .unwrap_err();

        assert!(err.is_transcript());
        assert!(err.to_string().starts_with("Error"));
        assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_generation_failure_propagates() {
        let source = Arc::new(RecordingSource::default());
        let generator = Arc::new(CountingGenerator::failing("quota exceeded"));

        let err = pipeline(source, generator.clone())
            .summarize_url("abc123")
            .await
            .unwrap_err();

        assert!(matches!(err, YtgistError::Generation(_)));
        assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_generate_raw_skips_normalization() {
        let source = Arc::new(RecordingSource::default());
        let generator = Arc::new(CountingGenerator::replying("* raw\n\n  • text"));

        let raw = pipeline(source, generator).generate_raw("a b c").await.unwrap();
        assert_eq!(raw, "* raw\n\n  • text");
    }
}
