//! Gemini `generateContent` client.

use super::TextGenerator;
use crate::config::GeminiSettings;
use crate::error::{Result, YtgistError};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Request timeout for generation calls.
const REQUEST_TIMEOUT_SECS: u64 = 120;

pub struct GeminiClient {
    http: Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl GeminiClient {
    pub fn new(api_key: &str, settings: &GeminiSettings) -> Result<Self> {
        let api_key = api_key.trim().to_string();
        if api_key.is_empty() {
            return Err(YtgistError::Config("Gemini API key is missing".to_string()));
        }

        let model = settings.model.trim();
        if model.is_empty() {
            return Err(YtgistError::Config("gemini.model must not be empty".to_string()));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            http,
            api_key,
            model: model.to_string(),
            endpoint: settings.endpoint.trim().trim_end_matches('/').to_string(),
        })
    }

    /// Model this client generates with.
    pub fn model(&self) -> &str {
        &self.model
    }

    fn request_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.endpoint, self.model, self.api_key
        )
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        debug!("Requesting generation from {} ({} prompt chars)", self.model, prompt.len());

        let response = self
            .http
            .post(self.request_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| YtgistError::Generation(format!("request failed: {}", e.without_url())))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(YtgistError::Generation(format!(
                "Gemini returned {}: {}",
                status,
                detail.trim()
            )));
        }

        let payload: GenerateContentResponse = response.json().await.map_err(|e| {
            YtgistError::Generation(format!("failed to parse response: {}", e.without_url()))
        })?;

        response_text(&payload)
            .ok_or_else(|| YtgistError::Generation("response contained no text".to_string()))
    }
}

/// Concatenate the text parts of the first candidate.
fn response_text(payload: &GenerateContentResponse) -> Option<String> {
    let candidate = payload.candidates.first()?;
    let text: String = candidate
        .content
        .parts
        .iter()
        .filter_map(|p| p.text.as_deref())
        .collect();

    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: CandidateContent,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}
