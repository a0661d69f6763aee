//! Text generation backends.

mod gemini;

pub use gemini::GeminiClient;

use crate::error::Result;
use async_trait::async_trait;

/// Trait for single-shot text generation services.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Submit a prompt and return the complete response text.
    async fn generate(&self, prompt: &str) -> Result<String>;
}
