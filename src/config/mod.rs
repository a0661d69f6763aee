//! Configuration module for ytgist.
//!
//! Handles loading application settings, the API key, and prompt templates.

mod prompts;
mod settings;

pub use prompts::{Prompts, SummaryPrompts};
pub use settings::{
    GeminiSettings, PromptSettings, ServerSettings, Settings, TranscriptSettings, API_KEY_ENV,
};
