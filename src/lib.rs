//! ytgist - YouTube transcript summaries
//!
//! Fetches the captions of a YouTube video and turns them into a bullet-point
//! summary with Google's Gemini API, from the command line or a small web app.
//!
//! # Architecture
//!
//! - `youtube` - Video ID extraction and caption retrieval
//! - `llm` - Text generation backends (Gemini)
//! - `summary` - Bullet normalization of generated text
//! - `pipeline` - URL to summary, with injected collaborators
//! - `server` - Web page and JSON API
//! - `config` - Settings, API key, and prompt templates
//!
//! # Example
//!
//! ```rust,no_run
//! use ytgist::config::Settings;
//! use ytgist::pipeline::Summarizer;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let summarizer = Summarizer::from_settings(&settings, &Settings::api_key()?)?;
//!
//!     let summary = summarizer.summarize_url("https://youtu.be/dQw4w9WgXcQ").await?;
//!     println!("{}", summary);
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod llm;
pub mod pipeline;
pub mod server;
pub mod summary;
pub mod youtube;

pub use error::{Result, YtgistError};
