//! CLI command implementations.

mod config;
mod serve;
mod summarize;
mod transcript;

pub use config::run_config;
pub use serve::run_serve;
pub use summarize::run_summarize;
pub use transcript::run_transcript;

use crate::cli::Output;
use crate::config::Settings;

/// Read the API key, pointing at where to get one when missing.
fn require_api_key() -> crate::error::Result<String> {
    Settings::api_key().inspect_err(|_| {
        Output::info("Get a key at https://aistudio.google.com/app/apikey");
    })
}
