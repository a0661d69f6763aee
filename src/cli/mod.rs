//! CLI module for ytgist.

pub mod commands;
mod output;

pub use output::Output;

use clap::{Parser, Subcommand};

/// ytgist - YouTube transcript summaries
///
/// Fetches a video's captions and turns them into a bullet-point summary with Gemini.
#[derive(Parser, Debug)]
#[command(name = "ytgist")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarize a video into bullet points
    Summarize {
        /// YouTube URL or video ID (prompted for when omitted)
        url: Option<String>,

        /// Print the model's response without bullet normalization
        #[arg(long)]
        raw: bool,
    },

    /// Print the joined transcript of a video
    Transcript {
        /// YouTube URL or video ID
        url: String,
    },

    /// Start the web interface and JSON API
    Serve {
        /// Host to bind to (defaults to server.host from config)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (defaults to server.port from config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,
}
