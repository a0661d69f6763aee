//! Serve command implementation.

use super::require_api_key;
use crate::cli::Output;
use crate::config::Settings;
use crate::pipeline::Summarizer;
use crate::server;

/// Run the HTTP server.
pub async fn run_serve(host: Option<String>, port: Option<u16>, settings: Settings) -> anyhow::Result<()> {
    let api_key = require_api_key()?;
    let summarizer = Summarizer::from_settings(&settings, &api_key)?;

    let host = host.unwrap_or_else(|| settings.server.host.clone());
    let port = port.unwrap_or(settings.server.port);
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    Output::header("ytgist");
    println!();
    Output::success(&format!("Listening on http://{}", addr));
    println!();
    println!("Endpoints:");
    Output::kv("Web page", "GET  /");
    Output::kv("Health", "GET  /health");
    Output::kv("Summarize", "POST /summarize");
    println!();
    Output::info("Press Ctrl+C to stop the server.");

    server::serve(listener, summarizer).await?;

    Ok(())
}
