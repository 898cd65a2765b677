// Main entry point - Dependency injection and terminal session
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;

use futures::StreamExt;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinSet;
use tokio_stream::wrappers::LinesStream;
use tracing_subscriber::EnvFilter;

use crate::application::panel_session::PanelSession;
use crate::infrastructure::config::load_panel_config;
use crate::infrastructure::http_client::HttpPredictionClient;
use crate::presentation::handlers::{
    CommandError, HELP, finish_in_flight, handle_command, parse_command,
};
use crate::presentation::terminal::render_panel;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let panel_config = load_panel_config()?;

    // Initialize tracing; RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&panel_config.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Create client (infrastructure layer)
    let client = Arc::new(HttpPredictionClient::new(&panel_config.service)?);
    tracing::info!("Using prediction service at {}", panel_config.service.base_url);

    // Create session (application layer)
    let (session, mut notices) = PanelSession::new(client);

    tokio::spawn(async move {
        while let Some(notice) = notices.recv().await {
            eprintln!("⚠️  {}", notice.message);
            tracing::debug!(raised_at = %notice.raised_at, "{}", notice.detail);
        }
    });

    session.initialize().await;
    print!("{}", render_panel(&session.snapshot()));
    print!("{}", HELP);

    // Read commands (presentation layer)
    let mut tasks = JoinSet::new();
    let mut lines = LinesStream::new(BufReader::new(tokio::io::stdin()).lines());
    while let Some(line) = lines.next().await {
        let line = match line {
            Ok(line) => line,
            Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
                tracing::warn!("Skipping unreadable input line: {}", e);
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        match parse_command(&line) {
            Ok(command) => match handle_command(&session, &mut tasks, command) {
                Some(output) => println!("{}", output.trim_end()),
                None => break,
            },
            Err(CommandError::Empty) => continue,
            Err(e) => eprintln!("{}", e),
        }
    }

    finish_in_flight(&session, &mut tasks).await;
    Ok(())
}
