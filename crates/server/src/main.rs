//! Process entry point: parse configuration, wire the collaborators,
//! serve the films API until the process is stopped.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use catalog::JsonFileStore;
use clap::Parser;
use kinopoisk::KinopoiskClient;
use server::AppState;
use tracing::info;

/// Ranked movie list service
#[derive(Parser)]
#[command(name = "top250-server")]
#[command(about = "REST API for a ranked movie list backed by a flat file", long_about = None)]
struct Cli {
    /// Port to listen on
    #[arg(long, default_value_t = 3000)]
    port: u16,

    /// Path to the persisted movie document
    #[arg(long, default_value = "top250.json")]
    data_file: PathBuf,

    /// Base URL of the movie-data provider
    #[arg(long, default_value = "https://api.kinopoisk.dev")]
    kinopoisk_url: String,

    /// Provider access key; only the refresh endpoint needs it
    #[arg(long, env = "KINOPOISK_API_KEY", default_value = "", hide_env_values = true)]
    api_key: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let store = Arc::new(JsonFileStore::new(&cli.data_file));
    let provider = KinopoiskClient::new(cli.kinopoisk_url, cli.api_key);
    let state = AppState::new(store, provider);

    let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind port {}", cli.port))?;

    info!(
        "Listening on {addr}, movie document at {}",
        cli.data_file.display()
    );
    axum::serve(listener, server::router(state))
        .await
        .context("Server terminated")?;

    Ok(())
}
