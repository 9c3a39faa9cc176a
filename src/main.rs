//! string-lab server.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ───────────────▶ http::server ──▶ http::api ──▶ text::generator
//!                      (middleware)       │      └──▶ text::converter
//!                                         │                 │
//!                                         │           text::estimator
//!     Client Response                     ▼
//!     ◀─────────────── http::error ◀── JSON result
//!
//!     Cross-cutting: config, observability, lifecycle
//! ```

use std::path::PathBuf;

use clap::Parser;

use string_lab::config::resolve_config;
use string_lab::lifecycle::{startup, Shutdown};
use string_lab::observability::logging;

#[derive(Parser)]
#[command(name = "string-lab")]
#[command(about = "Random string generation and case conversion API", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Interface to bind (overrides config and HOST).
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides config and PORT).
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = resolve_config(cli.config.as_deref())?;
    if let Some(host) = cli.host {
        config.listener.host = host;
    }
    if let Some(port) = cli.port {
        config.listener.port = port;
    }
    string_lab::config::validation::validate_config(&config)
        .map_err(string_lab::config::ConfigError::Validation)?;

    logging::init_logging(&config.observability)?;

    tracing::info!("string-lab v{} starting", env!("CARGO_PKG_VERSION"));

    let shutdown = Shutdown::new();
    startup::run(config, &shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
