//! Startup orchestration.
//!
//! # Responsibilities
//! - Prepare the template directory
//! - Start the metrics exporter when enabled
//! - Bind the listener and begin accepting traffic
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Listener binds last (traffic only when ready)

use std::io;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::{AppConfig, ListenerConfig, StaticPageConfig};
use crate::http::HttpServer;
use crate::lifecycle::Shutdown;
use crate::observability::metrics;

/// Errors that abort startup.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Failed to create template directory {}: {source}", .path.display())]
    TemplateDir { path: PathBuf, source: io::Error },

    #[error("Failed to bind {address}: {source}")]
    Bind { address: String, source: io::Error },

    #[error("Invalid metrics address {0:?}")]
    MetricsAddress(String),

    #[error("Failed to start metrics exporter: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    #[error("Server error: {0}")]
    Serve(#[source] io::Error),
}

/// Create the template directory if it does not exist.
///
/// Returns `true` when the directory was created by this call.
pub fn ensure_template_dir(config: &StaticPageConfig) -> Result<bool, StartupError> {
    let path = Path::new(&config.template_dir);
    if path.is_dir() {
        return Ok(false);
    }

    std::fs::create_dir_all(path).map_err(|source| StartupError::TemplateDir {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "Created template directory");
    Ok(true)
}

/// Bind the configured listener.
pub async fn bind_listener(config: &ListenerConfig) -> Result<TcpListener, StartupError> {
    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|source| StartupError::Bind {
            address: address.clone(),
            source,
        })?;

    if let Ok(local_addr) = listener.local_addr() {
        tracing::info!(address = %local_addr, "Listening for connections");
    }
    Ok(listener)
}

/// Run the whole service until shutdown.
pub async fn run(config: AppConfig, shutdown: &Shutdown) -> Result<(), StartupError> {
    tracing::info!(
        bind_address = %config.listener.bind_address(),
        max_recursive_length = config.conversion.max_recursive_length,
        template_dir = %config.static_page.template_dir,
        "Configuration loaded"
    );

    ensure_template_dir(&config.static_page)?;

    if config.observability.metrics_enabled {
        let addr: SocketAddr = config
            .observability
            .metrics_address
            .parse()
            .map_err(|_| StartupError::MetricsAddress(config.observability.metrics_address.clone()))?;
        metrics::init_metrics(addr)?;
    }

    let listener = bind_listener(&config.listener).await?;
    let server = HttpServer::new(config);
    server
        .run(listener, shutdown.subscribe())
        .await
        .map_err(StartupError::Serve)
}
