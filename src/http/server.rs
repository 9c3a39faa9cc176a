//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, limits, request ID, CORS, panic capture)
//! - Bind server to listener
//! - Stop on shutdown broadcast or OS signal

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    catch_panic::CatchPanicLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::http::static_page::{self, LandingPage};
use crate::http::{api, error, request};
use crate::lifecycle::signals::shutdown_signal;
use crate::text::{CaseConverter, StringGenerator};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub generator: StringGenerator,
    pub converter: CaseConverter,
    pub landing_page: Arc<LandingPage>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            generator: StringGenerator::new(config.generator.max_length),
            converter: CaseConverter::new(&config.conversion),
            landing_page: Arc::new(LandingPage::new(&config.static_page)),
            config: Arc::new(config),
        }
    }
}

/// HTTP server for the API and landing page.
pub struct HttpServer {
    router: Router,
    config: Arc<AppConfig>,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        let state = AppState::new(config);
        let config = state.config.clone();
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        let routes = Router::new()
            .route("/", get(static_page::index))
            .route("/api/generate", post(api::generate))
            .route("/api/analyze", post(api::analyze))
            .route("/api/test", get(api::test))
            .fallback(api::not_found)
            .with_state(state);

        Self::with_middleware(routes, config)
    }

    /// Wrap `routes` in the middleware stack, innermost first.
    #[allow(deprecated)]
    fn with_middleware(routes: Router, config: &AppConfig) -> Router {
        let router = routes
            // Enforced by the `Json` extractor, so oversized bodies surface as
            // `JsonRejection` and keep the error shape.
            .layer(DefaultBodyLimit::max(config.security.max_body_size))
            .layer(CatchPanicLayer::custom(error::panic_response))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(middleware::map_response(error::json_error_body))
            // Outside the panic and timeout layers so their statuses are counted.
            .layer(middleware::from_fn(request::track_metrics));

        let router = if config.security.cors_enabled {
            router.layer(CorsLayer::permissive())
        } else {
            router
        };

        router
            .layer(request::propagate_request_id_layer())
            .layer(TraceLayer::new_for_http().make_span_with(request::make_span))
            .layer(request::set_request_id_layer())
    }

    /// The fully layered router, for driving requests in-process.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until Ctrl+C / SIGTERM or a message on `shutdown`.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                tokio::select! {
                    _ = shutdown_signal() => {}
                    _ = shutdown.recv() => {
                        tracing::info!("Shutdown requested");
                    }
                }
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
