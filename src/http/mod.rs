//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID, span, metrics)
//!     → api.rs (parse JSON, validate, call text subsystem)
//!       or static_page.rs (landing page)
//!     → error.rs (map failures to {"error": ...} responses)
//!     → Send to client
//! ```

pub mod api;
pub mod error;
pub mod request;
pub mod server;
pub mod static_page;

pub use error::ApiError;
pub use request::{RequestIdExt, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
