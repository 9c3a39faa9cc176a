//! Text subsystem: the logic behind the API endpoints.
//!
//! # Data Flow
//! ```text
//! /api/generate
//!     → generator.rs (random draw from a pattern pool)
//!
//! /api/analyze
//!     → types.rs (parse algorithm / pattern / direction tags)
//!     → converter.rs (iterative or bounded recursive transform)
//!     → estimator.rs (elapsed time, memory heuristic)
//! ```
//!
//! Everything here is synchronous and free of I/O so it can be tested without
//! a server.

pub mod converter;
pub mod estimator;
pub mod generator;
pub mod types;

pub use converter::{CaseConverter, ConversionError, Transform};
pub use generator::{GenerateError, StringGenerator};
pub use types::{Algorithm, Direction, Pattern, UnknownAlgorithm};
