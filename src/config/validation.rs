//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, ports valid)
//! - Keep the recursive strategy within a safe stack depth

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::AppConfig;

/// Upper bound for `conversion.max_recursive_length`.
///
/// Each character costs one stack frame. At this depth the descent still fits
/// a 2 MiB Tokio worker stack in unoptimized builds.
pub const MAX_RECURSIVE_LENGTH_CEILING: usize = 5_000;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.host must not be empty")]
    EmptyHost,

    #[error("listener.port must be non-zero")]
    ZeroPort,

    #[error("conversion.max_recursive_length must be between 1 and {max}, got {0}", max = MAX_RECURSIVE_LENGTH_CEILING)]
    RecursiveLength(usize),

    #[error("generator.max_length must be non-zero")]
    ZeroGeneratorLength,

    #[error("static_page.{0} must not be empty")]
    EmptyStaticPath(&'static str),

    #[error("timeouts.request_secs must be non-zero")]
    ZeroTimeout,

    #[error("security.max_body_size must be non-zero")]
    ZeroBodySize,

    #[error("observability.log_format must be \"pretty\" or \"json\", got {0:?}")]
    LogFormat(String),

    #[error("observability.metrics_address is not a socket address: {0:?}")]
    MetricsAddress(String),
}

/// Check every section and return all problems found.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.host.trim().is_empty() {
        errors.push(ValidationError::EmptyHost);
    }
    if config.listener.port == 0 {
        errors.push(ValidationError::ZeroPort);
    }

    let recursive = config.conversion.max_recursive_length;
    if recursive == 0 || recursive > MAX_RECURSIVE_LENGTH_CEILING {
        errors.push(ValidationError::RecursiveLength(recursive));
    }

    if config.generator.max_length == 0 {
        errors.push(ValidationError::ZeroGeneratorLength);
    }

    if config.static_page.template_dir.trim().is_empty() {
        errors.push(ValidationError::EmptyStaticPath("template_dir"));
    }
    if config.static_page.index_file.trim().is_empty() {
        errors.push(ValidationError::EmptyStaticPath("index_file"));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }
    if config.security.max_body_size == 0 {
        errors.push(ValidationError::ZeroBodySize);
    }

    let observability = &config.observability;
    if !matches!(observability.log_format.as_str(), "pretty" | "json") {
        errors.push(ValidationError::LogFormat(observability.log_format.clone()));
    }
    if observability.metrics_enabled
        && observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::MetricsAddress(
            observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
