//! JSON API handlers.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::text::estimator::{estimate_memory_kb, measure, round_to};
use crate::text::{Algorithm, Direction, Pattern};

const DEFAULT_LENGTH: i64 = 100;
const DEFAULT_PATTERN: &str = "mixed";
const DEFAULT_ALGORITHM: &str = "iterative";

/// ISO-8601 local time with microseconds and no offset.
pub fn timestamp() -> String {
    chrono::Local::now()
        .format("%Y-%m-%dT%H:%M:%S%.6f")
        .to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub success: bool,
    pub string: String,
    pub length: usize,
    pub pattern: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub input: String,
    pub output: String,
    pub algorithm: String,
    pub execution_time_ms: f64,
    pub memory_usage_kb: f64,
    pub input_length: usize,
    pub output_length: usize,
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestResponse {
    pub status: String,
    pub message: String,
    pub timestamp: String,
}

/// `POST /api/generate`
pub async fn generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let Json(request) = payload?;
    let n = request.n.unwrap_or(DEFAULT_LENGTH);
    let pattern = request.pattern.unwrap_or_else(|| DEFAULT_PATTERN.to_string());

    let generated = state.generator.generate(n, Pattern::from_tag(&pattern))?;
    let length = generated.chars().count();

    tracing::debug!(length, pattern = %pattern, "Generated string");
    metrics::record_generated(length);

    Ok(Json(GenerateResponse {
        success: true,
        string: generated,
        length,
        pattern,
        timestamp: timestamp(),
    }))
}

/// `POST /api/analyze`
pub async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let Json(request) = payload?;

    let text = request.text.unwrap_or_default();
    if text.is_empty() {
        return Err(ApiError::bad_request("Text is required"));
    }

    let algorithm: Algorithm = request
        .algorithm
        .as_deref()
        .unwrap_or(DEFAULT_ALGORITHM)
        .parse()?;
    let pattern = Pattern::from_tag(request.pattern.as_deref().unwrap_or(DEFAULT_PATTERN));
    let direction = request.direction.as_deref().and_then(Direction::from_tag);

    let (converted, elapsed_ms) =
        measure(|| state.converter.convert(&text, algorithm, pattern, direction));
    let output = match converted {
        Ok(output) => output,
        Err(err) => {
            metrics::record_conversion(algorithm.as_str(), "rejected");
            return Err(err.into());
        }
    };
    metrics::record_conversion(algorithm.as_str(), "ok");

    let execution_time_ms = round_to(elapsed_ms, 4);
    let memory_usage_kb = round_to(estimate_memory_kb(&output), 2);
    let input_length = text.chars().count();
    let output_length = output.chars().count();

    tracing::info!(
        algorithm = %algorithm,
        input_length,
        output_length,
        execution_time_ms,
        "Text analyzed"
    );

    Ok(Json(AnalyzeResponse {
        success: true,
        input: text,
        output,
        algorithm: algorithm.to_string(),
        execution_time_ms,
        memory_usage_kb,
        input_length,
        output_length,
        timestamp: timestamp(),
    }))
}

/// `GET /api/test`
pub async fn test() -> Json<TestResponse> {
    Json(TestResponse {
        status: "ok".to_string(),
        message: "API is working".to_string(),
        timestamp: timestamp(),
    })
}

/// Fallback for unmatched paths.
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
