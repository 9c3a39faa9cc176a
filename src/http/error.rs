//! Error responses.
//!
//! Every failure leaves the service as `{"error": "<message>"}`. Recursion
//! rejections additionally carry `max_recommended_length`.
//!
//! | Source                    | Status |
//! |---------------------------|--------|
//! | validation, bad JSON      | 400    |
//! | recursion limit           | 400    |
//! | oversized body            | 413    |
//! | unknown path              | 404    |
//! | request timeout           | 408    |
//! | anything else, panics     | 500    |
//!
//! Responses produced by middleware or by the router itself (timeouts, wrong
//! method) pass through [`json_error_body`] so they use the same shape.

use std::any::Any;

use axum::{
    extract::rejection::JsonRejection,
    http::{
        header::{CONTENT_LENGTH, CONTENT_TYPE},
        StatusCode,
    },
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::text::{ConversionError, GenerateError, UnknownAlgorithm};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{message}")]
    RecursionLimit {
        message: String,
        max_recommended_length: usize,
    },

    #[error("{0}")]
    PayloadTooLarge(String),

    #[error("Not found")]
    NotFound,

    #[error("{0}")]
    Internal(String),

    /// Error status raised outside the handlers, reported by its reason phrase.
    #[error("{}", .0.canonical_reason().unwrap_or("Request failed"))]
    Status(StatusCode),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::RecursionLimit { .. } => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Status(status) => *status,
        }
    }
}

/// Wire shape of an error.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_recommended_length: Option<usize>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "Request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %self, "Request rejected");
        }

        let max_recommended_length = match &self {
            Self::RecursionLimit {
                max_recommended_length,
                ..
            } => Some(*max_recommended_length),
            _ => None,
        };
        let body = ErrorBody {
            error: self.to_string(),
            max_recommended_length,
        };

        (status, Json(body)).into_response()
    }
}

impl From<GenerateError> for ApiError {
    fn from(err: GenerateError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl From<UnknownAlgorithm> for ApiError {
    fn from(err: UnknownAlgorithm) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl From<ConversionError> for ApiError {
    fn from(err: ConversionError) -> Self {
        match &err {
            ConversionError::StackExhausted {
                max_recommended_length,
                ..
            } => Self::RecursionLimit {
                message: err.to_string(),
                max_recommended_length: *max_recommended_length,
            },
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Self::PayloadTooLarge(rejection.body_text())
        } else {
            Self::BadRequest(rejection.body_text())
        }
    }
}

/// Give error responses that lack a JSON body the `{"error": ...}` shape.
///
/// Headers other than the content ones are carried over (`allow` on 405,
/// CORS, request ID).
pub async fn json_error_body(response: Response) -> Response {
    let status = response.status();
    if !(status.is_client_error() || status.is_server_error()) {
        return response;
    }

    let is_json = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"));
    if is_json {
        return response;
    }

    let mut replacement = ApiError::Status(status).into_response();
    for (name, value) in response.headers() {
        if name != CONTENT_TYPE && name != CONTENT_LENGTH {
            replacement.headers_mut().append(name.clone(), value.clone());
        }
    }
    replacement
}

/// Convert a caught handler panic into a 500 response.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Internal server error".to_string()
    };

    ApiError::Internal(message).into_response()
}
