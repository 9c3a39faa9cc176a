//! HTTP client for a running string-lab server.

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

use crate::http::api::{AnalyzeRequest, AnalyzeResponse, GenerateRequest, GenerateResponse, TestResponse};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server returned {status}: {message}")]
    Api { status: StatusCode, message: String },

    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct ErrorPayload {
    error: String,
}

pub struct StringLabClient {
    client: Client,
    base_url: String,
}

impl StringLabClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `GET /api/test`
    pub async fn test(&self) -> Result<TestResponse, ClientError> {
        let resp = self
            .client
            .get(format!("{}/api/test", self.base_url))
            .send()
            .await?;
        decode(resp).await
    }

    /// `POST /api/generate`
    pub async fn generate(&self, req: &GenerateRequest) -> Result<GenerateResponse, ClientError> {
        let resp = self
            .client
            .post(format!("{}/api/generate", self.base_url))
            .json(req)
            .send()
            .await?;
        decode(resp).await
    }

    /// `POST /api/analyze`
    pub async fn analyze(&self, req: &AnalyzeRequest) -> Result<AnalyzeResponse, ClientError> {
        let resp = self
            .client
            .post(format!("{}/api/analyze", self.base_url))
            .json(req)
            .send()
            .await?;
        decode(resp).await
    }
}

async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ClientError> {
    let status = resp.status();
    let text = resp.text().await?;

    if !status.is_success() {
        let message = serde_json::from_str::<ErrorPayload>(&text)
            .map(|p| p.error)
            .unwrap_or(text);
        return Err(ClientError::Api { status, message });
    }

    Ok(serde_json::from_str(&text)?)
}
