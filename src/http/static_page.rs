//! Landing page.
//!
//! Serves `<template_dir>/<index_file>` from disk on every request so edits
//! show up without a restart. When the file does not exist the built-in page
//! is served instead.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use axum::{extract::State, response::Html};

use crate::config::StaticPageConfig;
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Page compiled into the binary.
pub const BUILTIN_INDEX: &str = include_str!("../../assets/index.html");

/// Location of the landing page on disk.
#[derive(Debug, Clone)]
pub struct LandingPage {
    path: PathBuf,
}

impl LandingPage {
    pub fn new(config: &StaticPageConfig) -> Self {
        Self {
            path: Path::new(&config.template_dir).join(&config.index_file),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the page, falling back to [`BUILTIN_INDEX`] if the file is absent.
    pub async fn load(&self) -> std::io::Result<String> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(html) => Ok(html),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BUILTIN_INDEX.to_string()),
            Err(e) => Err(e),
        }
    }
}

/// `GET /`
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    state.landing_page.load().await.map(Html).map_err(|e| {
        ApiError::Internal(format!(
            "Failed to read {}: {}",
            state.landing_page.path().display(),
            e
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_in(dir: &Path) -> LandingPage {
        LandingPage::new(&StaticPageConfig {
            template_dir: dir.to_string_lossy().into_owned(),
            index_file: "index.html".to_string(),
        })
    }

    #[tokio::test]
    async fn test_serves_file_from_template_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<h1>custom</h1>").unwrap();

        let html = page_in(dir.path()).load().await.unwrap();
        assert_eq!(html, "<h1>custom</h1>");
    }

    #[tokio::test]
    async fn test_falls_back_to_builtin_page() {
        let dir = tempfile::tempdir().unwrap();

        let html = page_in(dir.path()).load().await.unwrap();
        assert_eq!(html, BUILTIN_INDEX);
        assert!(html.contains("/api/analyze"));
    }
}
