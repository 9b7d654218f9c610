use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::config::Config;
use crate::models::{BookRecord, SearchKind};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to reach catalog: {0}")]
    Transport(String),
    #[error("Open Library API returned status: {0}")]
    Status(u16),
    #[error("Failed to parse JSON: {0}")]
    Decode(String),
}

/// Build the request URL for one search.
///
/// The query is percent-encoded; the subject lookup also lowercases it
/// before it becomes a path segment.
pub fn build_search_url(base_url: &str, kind: SearchKind, query: &str) -> String {
    let base = base_url.trim_end_matches('/');
    match kind {
        SearchKind::Author => format!("{}/search.json?author={}", base, urlencoding::encode(query)),
        SearchKind::Title => format!("{}/search.json?title={}", base, urlencoding::encode(query)),
        SearchKind::Genre => format!(
            "{}/subjects/{}.json",
            base,
            urlencoding::encode(&query.to_lowercase())
        ),
    }
}

/// Pick the record array for `kind` out of a decoded response body.
///
/// The body must be a JSON object; a missing or non-array field in it
/// yields no records.
pub fn records_from_response(
    kind: SearchKind,
    body: &Value,
) -> Result<Vec<BookRecord>, CatalogError> {
    let Some(object) = body.as_object() else {
        return Err(CatalogError::Decode(
            "response body is not a JSON object".to_string(),
        ));
    };

    Ok(object
        .get(kind.records_field())
        .and_then(Value::as_array)
        .map(|items| items.iter().map(BookRecord::from_value).collect())
        .unwrap_or_default())
}

#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Run one GET against `url` and normalize the records for `kind`.
    async fn fetch_records(
        &self,
        kind: SearchKind,
        url: &str,
    ) -> Result<Vec<BookRecord>, CatalogError>;
}

#[derive(Clone)]
pub struct OpenLibraryClient {
    client: reqwest::Client,
}

impl OpenLibraryClient {
    pub fn new(config: &Config) -> Result<Self, CatalogError> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| CatalogError::Transport(format!("Failed to build client: {}", e)))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl CatalogClient for OpenLibraryClient {
    async fn fetch_records(
        &self,
        kind: SearchKind,
        url: &str,
    ) -> Result<Vec<BookRecord>, CatalogError> {
        tracing::debug!("GET {}", url);

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(CatalogError::Status(resp.status().as_u16()));
        }

        let body = resp.text().await.map_err(|e| {
            CatalogError::Transport(format!("Failed to read response body: {}", e))
        })?;

        let parsed: Value =
            serde_json::from_str(&body).map_err(|e| CatalogError::Decode(e.to_string()))?;

        records_from_response(kind, &parsed)
    }
}
