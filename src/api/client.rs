//! Wallhaven API HTTP client.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use futures::StreamExt;
use reqwest::{header, Client, Response};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::api::retry::{with_retry, RetryPolicy, Sleeper, TokioSleeper};
use crate::api::types::SearchResponse;
use crate::config::{HttpConfig, SearchConfig};
use crate::error::{Error, Result};
use crate::fs::staging_path;

/// Parameters of one paginated search.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub query: String,
    pub purity: String,
    pub sorting: String,
    pub order: String,
}

impl From<&SearchConfig> for SearchRequest {
    fn from(search: &SearchConfig) -> Self {
        Self {
            query: search.query.clone(),
            purity: search.purity.to_string(),
            sorting: search.sorting.to_string(),
            order: search.order.to_string(),
        }
    }
}

/// Wallhaven API client with retrying metadata and download calls.
pub struct WallhavenApi {
    client: Client,
    api_url: String,
    api_timeout: Duration,
    download_timeout: Duration,
    policy: RetryPolicy,
    sleeper: Arc<dyn Sleeper>,
}

impl WallhavenApi {
    /// Create a client from the HTTP settings.
    pub fn new(http: &HttpConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&http.user_agent)
            .connect_timeout(Duration::from_secs(http.api_timeout_seconds))
            .build()
            .map_err(|e| Error::Api(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_url: http.api_url.clone(),
            api_timeout: Duration::from_secs(http.api_timeout_seconds),
            download_timeout: Duration::from_secs(http.download_timeout_seconds),
            policy: RetryPolicy::from_config(http),
            sleeper: Arc::new(TokioSleeper),
        })
    }

    /// Replace the sleeper used for backoff and inter-page delays.
    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    pub fn sleeper(&self) -> &dyn Sleeper {
        self.sleeper.as_ref()
    }

    /// Fetch one page of search results.
    pub async fn search_page(&self, request: &SearchRequest, page: u32) -> Result<SearchResponse> {
        let target = format!("{} (page {})", self.api_url, page);
        with_retry(&self.policy, self.sleeper(), &target, move || {
            self.fetch_page_once(request, page)
        })
        .await
    }

    async fn fetch_page_once(&self, request: &SearchRequest, page: u32) -> Result<SearchResponse> {
        let page_str = page.to_string();
        tracing::debug!("GET {} page={}", self.api_url, page);

        let response = self
            .client
            .get(&self.api_url)
            .query(&[
                ("q", request.query.as_str()),
                ("purity", request.purity.as_str()),
                ("sorting", request.sorting.as_str()),
                ("order", request.order.as_str()),
                ("page", page_str.as_str()),
            ])
            .timeout(self.api_timeout)
            .send()
            .await?;

        let response = check_status(response)?;
        let text = response.text().await?;

        serde_json::from_str(&text).map_err(|e| {
            Error::Api(format!(
                "Failed to parse search page {}: {} - Response: {}",
                page,
                e,
                preview(&text, 500)
            ))
        })
    }

    /// Download `url` to `destination` via a staging sibling, retrying transient failures.
    ///
    /// The destination only ever appears fully written; the staging file is
    /// removed on any failure. Returns the number of bytes written.
    pub async fn download_file(&self, url: &str, destination: &Path) -> Result<u64> {
        with_retry(&self.policy, self.sleeper(), url, move || {
            self.download_once(url, destination)
        })
        .await
    }

    async fn download_once(&self, url: &str, destination: &Path) -> Result<u64> {
        let staging = staging_path(destination);

        let result = match self.stream_to_file(url, &staging).await {
            Ok(bytes) => tokio::fs::rename(&staging, destination)
                .await
                .map(|()| bytes)
                .map_err(Error::from),
            Err(e) => Err(e),
        };

        if result.is_err() {
            remove_staging(&staging).await;
        }
        result
    }

    async fn stream_to_file(&self, url: &str, staging: &Path) -> Result<u64> {
        let response = self
            .client
            .get(url)
            .timeout(self.download_timeout)
            .send()
            .await?;
        let response = check_status(response)?;

        let mut file = File::create(staging).await?;
        let mut stream = response.bytes_stream();
        let mut written: u64 = 0;

        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            file.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }

        file.flush().await?;
        file.sync_all().await?;

        Ok(written)
    }
}

/// Turn a non-success status into an error carrying any retry-after hint.
fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    Err(Error::HttpStatus {
        status: status.as_u16(),
        url: response.url().to_string(),
        retry_after: parse_retry_after(response.headers()),
    })
}

/// Read a `Retry-After` header given in whole seconds.
///
/// HTTP-date values are ignored and fall back to the computed backoff.
pub fn parse_retry_after(headers: &header::HeaderMap) -> Option<Duration> {
    let value = headers.get(header::RETRY_AFTER)?.to_str().ok()?.trim();
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok().map(Duration::from_secs)
}

/// Leading slice of a response body for error messages.
fn preview(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

async fn remove_staging(staging: &Path) {
    if let Err(e) = tokio::fs::remove_file(staging).await {
        if e.kind() != std::io::ErrorKind::NotFound {
            tracing::warn!("Failed to remove {}: {}", staging.display(), e);
        }
    }
}
