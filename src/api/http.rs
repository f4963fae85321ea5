//! reqwest client for the WealthSync budget backend.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::BudgetError;

use super::types::{BudgetRequest, BudgetResult, HistoryEntry, HistoryRequest};
use super::BudgetApi;

/// Hosted backend used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://wealthsync-backend.onrender.com";

#[derive(Debug)]
struct HttpConfig {
    base_url: String,
    timeout_seconds: Option<u64>,
}

/// Client for the budget backend's JSON API.
///
/// The client uses `Arc` internally for configuration, making cloning cheap.
/// Each call performs exactly one HTTP request; retries belong to
/// [`ResilientBudgetApi`](super::ResilientBudgetApi).
#[derive(Debug, Clone)]
pub struct HttpBudgetApi {
    config: Arc<HttpConfig>,
    client: Client,
}

impl HttpBudgetApi {
    pub fn new(
        base_url: impl Into<String>,
        timeout_seconds: Option<u64>,
    ) -> Result<Self, BudgetError> {
        let mut builder = Client::builder();
        if let Some(sec) = timeout_seconds {
            builder = builder.timeout(Duration::from_secs(sec));
        }
        Ok(Self::with_client(builder.build()?, base_url, timeout_seconds))
    }

    /// Creates a client around an existing reqwest `Client`.
    pub fn with_client(
        client: Client,
        base_url: impl Into<String>,
        timeout_seconds: Option<u64>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            config: Arc::new(HttpConfig {
                base_url,
                timeout_seconds,
            }),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, BudgetError>
    where
        B: Serialize + ?Sized + Sync,
        R: DeserializeOwned,
    {
        let url = format!("{}{}", self.config.base_url, path);

        if log::log_enabled!(log::Level::Trace) {
            if let Ok(json) = serde_json::to_string(body) {
                log::trace!("POST {url} payload: {json}");
            }
        }

        let mut request = self.client.post(&url).json(body);
        if let Some(timeout) = self.config.timeout_seconds {
            request = request.timeout(Duration::from_secs(timeout));
        }

        let resp = request.send().await?;
        log::debug!("POST {url} HTTP status: {}", resp.status());
        decode(resp).await
    }
}

async fn decode<R: DeserializeOwned>(resp: Response) -> Result<R, BudgetError> {
    let status = resp.status();
    let text = resp.text().await?;
    if !status.is_success() {
        return Err(BudgetError::ApiError {
            status: status.as_u16(),
            body: text,
        });
    }
    serde_json::from_str(&text).map_err(|e| BudgetError::ResponseFormatError {
        message: e.to_string(),
        raw_response: text,
    })
}

#[async_trait]
impl BudgetApi for HttpBudgetApi {
    async fn calculate(&self, request: &BudgetRequest) -> Result<BudgetResult, BudgetError> {
        self.post_json("/api/budget", request).await
    }

    async fn history(&self, email: &str) -> Result<Vec<HistoryEntry>, BudgetError> {
        self.post_json("/api/budget/history", &HistoryRequest { email })
            .await
    }
}
