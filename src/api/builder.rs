use crate::error::BudgetError;
use crate::retry::RetryPolicy;

use super::http::{HttpBudgetApi, DEFAULT_BASE_URL};
use super::resilient::ResilientBudgetApi;
use super::BudgetApi;

/// Builder for configuring and instantiating a budget backend client.
pub struct BudgetApiBuilder {
    base_url: Option<String>,
    timeout_seconds: Option<u64>,
    retry: Option<RetryPolicy>,
    resilient: bool,
}

impl Default for BudgetApiBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_seconds: None,
            retry: None,
            resilient: true,
        }
    }
}

impl BudgetApiBuilder {
    /// Creates a builder pointing at the hosted backend with default retries.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base URL for API requests.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the per-request timeout in seconds.
    pub fn timeout_seconds(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = Some(timeout_seconds);
        self
    }

    /// Sets the retry policy used when the client is resilient.
    pub fn retry(mut self, policy: RetryPolicy) -> Self {
        self.retry = Some(policy);
        self
    }

    /// Enables or disables the retry wrapper.
    pub fn resilient(mut self, enable: bool) -> Self {
        self.resilient = enable;
        self
    }

    /// Builds the client, wrapped in [`ResilientBudgetApi`] unless disabled.
    pub fn build(self) -> Result<Box<dyn BudgetApi>, BudgetError> {
        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        if base_url.trim().is_empty() {
            return Err(BudgetError::InvalidRequest(
                "base URL must not be empty".to_string(),
            ));
        }

        let http: Box<dyn BudgetApi> =
            Box::new(HttpBudgetApi::new(base_url, self.timeout_seconds)?);
        if !self.resilient {
            return Ok(http);
        }
        let policy = self.retry.unwrap_or_default();
        Ok(Box::new(ResilientBudgetApi::new(http, policy)))
    }
}
