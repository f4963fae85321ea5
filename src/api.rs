//! Budget backend contract, its HTTP client and the retrying wrapper.

#[path = "api/types.rs"]
mod types;

#[path = "api/http.rs"]
mod http;

#[path = "api/resilient.rs"]
mod resilient;

#[path = "api/builder.rs"]
mod builder;


use async_trait::async_trait;

use crate::error::BudgetError;

pub use builder::BudgetApiBuilder;
pub use http::{HttpBudgetApi, DEFAULT_BASE_URL};
pub use resilient::ResilientBudgetApi;
pub use types::{BudgetRequest, BudgetResult, HistoryEntry, HistoryRequest};

/// Operations the budget backend exposes.
#[async_trait]
pub trait BudgetApi: Send + Sync {
    /// Computes savings, inflation and recommendations for one submission.
    async fn calculate(&self, request: &BudgetRequest) -> Result<BudgetResult, BudgetError>;

    /// Lists the past submissions stored for `email`.
    async fn history(&self, email: &str) -> Result<Vec<HistoryEntry>, BudgetError>;
}
