use async_trait::async_trait;

use crate::error::BudgetError;
use crate::retry::{invoke, RetryPolicy};

use super::types::{BudgetRequest, BudgetResult, HistoryEntry};
use super::BudgetApi;

/// Wrapper that replays failed backend calls under a [`RetryPolicy`].
///
/// Every failure kind is retried alike; the error of the final attempt is
/// what the caller sees.
pub struct ResilientBudgetApi {
    inner: Box<dyn BudgetApi>,
    policy: RetryPolicy,
}

impl ResilientBudgetApi {
    pub fn new(inner: Box<dyn BudgetApi>, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }
}

#[async_trait]
impl BudgetApi for ResilientBudgetApi {
    async fn calculate(&self, request: &BudgetRequest) -> Result<BudgetResult, BudgetError> {
        invoke(&self.policy, || self.inner.calculate(request)).await
    }

    async fn history(&self, email: &str) -> Result<Vec<HistoryEntry>, BudgetError> {
        invoke(&self.policy, || self.inner.history(email)).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    use super::*;

    /// Fails a fixed number of times before answering.
    struct Flaky {
        failures: u32,
        calls: Arc<AtomicU32>,
    }

    #[async_trait]
    impl BudgetApi for Flaky {
        async fn calculate(&self, request: &BudgetRequest) -> Result<BudgetResult, BudgetError> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            if n <= self.failures {
                return Err(BudgetError::HttpError(format!("connection reset #{n}")));
            }
            Ok(BudgetResult {
                savings: request.income - request.expenses,
                recommended_savings: 0.0,
                inflation: Some(5.0),
                message: String::new(),
                recommendations: Vec::new(),
            })
        }

        async fn history(&self, _email: &str) -> Result<Vec<HistoryEntry>, BudgetError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(BudgetError::ApiError {
                status: 400,
                body: "bad email".into(),
            })
        }
    }

    fn wrapped(failures: u32, max_attempts: u32) -> (ResilientBudgetApi, Arc<AtomicU32>) {
        let calls = Arc::new(AtomicU32::new(0));
        let inner = Flaky {
            failures,
            calls: calls.clone(),
        };
        let policy = RetryPolicy::new(max_attempts, 0).unwrap();
        (ResilientBudgetApi::new(Box::new(inner), policy), calls)
    }

    fn request() -> BudgetRequest {
        BudgetRequest {
            email: "a@b.c".into(),
            income: 100.0,
            expenses: 40.0,
            savings_goal: 10.0,
        }
    }

    #[tokio::test]
    async fn recovers_from_transient_failures() {
        let (api, calls) = wrapped(2, 3);
        let result = api.calculate(&request()).await.unwrap();
        assert_eq!(result.savings, 60.0);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn surfaces_last_failure_when_budget_is_spent() {
        let (api, calls) = wrapped(5, 3);
        let err = api.calculate(&request()).await.unwrap_err();
        assert_eq!(err.to_string(), "HTTP error: connection reset #3");
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn client_errors_are_retried_like_any_other() {
        let (api, calls) = wrapped(0, 4);
        let err = api.history("a@b.c").await.unwrap_err();
        assert!(matches!(err, BudgetError::ApiError { status: 400, .. }));
        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }
}
