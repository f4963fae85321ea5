use std::io::{self, Write};

use anyhow::Context;

use wealthsync::api::BudgetApi;
use wealthsync::planner::{BudgetForm, Planner};
use wealthsync::BudgetError;

use crate::render::{render_history, render_result};

const CALCULATE_FAILED: &str =
    "Error calculating budget. The backend might be waking up, please try again in a few seconds.";
const HISTORY_FAILED: &str =
    "Error fetching budget history. The backend might be waking up, please try again in a few seconds.";

pub async fn plan(
    api: Box<dyn BudgetApi>,
    email: String,
    income: f64,
    expenses: f64,
    savings_goal: f64,
) -> anyhow::Result<()> {
    let mut planner = Planner::new(api, BudgetForm::new(email, income, expenses, savings_goal));

    eprintln!("Loading...");
    let report = planner.submit().await.context(CALCULATE_FAILED)?;
    let history_failed = match report.history_error {
        Some(err) => {
            log::warn!("history refresh after submit failed: {err}");
            eprintln!("{HISTORY_FAILED} ({err})");
            true
        }
        None => false,
    };

    let state = planner.state();
    let mut out = io::stdout().lock();
    if let (Some(result), Some(breakdown)) = (&state.result, state.breakdown()) {
        render_result(&mut out, result, &breakdown)?;
    }

    writeln!(out)?;
    writeln!(out, "Your Budget History")?;
    if !state.form.has_email() {
        writeln!(out, "Please enter your email to view history.")?;
    } else if !history_failed {
        render_history(&mut out, &state.history)?;
    }
    Ok(())
}

pub async fn history(api: Box<dyn BudgetApi>, email: String) -> anyhow::Result<()> {
    let mut planner = Planner::new(api, BudgetForm::new(email, 0.0, 0.0, 0.0));

    if !planner.state().form.has_email() {
        return Err(BudgetError::MissingEmail.into());
    }
    eprintln!("Loading...");
    let history = planner.refresh_history().await.context(HISTORY_FAILED)?;

    let mut out = io::stdout().lock();
    writeln!(out, "Your Budget History")?;
    render_history(&mut out, history)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;
    use wealthsync::api::{BudgetRequest, BudgetResult, HistoryEntry};

    use super::*;

    /// Counts backend calls; history fails on demand.
    struct CountingApi {
        calls: Arc<AtomicU32>,
        history_fails: bool,
    }

    #[async_trait]
    impl BudgetApi for CountingApi {
        async fn calculate(&self, _request: &BudgetRequest) -> Result<BudgetResult, BudgetError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(BudgetError::HttpError("down".into()))
        }

        async fn history(&self, _email: &str) -> Result<Vec<HistoryEntry>, BudgetError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.history_fails {
                return Err(BudgetError::HttpError("down".into()));
            }
            Ok(Vec::new())
        }
    }

    fn api(history_fails: bool) -> (Box<dyn BudgetApi>, Arc<AtomicU32>) {
        let calls = Arc::new(AtomicU32::new(0));
        let api = CountingApi {
            calls: calls.clone(),
            history_fails,
        };
        (Box::new(api), calls)
    }

    #[tokio::test]
    async fn blank_email_asks_for_email_without_calling_backend() {
        let (api, calls) = api(false);
        let err = history(api, "  ".into()).await.unwrap_err();

        assert_eq!(err.to_string(), "Please enter your email to view history.");
        assert_eq!(err.chain().count(), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn failed_history_mentions_waking_backend() {
        let (api, calls) = api(true);
        let err = history(api, "me@example.com".into()).await.unwrap_err();

        assert_eq!(err.to_string(), HISTORY_FAILED);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
