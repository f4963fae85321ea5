//! Planner state: the form inputs, the latest recommendation and the history.

use crate::api::{BudgetApi, BudgetRequest, BudgetResult, HistoryEntry};
use crate::breakdown::BudgetBreakdown;
use crate::error::BudgetError;

/// Inputs collected from the user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BudgetForm {
    pub email: String,
    pub income: f64,
    pub expenses: f64,
    pub savings_goal: f64,
}

impl BudgetForm {
    pub fn new(email: impl Into<String>, income: f64, expenses: f64, savings_goal: f64) -> Self {
        Self {
            email: email.into(),
            income,
            expenses,
            savings_goal,
        }
    }

    pub fn has_email(&self) -> bool {
        !self.email.trim().is_empty()
    }

    pub fn to_request(&self) -> BudgetRequest {
        BudgetRequest {
            email: self.email.trim().to_string(),
            income: self.income,
            expenses: self.expenses,
            savings_goal: self.savings_goal,
        }
    }
}

/// Everything a front end renders.
#[derive(Debug, Clone, Default)]
pub struct PlannerState {
    pub form: BudgetForm,
    pub result: Option<BudgetResult>,
    pub history: Vec<HistoryEntry>,
}

impl PlannerState {
    /// Pie chart data for the current result, if any.
    pub fn breakdown(&self) -> Option<BudgetBreakdown> {
        self.result
            .as_ref()
            .map(|result| BudgetBreakdown::from_result(self.form.expenses, result))
    }
}

/// Outcome of a successful submission.
#[derive(Debug)]
pub struct SubmitReport<'a> {
    pub result: &'a BudgetResult,
    /// Set when the follow-up history refresh failed.
    pub history_error: Option<BudgetError>,
}

/// Drives the backend calls and owns the resulting state.
///
/// Operations take `&mut self`, so one planner never has two requests in
/// flight. Independent planners share nothing.
pub struct Planner {
    api: Box<dyn BudgetApi>,
    state: PlannerState,
}

impl Planner {
    pub fn new(api: Box<dyn BudgetApi>, form: BudgetForm) -> Self {
        Self {
            api,
            state: PlannerState {
                form,
                ..PlannerState::default()
            },
        }
    }

    pub fn state(&self) -> &PlannerState {
        &self.state
    }

    pub fn form_mut(&mut self) -> &mut BudgetForm {
        &mut self.state.form
    }

    /// Sends the form, stores the recommendation, then refreshes history.
    ///
    /// A failed calculation leaves the previous state untouched. A failed
    /// history refresh does not fail the submission.
    pub async fn submit(&mut self) -> Result<SubmitReport<'_>, BudgetError> {
        let request = self.state.form.to_request();
        let result = self.api.calculate(&request).await?;
        log::info!(
            "budget calculated for {}: savings {}, recommended {}",
            request.email,
            result.savings,
            result.recommended_savings
        );
        let history_error = if self.state.form.has_email() {
            self.refresh_history().await.err()
        } else {
            None
        };

        Ok(SubmitReport {
            result: self.state.result.insert(result),
            history_error,
        })
    }

    /// Replaces the stored history with the backend's current list.
    pub async fn refresh_history(&mut self) -> Result<&[HistoryEntry], BudgetError> {
        if !self.state.form.has_email() {
            return Err(BudgetError::MissingEmail);
        }
        let email = self.state.form.email.trim().to_string();
        let history = self.api.history(&email).await?;
        log::debug!("fetched {} history entries for {email}", history.len());
        self.state.history = history;
        Ok(&self.state.history)
    }
}
