//! Client library for the WealthSync budget planner.
//!
//! The backend computes budgets, looks up inflation and produces savings
//! recommendations. This crate talks to it over HTTP, retries failed calls
//! with a fixed delay, and keeps the planner state a front end needs to
//! render a recommendation, its breakdown and the per-email history.
//!
//! ```no_run
//! use wealthsync::{api::BudgetApiBuilder, planner::{BudgetForm, Planner}};
//!
//! # async fn run() -> Result<(), wealthsync::error::BudgetError> {
//! let api = BudgetApiBuilder::new().build()?;
//! let form = BudgetForm::new("me@example.com", 50_000.0, 30_000.0, 10_000.0);
//! let mut planner = Planner::new(api, form);
//! let report = planner.submit().await?;
//! println!("{}", report.result.message);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod breakdown;
pub mod error;
pub mod planner;
pub mod retry;

pub use error::BudgetError;
pub use retry::{invoke, RetryPolicy};
