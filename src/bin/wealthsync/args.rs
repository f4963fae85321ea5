use clap::{Parser, Subcommand};
use std::num::NonZeroU32;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "wealthsync",
    about = "Plan a monthly budget and review past plans with the WealthSync backend"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,
    #[arg(long, global = true)]
    pub base_url: Option<String>,
    /// Per-request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,
    #[arg(long, global = true)]
    pub max_attempts: Option<NonZeroU32>,
    #[arg(long, global = true)]
    pub delay_ms: Option<u64>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Submit income, expenses and a savings goal for a recommendation
    Plan {
        #[arg(long, short = 'e', default_value = "")]
        email: String,
        /// Monthly income (₹)
        #[arg(long, value_parser = parse_amount)]
        income: f64,
        /// Monthly expenses (₹)
        #[arg(long, value_parser = parse_amount)]
        expenses: f64,
        /// Savings goal (₹)
        #[arg(long, value_parser = parse_amount)]
        savings_goal: f64,
    },
    /// Show the budget history stored for an email
    History {
        #[arg(long, short = 'e')]
        email: String,
    },
}

/// Accepts what a numeric form field would: finite numbers only.
fn parse_amount(raw: &str) -> Result<f64, String> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("{raw:?} is not a number"))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("{raw:?} is not a finite amount"))
    }
}
