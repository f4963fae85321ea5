use std::io::{self, Write};

use wealthsync::api::BudgetResult;
use wealthsync::breakdown::BudgetBreakdown;

use super::format_amount;

const BAR_WIDTH: usize = 20;

pub fn render_result(
    out: &mut impl Write,
    result: &BudgetResult,
    breakdown: &BudgetBreakdown,
) -> io::Result<()> {
    writeln!(out, "Your Savings: ₹{}", format_amount(result.savings))?;
    writeln!(
        out,
        "Recommended Savings: ₹{}",
        format_amount(result.recommended_savings)
    )?;
    match result.inflation {
        Some(rate) => writeln!(out, "Inflation Rate in India: {rate}%")?,
        None => writeln!(out, "Inflation Rate in India: unavailable")?,
    }
    if !result.message.is_empty() {
        writeln!(out, "{}", result.message)?;
    }

    if !result.recommendations.is_empty() {
        writeln!(out)?;
        writeln!(out, "Personalized Tips")?;
        for (index, tip) in result.recommendations.iter().enumerate() {
            writeln!(out, "  {}. {tip}", index + 1)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "Budget Breakdown")?;
    let label_width = BudgetBreakdown::LABELS
        .iter()
        .map(|l| l.len())
        .max()
        .unwrap_or(0);
    for slice in breakdown.slices() {
        let filled = ((slice.share * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
        writeln!(
            out,
            "  {:<label_width$}  {}{}  {:>5.1}%  ₹{}",
            slice.label,
            "█".repeat(filled),
            "░".repeat(BAR_WIDTH - filled),
            slice.share * 100.0,
            format_amount(slice.value),
        )?;
    }
    Ok(())
}
