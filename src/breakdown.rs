//! Shapes a recommendation into pie chart data.

use crate::api::BudgetResult;

/// One wedge of the budget pie.
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: &'static str,
    pub value: f64,
    /// Fraction of the pie in `0.0..=1.0`.
    pub share: f64,
}

/// Expenses, savings and recommended savings side by side.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetBreakdown {
    slices: [Slice; 3],
}

impl BudgetBreakdown {
    pub const LABELS: [&'static str; 3] = ["Expenses", "Savings", "Recommended Savings"];

    /// Builds the breakdown from the submitted expenses and the backend result.
    ///
    /// Negative values (overspending) are kept as-is but count as zero toward
    /// the shares; a pie with nothing positive in it has all shares at zero.
    pub fn from_result(expenses: f64, result: &BudgetResult) -> Self {
        let values = [expenses, result.savings, result.recommended_savings];
        let weights = values.map(|v| if v.is_finite() { v.max(0.0) } else { 0.0 });
        let total: f64 = weights.iter().sum();

        let mut i = 0;
        let slices = values.map(|value| {
            let share = if total > 0.0 { weights[i] / total } else { 0.0 };
            let slice = Slice {
                label: Self::LABELS[i],
                value,
                share,
            };
            i += 1;
            slice
        });
        Self { slices }
    }

    pub fn slices(&self) -> &[Slice] {
        &self.slices
    }
}
