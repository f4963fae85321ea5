mod history;
mod result;

pub use history::render_history;
pub use result::render_result;

/// Whole rupees print without decimals, anything else with two.
pub fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}
