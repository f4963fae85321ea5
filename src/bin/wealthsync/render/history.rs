use std::io::{self, Write};

use chrono::{DateTime, Local, NaiveDateTime};
use unicode_width::UnicodeWidthStr;
use wealthsync::api::HistoryEntry;

use super::format_amount;

const HEADERS: [&str; 6] = [
    "Date",
    "Income (₹)",
    "Expenses (₹)",
    "Savings (₹)",
    "Recommended Savings (₹)",
    "Message",
];

const EMPTY_HISTORY: &str = "No budget history found for this email.";

pub fn render_history(out: &mut impl Write, history: &[HistoryEntry]) -> io::Result<()> {
    if history.is_empty() {
        return writeln!(out, "{EMPTY_HISTORY}");
    }

    let rows: Vec<[String; 6]> = history
        .iter()
        .map(|entry| {
            [
                format_timestamp(&entry.timestamp),
                amount_cell(entry.income),
                amount_cell(entry.expenses),
                amount_cell(entry.savings),
                amount_cell(entry.recommended_savings),
                entry.message.clone(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|header| header.width());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    write_row(out, &HEADERS[..], &widths)?;
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    write_row(out, &rule[..], &widths)?;
    for row in &rows {
        write_row(out, &row[..], &widths)?;
    }
    Ok(())
}

fn write_row<S: AsRef<str>>(out: &mut impl Write, cells: &[S], widths: &[usize]) -> io::Result<()> {
    let mut line = String::new();
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        let cell = cell.as_ref();
        if i > 0 {
            line.push_str("  ");
        }
        line.push_str(cell);
        if i + 1 < cells.len() {
            line.push_str(&" ".repeat(width.saturating_sub(cell.width())));
        }
    }
    writeln!(out, "{line}")
}

fn amount_cell(amount: Option<f64>) -> String {
    amount.map(format_amount).unwrap_or_else(|| "-".to_string())
}

/// RFC 3339 stamps are shown in local time, naive ISO stamps as written,
/// anything else verbatim.
fn format_timestamp(raw: &str) -> String {
    const DISPLAY: &str = "%Y-%m-%d %H:%M:%S";
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(&Local).format(DISPLAY).to_string();
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return naive.format(DISPLAY).to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(timestamp: &str, message: &str) -> HistoryEntry {
        HistoryEntry {
            id: None,
            timestamp: timestamp.into(),
            income: Some(50000.0),
            expenses: Some(30000.0),
            savings: Some(20000.0),
            recommended_savings: Some(10000.5),
            message: message.into(),
        }
    }

    fn render(history: &[HistoryEntry]) -> String {
        let mut out = Vec::new();
        render_history(&mut out, history).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn empty_history_prints_notice() {
        assert_eq!(render(&[]), format!("{EMPTY_HISTORY}\n"));
    }

    #[test]
    fn columns_line_up_by_display_width() {
        let text = render(&[
            entry("2025-01-15T08:30:00", "On track"),
            entry("2025-02-15T08:30:00.123456", "Spend less"),
        ]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Date                 Income (₹)  Expenses (₹)"));
        assert!(lines[2].starts_with("2025-01-15 08:30:00  50000       30000"));
        assert!(lines[2].ends_with("10000.50                 On track"));

        let income_col = |line: &str| line.find("Income").or_else(|| line.find("50000"));
        assert_eq!(
            lines[0][..income_col(lines[0]).unwrap()].width(),
            lines[3][..income_col(lines[3]).unwrap()].width()
        );
    }

    #[test]
    fn missing_amounts_render_as_dash() {
        let mut row = entry("2025-01-15T08:30:00", "Partial");
        row.savings = None;
        row.recommended_savings = None;
        let text = render(&[row]);
        let last = text.lines().last().unwrap();
        assert!(last.starts_with("2025-01-15 08:30:00  50000       30000         -"));
        assert!(last.ends_with("  Partial"));
    }

    #[test]
    fn timestamps_fall_back_to_raw_text() {
        assert_eq!(format_timestamp("yesterday"), "yesterday");
        assert_eq!(format_timestamp("2025-01-15T08:30:00"), "2025-01-15 08:30:00");
        let zoned = format_timestamp("2025-01-15T12:00:00Z");
        assert_eq!(zoned.len(), "2025-01-15 12:00:00".len());
        assert!(!zoned.contains('T'));
    }
}
