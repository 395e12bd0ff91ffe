//! Display formatting for backend values.
//!
//! Formatting is pure string work so SSR and hydrate render identical text.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

const MONTHS: [&str; 12] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];

/// `2024-05-01T10:00:00` -> `May 1, 2024`. Unparseable input is returned as-is.
#[must_use]
pub fn display_date(timestamp: &str) -> String {
    parse_ymd(timestamp).map_or_else(
        || timestamp.to_owned(),
        |(year, month, day)| format!("{} {day}, {year}", MONTHS[month - 1]),
    )
}

fn parse_ymd(timestamp: &str) -> Option<(u32, usize, u32)> {
    let date = timestamp.get(..10)?;
    let mut parts = date.split('-');
    let year = parts.next()?.parse::<u32>().ok()?;
    let month = parts.next()?.parse::<usize>().ok()?;
    let day = parts.next()?.parse::<u32>().ok()?;
    ((1..=12).contains(&month) && (1..=31).contains(&day)).then_some((year, month, day))
}

/// CSS modifier for a status chip.
#[must_use]
pub fn status_chip_class(status: &crate::net::types::ModelStatus) -> &'static str {
    use crate::net::types::ModelStatus;
    match status {
        ModelStatus::Completed => "status-chip status-chip--success",
        ModelStatus::Processing => "status-chip status-chip--warning",
        ModelStatus::Pending => "status-chip status-chip--info",
        ModelStatus::Failed | ModelStatus::Other(_) => "status-chip status-chip--error",
    }
}
