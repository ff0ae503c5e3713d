//! Formatting utilities used for CLI and JSON outputs.

/// `H:MM`: hours without padding, minutes always two digits (`5:00`, `26:05`).
pub fn format_hm(hours: u64, minutes: u64) -> String {
    format!("{}:{:02}", hours, minutes)
}

/// Decimal hours with a fixed number of places (`6.33`).
pub fn format_decimal_hours(hours: f64, places: usize) -> String {
    format!("{:.*}", places, hours)
}

/// `6 hours and 20 minutes`
pub fn hours_minutes_readable(hours: u64, minutes: u64) -> String {
    format!("{} hours and {} minutes", hours, minutes)
}

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}
