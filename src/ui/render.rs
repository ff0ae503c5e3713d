//! Text rendering of the ledger and its totals.

use crate::core::Session;
use crate::models::{Duration, Totals};
use crate::utils::formatting::{format_decimal_hours, hours_minutes_readable};

/// `Entry 1: 5:00`, `Entry 2: 1:20`, ...
pub fn entry_lines(entries: &[Duration]) -> Vec<String> {
    entries
        .iter()
        .enumerate()
        .map(|(i, d)| format!("Entry {}: {}", i + 1, d))
        .collect()
}

/// Precise readout first, then the hours/minutes one.
pub fn total_lines(totals: &Totals, decimal_places: usize) -> [String; 2] {
    [
        format!(
            "Total Hours: {}",
            format_decimal_hours(totals.decimal_hours, decimal_places)
        ),
        format!(
            "Total Hours: {}",
            hours_minutes_readable(totals.hours, totals.minutes)
        ),
    ]
}

pub fn render_session(session: &Session, decimal_places: usize) -> String {
    let mut lines = entry_lines(session.entries());
    lines.extend(total_lines(&session.totals(), decimal_places));
    lines.join("\n")
}

pub fn print_session(session: &Session, decimal_places: usize) {
    println!("{}", render_session(session, decimal_places));
}
