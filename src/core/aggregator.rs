//! Ledger totals as decimal hours and as whole hours + minutes.
//!
//! Nothing is cached: every call walks the full ledger, so the total can
//! never drift from the entries it summarizes.

use crate::core::ledger::EntryLedger;
use crate::models::Totals;
use crate::utils::time::MINUTES_PER_HOUR;

/// Sum of `hours + minutes / 60` over every entry; `0.0` when empty.
pub fn total_decimal_hours(ledger: &EntryLedger) -> f64 {
    // fold from +0.0: an empty float `sum()` is -0.0 and would print as "-0.00"
    ledger
        .iter()
        .fold(0.0, |acc, entry| acc + entry.decimal_hours())
}

/// Split decimal hours into `(hours, minutes)`.
///
/// Minutes are rounded to the nearest whole minute. A remainder that rounds
/// up to 60 is carried into the hours, so `1.9999` gives `(2, 0)` and never
/// `(1, 60)`. Negative input is treated as zero.
pub fn decimal_to_hours_minutes(decimal_hours: f64) -> (u64, u64) {
    let decimal_hours = decimal_hours.max(0.0);
    let mut hours = decimal_hours.floor() as u64;
    let mut minutes = ((decimal_hours - decimal_hours.floor()) * MINUTES_PER_HOUR as f64).round() as u64;

    if minutes >= MINUTES_PER_HOUR as u64 {
        hours += minutes / MINUTES_PER_HOUR as u64;
        minutes %= MINUTES_PER_HOUR as u64;
    }

    (hours, minutes)
}

pub fn totals(ledger: &EntryLedger) -> Totals {
    let decimal_hours = total_decimal_hours(ledger);
    let (hours, minutes) = decimal_to_hours_minutes(decimal_hours);
    Totals {
        decimal_hours,
        hours,
        minutes,
    }
}
