use serde::Serialize;

/// Ledger total, recomputed from scratch on every read.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Totals {
    pub decimal_hours: f64,
    pub hours: u64,
    pub minutes: u64,
}

