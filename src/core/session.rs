//! Command handlers over one in-memory ledger.
//!
//! Every handler validates first and mutates last: a rejected input leaves
//! the ledger exactly as it was.

use crate::config::Config;
use crate::core::aggregator;
use crate::core::calculator::{SpanMode, calculate_span};
use crate::core::ledger::EntryLedger;
use crate::errors::{AppError, AppResult};
use crate::models::{Duration, Meridiem, Totals};

#[derive(Debug, Clone, Default)]
pub struct Session {
    ledger: EntryLedger,
    mode: SpanMode,
}

impl Session {
    pub fn new(mode: SpanMode) -> Self {
        Self {
            ledger: EntryLedger::new(),
            mode,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.span_mode)
    }

    pub fn mode(&self) -> SpanMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: SpanMode) {
        self.mode = mode;
    }

    /// "add duration": normalize `text` and append it.
    pub fn add_duration(&mut self, text: &str) -> AppResult<Duration> {
        let duration: Duration = text.parse()?;
        self.ledger.append(duration);
        Ok(duration)
    }

    /// "add computed duration": duration between two clock readings.
    pub fn add_span(
        &mut self,
        start: &str,
        start_meridiem: Meridiem,
        end: &str,
        end_meridiem: Meridiem,
    ) -> AppResult<Duration> {
        let duration = calculate_span(start, start_meridiem, end, end_meridiem, self.mode)?;
        self.ledger.append(duration);
        Ok(duration)
    }

    /// Append several durations, all or nothing.
    pub fn add_durations<S: AsRef<str>>(&mut self, texts: &[S]) -> AppResult<usize> {
        let parsed = texts
            .iter()
            .map(|t| t.as_ref().parse::<Duration>())
            .collect::<AppResult<Vec<_>>>()?;
        let count = parsed.len();
        for d in parsed {
            self.ledger.append(d);
        }
        Ok(count)
    }

    /// Parse `"START MERIDIEM END MERIDIEM"` text such as `"9:00 AM 5:00 PM"`.
    /// A dash between the two readings is allowed (`"9:00 AM - 5:00 PM"`).
    pub fn add_span_text(&mut self, text: &str) -> AppResult<Duration> {
        let parts: Vec<&str> = text
            .split_whitespace()
            .filter(|p| *p != "-")
            .collect();

        let [start, start_m, end, end_m] = parts.as_slice() else {
            return Err(AppError::InvalidTime(text.to_string()));
        };

        let start_m: Meridiem = start_m.parse()?;
        let end_m: Meridiem = end_m.parse()?;
        self.add_span(start, start_m, end, end_m)
    }

    pub fn clear(&mut self) {
        self.ledger.clear();
    }

    pub fn entries(&self) -> &[Duration] {
        self.ledger.list()
    }

    pub fn ledger(&self) -> &EntryLedger {
        &self.ledger
    }

    pub fn totals(&self) -> Totals {
        aggregator::totals(&self.ledger)
    }
}
