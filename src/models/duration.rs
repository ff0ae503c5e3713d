use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::core::normalizer::normalize_duration;
use crate::errors::AppError;
use crate::utils::formatting::format_hm;

/// Elapsed time as whole hours + minutes.
///
/// Hours are unbounded (a normalized `23:125` is 25 hours), minutes are
/// always in `0..60`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Duration {
    hours: u32,
    minutes: u32,
}

impl Duration {
    /// Build a duration, folding any minutes >= 60 into the hours.
    /// Hours saturate at `u32::MAX`.
    pub fn new(hours: u32, minutes: u32) -> Self {
        Self {
            hours: hours.saturating_add(minutes / 60),
            minutes: minutes % 60,
        }
    }

    pub fn from_minutes(total: u32) -> Self {
        Self::new(0, total)
    }

    pub fn hours(&self) -> u32 {
        self.hours
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn total_minutes(&self) -> u64 {
        u64::from(self.hours) * 60 + u64::from(self.minutes)
    }

    /// `hours + minutes / 60`
    pub fn decimal_hours(&self) -> f64 {
        f64::from(self.hours) + f64::from(self.minutes) / 60.0
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_hm(u64::from(self.hours), u64::from(self.minutes)))
    }
}

impl FromStr for Duration {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        normalize_duration(s).ok_or_else(|| AppError::InvalidDuration(s.to_string()))
    }
}

impl Serialize for Duration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
