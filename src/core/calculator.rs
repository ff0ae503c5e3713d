//! Duration between two 12-hour clock readings.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};
use crate::models::{ClockTime, Duration, Meridiem};
use crate::utils::time::{MINUTES_PER_DAY, minutes_between};

/// What to do when the end reading is earlier than the start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SpanMode {
    /// The end falls on the next day (night shifts).
    #[default]
    Overnight,
    /// Both readings are on the same day; an earlier end is rejected.
    SameDay,
}

impl SpanMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpanMode::Overnight => "overnight",
            SpanMode::SameDay => "same-day",
        }
    }
}

/// Overnight-wrapping duration from `start` to `end`, `None` when either
/// reading is not a valid clock time.
///
/// `9:00 AM → 5:00 PM` is `8:00`, `11:00 PM → 1:00 AM` is `2:00` and equal
/// readings give `0:00`.
pub fn calculate_duration(
    start: &str,
    start_meridiem: Meridiem,
    end: &str,
    end_meridiem: Meridiem,
) -> Option<Duration> {
    calculate_span(start, start_meridiem, end, end_meridiem, SpanMode::Overnight).ok()
}

/// Same as [`calculate_duration`] with an explicit [`SpanMode`] and the
/// rejection reason kept.
pub fn calculate_span(
    start: &str,
    start_meridiem: Meridiem,
    end: &str,
    end_meridiem: Meridiem,
    mode: SpanMode,
) -> AppResult<Duration> {
    let start_clock = ClockTime::parse(start).ok_or_else(|| AppError::InvalidTime(start.into()))?;
    let end_clock = ClockTime::parse(end).ok_or_else(|| AppError::InvalidTime(end.into()))?;

    let from = start_clock
        .to_naive_time(start_meridiem)
        .ok_or_else(|| AppError::InvalidTime(start.into()))?;
    let to = end_clock
        .to_naive_time(end_meridiem)
        .ok_or_else(|| AppError::InvalidTime(end.into()))?;

    let mut minutes = minutes_between(from, to);
    if minutes < 0 && mode == SpanMode::Overnight {
        minutes += MINUTES_PER_DAY;
    }

    let not_after = || AppError::EndNotAfterStart {
        start: format!("{start_clock} {start_meridiem}"),
        end: format!("{end_clock} {end_meridiem}"),
    };

    // Still negative only in same-day mode.
    let minutes = u32::try_from(minutes).map_err(|_| not_after())?;
    Ok(Duration::from_minutes(minutes))
}
