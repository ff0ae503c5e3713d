use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::core::parser;
use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    pub fn as_str(&self) -> &'static str {
        match self {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        }
    }

    /// Case-insensitive, accepts `AM`/`PM` with or without dots (`a.m.`).
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().replace('.', "").to_uppercase().as_str() {
            "AM" => Some(Meridiem::Am),
            "PM" => Some(Meridiem::Pm),
            _ => None,
        }
    }
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Meridiem {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Meridiem::from_code(s).ok_or_else(|| AppError::InvalidMeridiem(s.to_string()))
    }
}

/// A 12-hour wall-clock reading (`hour` in 1..=12, `minute` in 0..=59).
/// The meridiem travels next to it, the same way the two UI fields do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    hour: u32,
    minute: u32,
}

impl ClockTime {
    /// Parse `H:MM` / `HH:MM`; `None` if `validate_time` rejects the text.
    pub fn parse(text: &str) -> Option<Self> {
        let (hour, minute) = parser::parse_time(text)?;
        Some(Self { hour, minute })
    }

    /// 12-hour → 24-hour: 12 AM is midnight, 12 PM is noon.
    pub fn hour_24(&self, meridiem: Meridiem) -> u32 {
        match (meridiem, self.hour) {
            (Meridiem::Am, 12) => 0,
            (Meridiem::Am, h) => h,
            (Meridiem::Pm, 12) => 12,
            (Meridiem::Pm, h) => h + 12,
        }
    }

    /// Minutes elapsed since midnight.
    pub fn minutes_since_midnight(&self, meridiem: Meridiem) -> u32 {
        self.hour_24(meridiem) * 60 + self.minute
    }

    pub fn to_naive_time(&self, meridiem: Meridiem) -> Option<chrono::NaiveTime> {
        chrono::NaiveTime::from_hms_opt(self.hour_24(meridiem), self.minute, 0)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hour, self.minute)
    }
}
