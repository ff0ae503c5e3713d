//! Validation and parsing of `H:MM` text.
//!
//! Durations accept any two-digit minute count (`00:80` is fine, it gets
//! normalized later) while clock times must be real 12-hour readings.

use regex::Regex;
use std::sync::LazyLock;

/// Hours 0-23 (one or two digits), minutes exactly two digits, any value.
static DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([01]?[0-9]|2[0-3]):([0-9]{2})$").expect("duration pattern is valid")
});

/// Hours 1-12 (optional leading zero), minutes 00-59.
static TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(0?[1-9]|1[0-2]):([0-5][0-9])$").expect("time pattern is valid")
});

pub fn validate_duration(text: &str) -> bool {
    DURATION_RE.is_match(text)
}

pub fn validate_time(text: &str) -> bool {
    TIME_RE.is_match(text)
}

/// Raw (hours, minutes) of a duration, minutes not yet folded.
pub fn parse_duration(text: &str) -> Option<(u32, u32)> {
    split_captures(&DURATION_RE, text)
}

/// (hour, minute) of a 12-hour clock reading.
pub fn parse_time(text: &str) -> Option<(u32, u32)> {
    split_captures(&TIME_RE, text)
}

fn split_captures(re: &Regex, text: &str) -> Option<(u32, u32)> {
    let caps = re.captures(text)?;
    let hours = caps.get(1)?.as_str().parse().ok()?;
    let minutes = caps.get(2)?.as_str().parse().ok()?;
    Some((hours, minutes))
}
