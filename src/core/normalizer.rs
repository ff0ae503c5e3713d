use crate::core::parser::parse_duration;
use crate::models::Duration;

/// Validate a raw duration and fold excess minutes into hours.
///
/// `00:80` → `1:20`, `23:125` → `25:05`. Hours are never wrapped at 24.
/// Returns `None` when `validate_duration` rejects the text.
pub fn normalize_duration(text: &str) -> Option<Duration> {
    let (hours, minutes) = parse_duration(text)?;
    Some(Duration::new(hours, minutes))
}
