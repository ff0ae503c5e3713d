pub mod formatting;
pub mod time;

pub use formatting::{format_decimal_hours, format_hm, hours_minutes_readable};
