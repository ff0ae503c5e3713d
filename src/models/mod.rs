pub mod clock_time;
pub mod duration;
pub mod totals;

pub use clock_time::{ClockTime, Meridiem};
pub use duration::Duration;
pub use totals::Totals;
