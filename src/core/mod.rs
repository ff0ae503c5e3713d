pub mod aggregator;
pub mod calculator;
pub mod ledger;
pub mod normalizer;
pub mod parser;
pub mod session;

pub use aggregator::{decimal_to_hours_minutes, total_decimal_hours};
pub use calculator::{SpanMode, calculate_duration, calculate_span};
pub use ledger::EntryLedger;
pub use normalizer::normalize_duration;
pub use parser::{validate_duration, validate_time};
pub use session::Session;
