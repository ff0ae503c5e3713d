use serde::Serialize;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Session;
use crate::errors::AppResult;
use crate::models::{Duration, Totals};
use crate::ui::messages::warning;
use crate::ui::render::print_session;
use crate::utils::formatting::format_decimal_hours;

#[derive(Serialize)]
struct SumReport<'a> {
    entries: &'a [Duration],
    totals: Totals,
    /// Same precision as the "Total Hours: 6.33" line
    total_hours: String,
}

/// Durations first, then spans, each group in argument order.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Sum {
        durations,
        spans,
        mode,
        json,
    } = cmd
    {
        let mut session = Session::new(mode.unwrap_or(cfg.span_mode));

        session.add_durations(durations)?;
        for span in spans {
            session.add_span_text(span)?;
        }

        if *json {
            let totals = session.totals();
            let report = SumReport {
                entries: session.entries(),
                totals,
                total_hours: format_decimal_hours(totals.decimal_hours, cfg.decimal_places),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }

        if session.ledger().is_empty() {
            warning("No entries given.");
        }
        print_session(&session, cfg.decimal_places);
    }

    Ok(())
}
