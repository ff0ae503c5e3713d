use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Session;
use crate::errors::AppResult;
use crate::ui::render::print_session;

/// Duration between two clock times, printed as a one-entry ledger.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Span {
        start,
        start_meridiem,
        end,
        end_meridiem,
        mode,
    } = cmd
    {
        let mut session = Session::new(mode.unwrap_or(cfg.span_mode));
        session.add_span(start, *start_meridiem, end, *end_meridiem)?;
        print_session(&session, cfg.decimal_places);
    }

    Ok(())
}
