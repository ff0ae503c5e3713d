use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Session;
use crate::errors::AppResult;
use crate::ui::render::print_session;

/// Add one or more durations and print the resulting ledger.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { durations } = cmd {
        let mut session = Session::from_config(cfg);

        // All-or-nothing: the first bad duration aborts before any append
        session.add_durations(durations)?;

        print_session(&session, cfg.decimal_places);
    }

    Ok(())
}
