//! hourtally library root.
//! Exposes the time-arithmetic core, the CLI parser and the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use tracing_subscriber::EnvFilter;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::Span { .. } => cli::commands::span::handle(&cli.command, cfg),
        Commands::Sum { .. } => cli::commands::sum::handle(&cli.command, cfg),
        Commands::Shell => cli::commands::shell::handle(&cli.command, cfg),
        Commands::Config { .. } => {
            cli::commands::config::handle(&cli.command, cfg, cli.config.as_deref())
        }
    }
}

/// Logs go to stderr; `--verbose` forces debug, otherwise RUST_LOG decides.
pub fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    // try_init: a second call (tests) is not an error
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let cfg = Config::load(cli.config.as_deref())?;

    dispatch(&cli, &cfg)
}
