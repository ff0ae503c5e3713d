use crate::core::SpanMode;
use crate::models::Meridiem;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

/// Command-line interface definition for hourtally
/// Time-entry calculator: add durations or start/end times, get the total hours
#[derive(Parser)]
#[command(
    name = "hourtally",
    version = env!("CARGO_PKG_VERSION"),
    about = "A time-entry calculator: add durations or start/end clock times and get a running total of hours",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(global = true, long, short)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add one or more durations (H:MM or HH:MM, minutes may exceed 59)
    Add {
        /// Durations such as 5:00, 00:80 or 23:125
        #[arg(required = true, num_args = 1.., value_name = "DURATION")]
        durations: Vec<String>,
    },

    /// Compute the duration between two 12-hour clock times
    Span {
        /// Start time (H:MM, 1-12)
        start: String,

        /// Start meridiem (AM or PM)
        #[arg(value_parser = Meridiem::from_str)]
        start_meridiem: Meridiem,

        /// End time (H:MM, 1-12)
        end: String,

        /// End meridiem (AM or PM)
        #[arg(value_parser = Meridiem::from_str)]
        end_meridiem: Meridiem,

        /// Override the configured span mode
        #[arg(long = "mode", value_enum)]
        mode: Option<SpanMode>,
    },

    /// Sum durations and start/end spans into a single total
    Sum {
        /// Durations such as 5:00 or 00:80
        #[arg(value_name = "DURATION")]
        durations: Vec<String>,

        /// A start/end pair, e.g. --span "9:00 AM 5:00 PM" (repeatable)
        #[arg(long = "span", value_name = "SPAN")]
        spans: Vec<String>,

        /// Override the configured span mode
        #[arg(long = "mode", value_enum)]
        mode: Option<SpanMode>,

        /// Print entries and totals as JSON
        #[arg(long)]
        json: bool,
    },

    /// Interactive session: add entries one at a time and watch the total
    Shell,

    /// Show or create the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "path", help = "Print the configuration file location")]
        path: bool,

        #[arg(long = "init", help = "Write a configuration file with default values")]
        init: bool,

        #[arg(long, short = 'f', requires = "init", help = "Overwrite an existing file")]
        force: bool,
    },
}
