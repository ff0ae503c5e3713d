//! Interactive session over stdin.
//!
//! One command per line. Mutations re-render the whole ledger and total;
//! a rejected line prints the reason and leaves the ledger untouched.

use std::io::{self, BufRead, Write};

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{Session, SpanMode};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{Level, line};
use crate::ui::render::{entry_lines, render_session, total_lines};
use crate::utils::formatting::bold;

const HELP: &str = "\
Commands:
  add <H:MM>                       add a duration (minutes may exceed 59)
  <H:MM>                           same as add
  span <H:MM> <AM|PM> <H:MM> <AM|PM>  add the time between two clock readings
  clear                            remove every entry
  list                             show the entries
  total                            show the total hours
  mode [overnight|same-day]        show or change the span mode
  help                             show this help
  quit | exit                      leave the session";

/// What one input line asks for.
#[derive(Debug)]
enum Action {
    Mutated,
    Show(String),
    Quit,
    Nothing,
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Shell = cmd {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut session = Session::from_config(cfg);
        run(&mut session, stdin.lock(), stdout.lock(), cfg.decimal_places)?;
    }
    Ok(())
}

/// Drive a session from any line source. Returns when input ends or on `quit`.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    mut input: R,
    mut out: W,
    decimal_places: usize,
) -> AppResult<()> {
    writeln!(out, "{}", bold("hourtally: type 'help' for commands"))?;
    prompt(&mut out)?;

    let mut buf = Vec::new();

    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        // Undecodable bytes become U+FFFD and the line is rejected like any other typo
        let raw = String::from_utf8_lossy(&buf);

        match execute(session, raw.trim(), decimal_places) {
            Ok(Action::Mutated) => writeln!(out, "{}", render_session(session, decimal_places))?,
            Ok(Action::Show(text)) => writeln!(out, "{}", text)?,
            Ok(Action::Quit) => break,
            Ok(Action::Nothing) => {}
            Err(e) if e.is_user_input() => writeln!(out, "{}", line(Level::Error, e))?,
            Err(e) => return Err(e),
        }

        prompt(&mut out)?;
    }

    writeln!(out)?;
    Ok(())
}

fn prompt<W: Write>(out: &mut W) -> AppResult<()> {
    write!(out, "> ")?;
    out.flush()?;
    Ok(())
}

fn execute(session: &mut Session, input: &str, decimal_places: usize) -> AppResult<Action> {
    let mut words = input.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(Action::Nothing);
    };
    let rest: Vec<&str> = words.collect();

    match head.to_lowercase().as_str() {
        "add" => {
            let [text] = rest.as_slice() else {
                return Err(AppError::InvalidDuration(rest.join(" ")));
            };
            session.add_duration(text)?;
            Ok(Action::Mutated)
        }
        "span" => {
            session.add_span_text(&rest.join(" "))?;
            Ok(Action::Mutated)
        }
        "clear" => {
            session.clear();
            Ok(Action::Mutated)
        }
        "list" => {
            let lines = entry_lines(session.entries());
            if lines.is_empty() {
                Ok(Action::Show("No entries.".to_string()))
            } else {
                Ok(Action::Show(lines.join("\n")))
            }
        }
        "total" => Ok(Action::Show(
            total_lines(&session.totals(), decimal_places).join("\n"),
        )),
        "mode" => {
            if rest.len() > 1 {
                return Err(AppError::UnknownCommand(input.to_string()));
            }
            if let [name] = rest.as_slice() {
                let mode = match name.to_lowercase().as_str() {
                    "overnight" => SpanMode::Overnight,
                    "same-day" | "sameday" => SpanMode::SameDay,
                    _ => return Err(AppError::UnknownCommand(format!("mode {name}"))),
                };
                session.set_mode(mode);
            }
            Ok(Action::Show(format!("Span mode: {}", session.mode().as_str())))
        }
        "help" | "?" => Ok(Action::Show(HELP.to_string())),
        "quit" | "exit" => Ok(Action::Quit),
        // A bare duration behaves like pressing Enter in the duration field
        _ if rest.is_empty() && head.contains(':') => {
            session.add_duration(head)?;
            Ok(Action::Mutated)
        }
        _ => Err(AppError::UnknownCommand(input.to_string())),
    }
}
