use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config, custom: Option<&Path>) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        path,
        init,
        force,
    } = cmd
    {
        let file = Config::resolve_path(custom);

        if *path {
            println!("{}", file.display());
        }

        if *init {
            Config::default().write_to(&file, *force)?;
            success(format!("Config file: {}", file.display()));
        }

        if *print_config {
            print!("{}", cfg.to_yaml()?);
        }

        if !*path && !*init && !*print_config {
            info("Nothing to do: use --print, --path or --init.");
        }
    }

    Ok(())
}
