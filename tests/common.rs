#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use hourtally::core::EntryLedger;
use hourtally::models::Duration;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ht() -> Command {
    cargo_bin_cmd!("hourtally")
}

/// Unique config path inside the system temp dir, removed if it already exists
pub fn setup_test_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_hourtally.conf", name));
    let cfg_path = path.to_string_lossy().to_string();
    fs::remove_file(&cfg_path).ok();
    cfg_path
}

/// Same as `setup_test_config` but with the given YAML written to it
pub fn write_test_config(name: &str, yaml: &str) -> String {
    let cfg_path = setup_test_config(name);
    fs::write(&cfg_path, yaml).expect("write test config");
    cfg_path
}

/// Ledger from duration strings, panicking on any invalid one
pub fn ledger_of(entries: &[&str]) -> EntryLedger {
    entries
        .iter()
        .map(|e| e.parse::<Duration>().expect("valid duration"))
        .collect()
}
