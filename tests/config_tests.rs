use hourtally::config::Config;
use hourtally::core::SpanMode;
use hourtally::errors::AppError;
use std::path::Path;

mod common;
use common::{setup_test_config, write_test_config};

#[test]
fn test_defaults() {
    let cfg = Config::default();
    assert_eq!(cfg.span_mode, SpanMode::Overnight);
    assert_eq!(cfg.decimal_places, 2);
}

#[test]
fn test_missing_file_gives_defaults() {
    let path = setup_test_config("cfg_missing");
    let cfg = Config::load(Some(Path::new(&path))).unwrap();
    assert_eq!(cfg, Config::default());
}

#[test]
fn test_partial_file_fills_in_defaults() {
    let path = write_test_config("cfg_partial", "span_mode: same-day\n");
    let cfg = Config::load(Some(Path::new(&path))).unwrap();
    assert_eq!(cfg.span_mode, SpanMode::SameDay);
    assert_eq!(cfg.decimal_places, 2);
}

#[test]
fn test_empty_file_is_valid() {
    assert_eq!(Config::from_yaml("  \n").unwrap(), Config::default());
}

#[test]
fn test_bad_values_are_errors() {
    assert!(matches!(
        Config::from_yaml("span_mode: sideways\n"),
        Err(AppError::ConfigParse(_))
    ));
    assert!(matches!(
        Config::from_yaml("decimal_places: 9\n"),
        Err(AppError::Config(_))
    ));
}

#[test]
fn test_write_and_reload() {
    let path = setup_test_config("cfg_roundtrip");
    let cfg = Config {
        span_mode: SpanMode::SameDay,
        decimal_places: 3,
    };
    cfg.write_to(Path::new(&path), false).unwrap();
    assert_eq!(Config::load(Some(Path::new(&path))).unwrap(), cfg);

    // Second write needs force
    assert!(Config::default().write_to(Path::new(&path), false).is_err());
    Config::default().write_to(Path::new(&path), true).unwrap();
    assert_eq!(
        Config::load(Some(Path::new(&path))).unwrap(),
        Config::default()
    );
}
