//! Persistence tests for the `CODE:RATE` rate file.

use std::fs;

use tempfile::{NamedTempFile, tempdir};
use valut_converter::rate_file::{load, save};
use valut_converter::{Converter, ExchangeRate, RateError, RateStore};

fn write_rates(contents: &str) -> NamedTempFile {
    let file = NamedTempFile::new().unwrap();
    fs::write(file.path(), contents).unwrap();
    file
}

#[test]
fn test_load_skips_malformed_lines() {
    let file = write_rates("USD:1.0\ngarbage-line\nEUR:0.9");
    let mut store = RateStore::new();

    let loaded = load(file.path(), &mut store).unwrap();

    assert_eq!(loaded, 2);
    assert_eq!(
        store.all(),
        vec![ExchangeRate::new("USD", 1.0), ExchangeRate::new("EUR", 0.9)]
    );
}

#[test]
fn test_load_normalizes_codes() {
    let file = write_rates("usd:1.0\nEur:0.9\n");
    let mut store = RateStore::new();
    load(file.path(), &mut store).unwrap();

    assert_eq!(store.lookup("USD").unwrap(), 1.0);
    assert_eq!(store.lookup("EUR").unwrap(), 0.9);
}

#[test]
fn test_load_fails_fast_on_bad_number() {
    let file = write_rates("USD:1.0\nJPY:notanumber\nEUR:0.9\n");
    let mut store = RateStore::new();

    let err = load(file.path(), &mut store).unwrap_err();

    assert!(matches!(err, RateError::InvalidNumberFormat { ref input, .. } if input == "notanumber"));
    assert_eq!(store.lookup("USD").unwrap(), 1.0);
    assert!(store.lookup("JPY").is_err());
    assert!(store.lookup("EUR").is_err());
}

#[test]
fn test_load_rejects_non_finite_rate() {
    let file = write_rates("USD:1.0\nXAU:NaN\n");
    let mut store = RateStore::new();

    let err = load(file.path(), &mut store).unwrap_err();

    assert!(matches!(err, RateError::InvalidNumberFormat { ref input, .. } if input == "NaN"));
    assert!(store.lookup("XAU").is_err());
}

#[test]
fn test_load_missing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.txt");
    let mut store = RateStore::new();

    let err = load(&path, &mut store).unwrap_err();

    assert!(matches!(err, RateError::FileNotFound(ref p) if *p == path));
    assert!(store.is_empty());
}

#[test]
fn test_save_writes_store_order() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rates.txt");
    let mut store = RateStore::new();
    store.upsert("USD", 1.0);
    store.upsert("eur", 0.9);
    store.upsert("JPY", 149.5);

    save(&path, &store).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "USD:1.0\nEUR:0.9\nJPY:149.5\n");
}

#[test]
fn test_save_truncates_existing_file() {
    let file = write_rates("OLD:1.0\nOLDER:2.0\nOLDEST:3.0\n");
    let mut store = RateStore::new();
    store.upsert("USD", 1.0);

    save(file.path(), &store).unwrap();

    assert_eq!(fs::read_to_string(file.path()).unwrap(), "USD:1.0\n");
}

#[test]
fn test_save_reports_io_failure() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("rates.txt");
    let mut store = RateStore::new();
    store.upsert("USD", 1.0);

    let err = save(&path, &store).unwrap_err();

    assert!(matches!(err, RateError::IoFailure { .. }));
}

#[test]
fn test_save_then_load_reproduces_store() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rates.txt");
    let mut original = RateStore::new();
    original.upsert("USD", 1.0);
    original.upsert("EUR", 0.9);
    original.upsert("JPY", 149.53);
    original.upsert("BTC", 1.0 / 67_000.0);
    original.upsert("IDR", 1.6e16);

    save(&path, &original).unwrap();
    let mut reloaded = RateStore::new();
    load(&path, &mut reloaded).unwrap();

    assert_eq!(reloaded.all(), original.all());
}

#[test]
fn test_loaded_rates_convert() {
    let file = write_rates("USD:1.0\nEUR:0.9\n");
    let mut store = RateStore::new();
    load(file.path(), &mut store).unwrap();

    let converter = Converter::new(&store);
    assert_eq!(converter.convert("USD", "EUR", 100.0).unwrap(), 90.0);
}
