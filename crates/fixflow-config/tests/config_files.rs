//! File-based configuration loading.

use std::fs;

use fixflow_config::{load_file, save_file, ConfigError, PricingConfig, Validate};
use tempfile::TempDir;

#[test]
fn load_toml_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fixflow.toml");
    fs::write(&path, "dv01_bump = 5e-5\ndefault_frequency = 4\n").unwrap();

    let config: PricingConfig = load_file(&path).unwrap();

    assert!((config.dv01_bump - 5e-5).abs() < f64::EPSILON);
    assert_eq!(config.default_frequency, 4);
    assert_eq!(config.max_iterations, 100);
}

#[test]
fn save_then_load_json_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fixflow.json");
    let config = PricingConfig::new().with_default_face(1000.0).with_initial_guess(0.06);

    save_file(&config, &path).unwrap();
    let loaded: PricingConfig = load_file(&path).unwrap();

    assert_eq!(loaded, config);
    assert!(loaded.is_valid());
}

#[test]
fn missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    let result: Result<PricingConfig, _> = load_file(&path);

    match result {
        Err(ConfigError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("Expected Io error, got {other:?}"),
    }
}

#[test]
fn invalid_file_reports_every_field() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "max_iterations = 0\ndv01_bump = -1.0\n").unwrap();

    let result: Result<PricingConfig, _> = load_file(&path);

    match result {
        Err(ConfigError::MultipleValidationErrors(errors)) => {
            let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
            assert_eq!(fields, vec!["max_iterations", "dv01_bump"]);
        }
        other => panic!("Expected validation errors, got {other:?}"),
    }
}
