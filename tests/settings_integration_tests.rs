//! Integration tests for SettingsLoader and settings file handling
//!
//! These tests verify:
//! - Layer priority: defaults < settings file < environment < overrides
//! - Explicit settings files
//! - Validation of the resolved names

use camino::Utf8PathBuf;
use file2string::config::SETTINGS_FILE_NAME;
use file2string::{Error, Settings, SettingsLoader, SettingsOverrides};
use std::fs;
use tempfile::TempDir;

fn create_test_dir() -> (TempDir, Utf8PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let dir = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
    (temp_dir, dir)
}

fn env(pairs: &[(&str, &str)]) -> config::Map<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_defaults_without_file_or_env() {
    let (_temp_dir, dir) = create_test_dir();
    let loader = SettingsLoader::new(&dir).with_environment(env(&[]));

    let settings = loader.resolve(&SettingsOverrides::default()).unwrap();

    assert_eq!(settings, Settings::default());
}

#[test]
fn test_environment_beats_settings_file() {
    let (_temp_dir, dir) = create_test_dir();
    fs::write(
        dir.join(SETTINGS_FILE_NAME),
        "pkg: fromfile\nvar: fromfile\noutput: file.go\n",
    )
    .unwrap();
    let loader = SettingsLoader::new(&dir).with_environment(env(&[
        ("FILE2STRING_VAR", "fromenv"),
        ("UNRELATED", "ignored"),
    ]));

    let settings = loader.resolve(&SettingsOverrides::default()).unwrap();

    assert_eq!(settings.package_name, "fromfile");
    assert_eq!(settings.variable_name, "fromenv");
    assert_eq!(settings.output_path, "file.go");
}

#[test]
fn test_overrides_beat_environment() {
    let (_temp_dir, dir) = create_test_dir();
    let loader = SettingsLoader::new(&dir).with_environment(env(&[
        ("FILE2STRING_PKG", "fromenv"),
        ("FILE2STRING_OUTPUT", "env.go"),
    ]));
    let overrides = SettingsOverrides {
        pkg: Some("fromflag".to_string()),
        ..Default::default()
    };

    let settings = loader.resolve(&overrides).unwrap();

    assert_eq!(settings.package_name, "fromflag");
    assert_eq!(settings.output_path, "env.go");
}

#[test]
fn test_explicit_settings_file() {
    let (_temp_dir, dir) = create_test_dir();
    let custom = dir.join("custom.yaml");
    fs::write(&custom, "var: embedded\n").unwrap();
    // The search directory file is ignored when an explicit file is given
    fs::write(dir.join(SETTINGS_FILE_NAME), "var: searched\n").unwrap();

    let loader = SettingsLoader::new(&dir)
        .with_settings_file(&custom)
        .with_environment(env(&[]));

    let settings = loader.resolve(&SettingsOverrides::default()).unwrap();
    assert_eq!(settings.variable_name, "embedded");
}

#[test]
fn test_malformed_settings_file() {
    let (_temp_dir, dir) = create_test_dir();
    fs::write(dir.join(SETTINGS_FILE_NAME), "pkg: [unclosed\n").unwrap();
    let loader = SettingsLoader::new(&dir).with_environment(env(&[]));

    let err = loader.resolve(&SettingsOverrides::default()).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
    assert!(!err.is_validation());
}

#[test]
fn test_invalid_variable_from_environment() {
    let (_temp_dir, dir) = create_test_dir();
    let loader =
        SettingsLoader::new(&dir).with_environment(env(&[("FILE2STRING_VAR", "1files")]));

    let err = loader.resolve(&SettingsOverrides::default()).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidIdentifier {
            kind: "variable",
            ..
        }
    ));
}
