//! Integration tests for configuration file loading.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use eduplatform::config::AppConfig;
use eduplatform_core::{EduError, Role};
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = AppConfig::from_file(&dir.path().join("absent.toml")).unwrap();

    assert_eq!(config, AppConfig::default());
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.dashboard.default_role, Role::Student);
}

#[test]
fn test_file_values_loaded() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[server]\nhost = \"0.0.0.0\"\nport = 9090\n\n[dashboard]\ndefault_role = \"admin\"\nviewer_name = \"Elena Kozlova\""
    )
    .unwrap();

    let config = AppConfig::from_file(file.path()).unwrap();

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.dashboard.default_role, Role::Admin);
    assert_eq!(config.dashboard.viewer_name, "Elena Kozlova");
}

#[test]
fn test_malformed_file_is_config_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[server\nport = ").unwrap();

    let result = AppConfig::from_file(file.path());

    assert!(matches!(result, Err(EduError::Config(_))));
}

#[test]
fn test_oversized_file_rejected() {
    let mut file = NamedTempFile::new().unwrap();
    let padding = "# padding\n".repeat(8 * 1024);
    file.write_all(padding.as_bytes()).unwrap();

    let result = AppConfig::from_file(file.path());

    assert!(matches!(result, Err(EduError::Config(_))));
}
