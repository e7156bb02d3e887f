use amarshop::config::{Config, ConfigError};
use std::path::PathBuf;
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, content).expect("Failed to write config");
    (dir, path)
}

/// Test that Config::default() produces the storefront defaults.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.server.bind_addr, "127.0.0.1:8080");
    assert_eq!(config.checkout.shipping_fee, 60);
    assert_eq!(config.checkout.payment_delay_ms, 2000);
    assert_eq!(config.checkout.default_city, "Dhaka");
    assert!(config.storage.dir.ends_with("amarshop"));
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("amarshop/config.toml"));
}

/// A missing file is not an error.
#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let (_dir, path) = write_config(
        r#"
[checkout]
payment_delay_ms = 0

[storage]
dir = "/var/lib/amarshop"
"#,
    );
    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.checkout.payment_delay_ms, 0);
    assert_eq!(config.checkout.shipping_fee, 60);
    assert_eq!(config.storage.dir, PathBuf::from("/var/lib/amarshop"));
    assert_eq!(config.server.bind_addr, "127.0.0.1:8080");
}

#[test]
fn test_malformed_toml_is_parse_error() {
    let (_dir, path) = write_config("[server\nbind_addr = ");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_invalid_bind_addr_fails_validation() {
    let (_dir, path) = write_config(
        r#"
[server]
bind_addr = "not-an-address"
"#,
    );
    let err = Config::load_from(&path).unwrap_err();
    match err {
        ConfigError::ValidationError { message } => {
            assert!(message.contains("not-an-address"))
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_excessive_payment_delay_fails_validation() {
    let mut config = Config::default();
    config.checkout.payment_delay_ms = 120_000;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_blank_default_city_fails_validation() {
    let mut config = Config::default();
    config.checkout.default_city = "  ".to_string();
    assert!(config.validate().is_err());
}
