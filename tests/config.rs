use lumen::config::Config;
use lumen::constants::{SIDEBAR_DEFAULT_WIDTH, TICK_INTERVAL_MS, TOAST_DEFAULT_MS};

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.ui.theme, "dark");
    assert_eq!(config.ui.sidebar_width, SIDEBAR_DEFAULT_WIDTH);
    assert_eq!(config.ui.tick_rate_ms, TICK_INTERVAL_MS);
    assert_eq!(config.toast.default_duration_ms, TOAST_DEFAULT_MS);
    assert!(!config.logging.enabled);
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Invalid sidebar width should fail
    config.ui.sidebar_width = 5;
    assert!(config.validate().is_err());

    // Reset and test invalid tick rate
    config.ui.sidebar_width = SIDEBAR_DEFAULT_WIDTH;
    config.ui.tick_rate_ms = 5000;
    assert!(config.validate().is_err());

    // Unknown theme that is not a file path should fail
    config.ui.tick_rate_ms = TICK_INTERVAL_MS;
    config.ui.theme = "no-such-preset".to_string();
    assert!(config.validate().is_err());

    // Logging enabled with no file should fail
    config.ui.theme = "light".to_string();
    config.logging.enabled = true;
    config.logging.file = String::new();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("theme = \"dark\""));
    assert!(toml_str.contains("tick_rate_ms = 100"));
}

#[test]
fn test_partial_config_deserialization() {
    // Partial TOML configs merge with defaults
    let partial_toml = r#"
[ui]
theme = "light"

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    assert_eq!(config.ui.theme, "light");
    assert!(config.logging.enabled);

    // Unspecified values use defaults
    assert_eq!(config.ui.sidebar_width, SIDEBAR_DEFAULT_WIDTH);
    assert_eq!(config.toast.error_duration_ms, Config::default().toast.error_duration_ms);
    assert_eq!(config.logging.file, "lumen-admin.log");
}

#[test]
fn test_empty_config_deserialization() {
    let config: Config = toml::from_str("").unwrap();
    let default_config = Config::default();

    assert_eq!(config.ui.theme, default_config.ui.theme);
    assert_eq!(config.ui.tick_rate_ms, default_config.ui.tick_rate_ms);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
}

#[test]
fn test_save_and_reload_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let mut config = Config::default();
    config.ui.theme = "light".to_string();
    config.ui.sidebar_width = 30;
    config.save_to_file(&path).unwrap();

    let reloaded = Config::load_from_file(&path).unwrap();
    assert_eq!(reloaded.ui.theme, "light");
    assert_eq!(reloaded.ui.sidebar_width, 30);
}

#[test]
fn test_generated_default_config_parses_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("generated.toml");

    Config::generate_default_config(&path).unwrap();

    let reloaded = Config::load_from_file(&path).unwrap();
    assert_eq!(reloaded.ui.theme, Config::default().ui.theme);
}
