use intentlens_core::{AccessTier, ConfigError, ConfigManager, IntentLensConfig, InterfaceLanguage};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[llm]
provider = "openai-compatible"
base_url = "http://localhost:1234/v1/"
model = "qwen2.5-7b-instruct"
timeout_secs = 30

[session]
interface_language = "Chinese"
tier = "registered"

[logging]
level = "info"
"#,
    )
    .unwrap();

    let manager = ConfigManager::load_from(&path).unwrap();
    let config = manager.config();

    assert_eq!(manager.config_path(), Some(path.as_path()));
    assert_eq!(config.llm.model_or_default(), "qwen2.5-7b-instruct");
    assert_eq!(
        config.llm.base_url_or_default().as_deref(),
        Some("http://localhost:1234/v1")
    );
    assert_eq!(config.llm.timeout_secs, 30);
    assert_eq!(config.session.interface_language, InterfaceLanguage::Chinese);
    assert_eq!(config.session.tier, AccessTier::Registered);
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.format, "pretty");
}

#[test]
fn test_missing_file_is_not_found() {
    let dir = TempDir::new().unwrap();
    let result = ConfigManager::load_from(&dir.path().join("nope.toml"));
    assert!(matches!(result, Err(ConfigError::NotFound(_))));
}

#[test]
fn test_malformed_file_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[llm\nprovider = ").unwrap();

    let result = ConfigManager::load_from(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn test_invalid_values_fail_validation() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("invalid.toml");
    fs::write(&path, "[logging]\nlevel = \"loud\"\n").unwrap();

    let result = ConfigManager::load_from(&path);
    assert!(matches!(result, Err(ConfigError::ValidationError(_))));
}

#[test]
fn test_default_config_round_trips_through_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    ConfigManager::create_default_config(&path).unwrap();
    let content = fs::read_to_string(&path).unwrap();
    let parsed: IntentLensConfig = toml::from_str(&content).unwrap();

    assert_eq!(parsed.llm.provider, "deepseek");
    assert_eq!(parsed.llm.temperature, 0.7);
    assert_eq!(parsed.session.tier, AccessTier::Privileged);
    assert!(ConfigManager::validate_config(&parsed).is_ok());
}
