use crate::session::{AccessTier, InterfaceLanguage, SessionContext};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

pub const DEEPSEEK_BASE_URL: &str = "https://api.deepseek.com";
pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(String),

    #[error("Failed to read config: {0}")]
    ReadError(String),

    #[error("Failed to parse config: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Main configuration for IntentLens
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct IntentLensConfig {
    /// Model provider used when a credential is present
    #[serde(default)]
    pub llm: LLMConfig,

    /// Interface language and access tier
    #[serde(default)]
    pub session: SessionContext,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// LLM configuration for keyword generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LLMConfig {
    /// Provider: "deepseek", "openai" or "openai-compatible"
    #[serde(default = "default_llm_provider")]
    pub provider: String,

    /// Model identifier. Defaults per provider ("deepseek-chat" for DeepSeek)
    #[serde(default)]
    pub model: Option<String>,

    /// API base URL. Required for "openai-compatible", optional otherwise
    #[serde(default)]
    pub base_url: Option<String>,

    /// API key. Leave unset to run on mock data
    #[serde(default)]
    pub api_key: Option<String>,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum tokens to generate
    #[serde(default)]
    pub max_tokens: Option<usize>,
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            provider: default_llm_provider(),
            model: None,
            base_url: None,
            api_key: None,
            temperature: default_temperature(),
            timeout_secs: default_timeout_secs(),
            max_tokens: None,
        }
    }
}

impl LLMConfig {
    /// Configured model, or the provider's default.
    pub fn model_or_default(&self) -> String {
        if let Some(model) = self.model.as_ref().filter(|m| !m.trim().is_empty()) {
            return model.clone();
        }
        match self.provider.to_lowercase().as_str() {
            "openai" => "gpt-4o-mini".to_string(),
            _ => "deepseek-chat".to_string(),
        }
    }

    /// Configured base URL, or the provider's public endpoint.
    pub fn base_url_or_default(&self) -> Option<String> {
        if let Some(url) = self.base_url.as_ref().filter(|u| !u.trim().is_empty()) {
            return Some(url.trim_end_matches('/').to_string());
        }
        match self.provider.to_lowercase().as_str() {
            "deepseek" => Some(DEEPSEEK_BASE_URL.to_string()),
            "openai" => Some(OPENAI_BASE_URL.to_string()),
            _ => None,
        }
    }

    /// The configured key, if it is not blank.
    pub fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: "pretty", "json", "compact"
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_llm_provider() -> String {
    "deepseek".to_string()
}
fn default_temperature() -> f32 {
    0.7
}
fn default_timeout_secs() -> u64 {
    120
}
// Keep the progress bar readable
fn default_log_level() -> String {
    "warn".to_string()
}
fn default_log_format() -> String {
    "pretty".to_string()
}

/// Configuration manager with smart defaults
pub struct ConfigManager {
    config: IntentLensConfig,
    config_path: Option<PathBuf>,
}

impl ConfigManager {
    /// Load configuration with the following precedence:
    /// 1. Environment variables (.env file)
    /// 2. Config file (.intentlens.toml)
    /// 3. Sensible defaults
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_dotenv();
        let (config, config_path) = Self::load_config_file()?;
        Self::finish(config, config_path)
    }

    /// Load with an explicit config file instead of the search path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::load_dotenv();
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let config = Self::read_toml_file(path)?;
        Self::finish(config, Some(path.to_path_buf()))
    }

    fn finish(
        config: IntentLensConfig,
        config_path: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let config = Self::apply_env_overrides(config, |key| std::env::var(key).ok());
        Self::validate_config(&config)?;

        info!("Configuration loaded");
        match config_path {
            Some(ref path) => info!(path = %path.display(), "Config file"),
            None => info!("Config file: none (using defaults)"),
        }
        info!(
            provider = %config.llm.provider,
            model = %config.llm.model_or_default(),
            credential = config.llm.credential().is_some(),
            "LLM settings"
        );

        Ok(Self {
            config,
            config_path,
        })
    }

    /// Load .env file if it exists
    fn load_dotenv() {
        if Path::new(".env").exists() {
            if let Err(e) = dotenv::from_filename(".env") {
                warn!("Failed to load .env file: {}", e);
            } else {
                info!("Loaded .env file from current directory");
            }
            return;
        }

        if let Some(home) = dirs::home_dir() {
            let home_env = home.join(".intentlens.env");
            if home_env.exists() {
                if let Err(e) = dotenv::from_path(&home_env) {
                    warn!("Failed to load .intentlens.env: {}", e);
                } else {
                    info!("Loaded .intentlens.env from home directory");
                }
            }
        }
    }

    /// Find and load config file
    /// Search order:
    /// 1. ./.intentlens.toml (current directory)
    /// 2. ~/.intentlens/config.toml (user config)
    /// 3. Use defaults
    fn load_config_file() -> Result<(IntentLensConfig, Option<PathBuf>), ConfigError> {
        let local_config = Path::new(".intentlens.toml");
        if local_config.exists() {
            let config = Self::read_toml_file(local_config)?;
            return Ok((config, Some(local_config.to_path_buf())));
        }

        if let Some(user_config) = Self::user_config_path() {
            if user_config.exists() {
                let config = Self::read_toml_file(&user_config)?;
                return Ok((config, Some(user_config)));
            }
        }

        info!("No config file found, using defaults");
        Ok((IntentLensConfig::default(), None))
    }

    /// `~/.intentlens/config.toml`
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".intentlens").join("config.toml"))
    }

    fn read_toml_file(path: &Path) -> Result<IntentLensConfig, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Apply environment variable overrides read through `var`.
    pub fn apply_env_overrides<F>(mut config: IntentLensConfig, var: F) -> IntentLensConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(provider) = var("INTENTLENS_LLM_PROVIDER") {
            config.llm.provider = provider;
        }
        if let Some(model) = var("INTENTLENS_MODEL") {
            config.llm.model = Some(model);
        }
        if let Some(url) = var("INTENTLENS_BASE_URL") {
            config.llm.base_url = Some(url);
        }
        if let Some(temp) = var("INTENTLENS_TEMPERATURE") {
            match temp.parse() {
                Ok(t) => config.llm.temperature = t,
                Err(_) => warn!("Ignoring INTENTLENS_TEMPERATURE={}: not a number", temp),
            }
        }
        if let Some(timeout) = var("INTENTLENS_TIMEOUT_SECS") {
            if let Ok(secs) = timeout.parse() {
                config.llm.timeout_secs = secs;
            }
        }

        let key_var = match config.llm.provider.to_lowercase().as_str() {
            "openai" => "OPENAI_API_KEY",
            _ => "DEEPSEEK_API_KEY",
        };
        if let Some(key) = var(key_var) {
            config.llm.api_key = Some(key);
        }

        if let Some(lang) = var("INTENTLENS_INTERFACE_LANGUAGE") {
            match lang.parse::<InterfaceLanguage>() {
                Ok(lang) => config.session.interface_language = lang,
                Err(e) => warn!("Ignoring INTENTLENS_INTERFACE_LANGUAGE: {}", e),
            }
        }
        if let Some(tier) = var("INTENTLENS_TIER") {
            match tier.parse::<AccessTier>() {
                Ok(tier) => config.session.tier = tier,
                Err(e) => warn!("Ignoring INTENTLENS_TIER: {}", e),
            }
        }

        config
    }

    /// Validate configuration
    pub fn validate_config(config: &IntentLensConfig) -> Result<(), ConfigError> {
        match config.llm.provider.to_lowercase().as_str() {
            "deepseek" | "openai" => {}
            "openai-compatible" => {
                if config.llm.base_url_or_default().is_none() {
                    return Err(ConfigError::ValidationError(
                        "llm.base_url is required for the openai-compatible provider".to_string(),
                    ));
                }
            }
            other => {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid LLM provider: {}. Must be one of: deepseek, openai, openai-compatible",
                    other
                )))
            }
        }

        if !(0.0..=2.0).contains(&config.llm.temperature) {
            return Err(ConfigError::ValidationError(format!(
                "Invalid temperature: {}. Must be between 0.0 and 2.0",
                config.llm.temperature
            )));
        }

        if config.llm.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "llm.timeout_secs must be greater than 0".to_string(),
            ));
        }

        match config.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                    other
                )))
            }
        }

        match config.logging.format.as_str() {
            "pretty" | "compact" | "json" => {}
            other => {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid log format: {}. Must be one of: pretty, compact, json",
                    other
                )))
            }
        }

        Ok(())
    }

    /// Get the loaded configuration
    pub fn config(&self) -> &IntentLensConfig {
        &self.config
    }

    pub fn into_config(self) -> IntentLensConfig {
        self.config
    }

    /// Get the path to the config file that was loaded, if any
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Create a default config file
    pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
        let config = IntentLensConfig::default();
        let toml_str =
            toml::to_string_pretty(&config).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::ReadError(e.to_string()))?;
        }

        std::fs::write(path, toml_str).map_err(|e| ConfigError::ReadError(e.to_string()))?;

        Ok(())
    }
}
