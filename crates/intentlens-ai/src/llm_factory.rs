use crate::llm_provider::*;
use crate::openai_compatible_provider::{OpenAICompatibleConfig, OpenAICompatibleProvider};
use anyhow::{anyhow, Result};
use intentlens_core::LLMConfig;
use secrecy::SecretString;
use std::sync::Arc;

/// Factory for creating LLM providers based on configuration
pub struct LLMProviderFactory;

impl LLMProviderFactory {
    /// Create a provider authenticated with `credential`.
    pub fn create(config: &LLMConfig, credential: SecretString) -> Result<Arc<dyn LLMProvider>> {
        let provider_name = config.provider.to_lowercase();

        match provider_name.as_str() {
            "deepseek" | "openai" | "openai-compatible" => {
                let base_url = config.base_url_or_default().ok_or_else(|| {
                    anyhow!(
                        "Base URL not found for provider {}. Set 'base_url' in the [llm] config",
                        provider_name
                    )
                })?;

                let compat_config = OpenAICompatibleConfig::new(
                    provider_name,
                    base_url,
                    config.model_or_default(),
                    config.timeout_secs,
                    credential,
                );

                Ok(Arc::new(OpenAICompatibleProvider::new(compat_config)?))
            }
            _ => Err(anyhow!(
                "Unsupported LLM provider: {}. Available providers: {}",
                provider_name,
                Self::supported_providers().join(", ")
            )),
        }
    }

    /// Generation parameters derived from configuration
    pub fn generation_config(config: &LLMConfig) -> GenerationConfig {
        GenerationConfig {
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            response_format: Some(ResponseFormat::JsonObject),
        }
    }

    pub fn supported_providers() -> Vec<&'static str> {
        vec!["deepseek", "openai", "openai-compatible"]
    }
}
