use crate::llm_factory::LLMProviderFactory;
use crate::llm_provider::{GenerationConfig, LLMProvider, Message};
use crate::normalizer::parse_market_payload;
use crate::prompts::{build_system_prompt, build_user_prompt};
use intentlens_core::{IntentLensError, LLMConfig, MarketResult, Result};
use secrecy::SecretString;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Asks a model for localized keywords for one market and validates the answer.
pub struct KeywordGenerator {
    provider: Arc<dyn LLMProvider>,
    generation: GenerationConfig,
}

impl KeywordGenerator {
    pub fn new(provider: Arc<dyn LLMProvider>, generation: GenerationConfig) -> Self {
        Self {
            provider,
            generation,
        }
    }

    /// One model round-trip for `country`. No retries.
    ///
    /// Transport and provider failures become [`IntentLensError::Generation`];
    /// unusable output becomes [`IntentLensError::Format`].
    pub async fn generate(
        &self,
        keyword: &str,
        language: &str,
        country: &str,
        explanation_language: &str,
    ) -> Result<MarketResult> {
        let messages = [
            Message::system(build_system_prompt(explanation_language)),
            Message::user(build_user_prompt(
                keyword,
                language,
                country,
                explanation_language,
            )),
        ];

        let start = Instant::now();
        let response = self
            .provider
            .generate_chat(&messages, &self.generation)
            .await
            .map_err(|e| IntentLensError::Generation(format!("{:#}", e)))?;

        info!(
            provider = %self.provider.provider_name(),
            model = %response.model,
            country,
            elapsed_ms = start.elapsed().as_millis() as u64,
            total_tokens = ?response.total_tokens,
            "Model response received"
        );
        debug!(country, content = %response.content, "Model output");

        parse_market_payload(&response.content, country, language)
    }
}

/// Build a provider from `config` with `credential` and generate keywords for one market.
pub async fn generate_via_model(
    config: &LLMConfig,
    credential: SecretString,
    keyword: &str,
    language: &str,
    country: &str,
    explanation_language: &str,
) -> Result<MarketResult> {
    let provider = LLMProviderFactory::create(config, credential)
        .map_err(|e| IntentLensError::Generation(format!("{:#}", e)))?;

    KeywordGenerator::new(provider, LLMProviderFactory::generation_config(config))
        .generate(keyword, language, country, explanation_language)
        .await
}
