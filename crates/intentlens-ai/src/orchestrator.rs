use crate::keyword_generator::KeywordGenerator;
use crate::llm_factory::LLMProviderFactory;
use crate::llm_provider::{GenerationConfig, LLMProvider};
use crate::mock_generator::generate_mock;
use intentlens_core::{
    AggregatedResult, IntentLensError, InterfaceLanguage, LLMConfig, MarketRegistry, Result,
};
use secrecy::{ExposeSecret, SecretString};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{info, warn};

/// Builds an authenticated provider from a credential.
pub type ProviderBuilder =
    Arc<dyn Fn(SecretString) -> anyhow::Result<Arc<dyn LLMProvider>> + Send + Sync>;

/// One end-to-end keyword request.
#[derive(Debug)]
pub struct MarketRequest {
    pub seed_keyword: String,
    /// Countries in the order results should come back
    pub markets: Vec<String>,
    /// Blank or absent means mock data
    pub credential: Option<SecretString>,
    pub interface_language: InterfaceLanguage,
}

impl MarketRequest {
    pub fn new<I, S>(seed_keyword: impl Into<String>, markets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            seed_keyword: seed_keyword.into(),
            markets: markets.into_iter().map(Into::into).collect(),
            credential: None,
            interface_language: InterfaceLanguage::default(),
        }
    }

    pub fn with_credential(mut self, credential: impl Into<String>) -> Self {
        self.credential = Some(SecretString::from(credential.into()));
        self
    }

    pub fn with_interface_language(mut self, language: InterfaceLanguage) -> Self {
        self.interface_language = language;
        self
    }

    fn usable_credential(&self) -> Option<&str> {
        self.credential
            .as_ref()
            .map(|c| c.expose_secret().trim())
            .filter(|c| !c.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressStage {
    Started,
    Completed,
}

/// Progress notification for one market.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketProgress {
    pub stage: ProgressStage,
    /// 1-based position of the market in the run
    pub position: usize,
    pub total: usize,
    pub country: String,
    pub language: String,
}

impl MarketProgress {
    /// Share of the run finished at this point, in `0.0..=1.0`.
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        let done = match self.stage {
            ProgressStage::Started => self.position - 1,
            ProgressStage::Completed => self.position,
        };
        done as f64 / self.total as f64
    }
}

/// Runs keyword generation across markets, one market at a time.
pub struct MarketOrchestrator {
    registry: MarketRegistry,
    generation: GenerationConfig,
    provider_builder: ProviderBuilder,
}

impl MarketOrchestrator {
    /// Orchestrator whose model calls go through [`LLMProviderFactory`].
    pub fn new(registry: MarketRegistry, llm_config: &LLMConfig) -> Self {
        let config = llm_config.clone();
        let builder: ProviderBuilder =
            Arc::new(move |credential| LLMProviderFactory::create(&config, credential));
        Self {
            registry,
            generation: LLMProviderFactory::generation_config(llm_config),
            provider_builder: builder,
        }
    }

    /// Orchestrator with a custom provider constructor.
    pub fn with_provider_builder(
        registry: MarketRegistry,
        generation: GenerationConfig,
        provider_builder: ProviderBuilder,
    ) -> Self {
        Self {
            registry,
            generation,
            provider_builder,
        }
    }

    pub async fn run(&self, request: &MarketRequest) -> Result<AggregatedResult> {
        self.run_with_progress(request, &mut |_: &MarketProgress| {})
            .await
    }

    /// Generate keywords for every requested market, in request order.
    ///
    /// Fails fast: the first market that errors aborts the run and nothing
    /// collected so far is returned. Repeated countries are processed once.
    pub async fn run_with_progress(
        &self,
        request: &MarketRequest,
        on_progress: &mut (dyn FnMut(&MarketProgress) + Send),
    ) -> Result<AggregatedResult> {
        let seed = request.seed_keyword.trim();
        if seed.is_empty() {
            return Err(IntentLensError::InvalidRequest(
                "seed keyword must not be blank".to_string(),
            ));
        }

        let markets = distinct_markets(&request.markets);
        if markets.is_empty() {
            return Err(IntentLensError::InvalidRequest(
                "at least one target market is required".to_string(),
            ));
        }
        if markets.len() < request.markets.len() {
            warn!(
                requested = request.markets.len(),
                distinct = markets.len(),
                "Ignoring repeated markets"
            );
        }

        let explanation_language = request.interface_language.explanation_language();

        let generator = match request.usable_credential() {
            Some(credential) => {
                let provider = (self.provider_builder)(SecretString::from(credential.to_string()))
                    .map_err(|e| IntentLensError::Generation(format!("{:#}", e)))?;
                Some(KeywordGenerator::new(provider, self.generation.clone()))
            }
            None => {
                info!("No API key provided, using mock data");
                None
            }
        };

        let total = markets.len();
        let mut aggregate = AggregatedResult::new();

        for (idx, country) in markets.into_iter().enumerate() {
            let language = self.registry.resolve(country).to_string();
            let mut progress = MarketProgress {
                stage: ProgressStage::Started,
                position: idx + 1,
                total,
                country: country.to_string(),
                language: language.clone(),
            };
            on_progress(&progress);

            info!(country, language = %language, position = idx + 1, total, "Processing market");

            let result = match &generator {
                Some(generator) => {
                    generator
                        .generate(seed, &language, country, explanation_language)
                        .await?
                }
                None => generate_mock(seed, &language, country),
            };

            aggregate.push(result);

            progress.stage = ProgressStage::Completed;
            on_progress(&progress);
        }

        info!(
            markets = aggregate.len(),
            keywords = aggregate.keyword_count(),
            "All markets processed"
        );

        Ok(aggregate)
    }
}

/// Requested countries with repeats removed, first occurrence kept.
///
/// This is the list a run actually processes, so callers enforcing per-run
/// limits should count it rather than the raw request.
pub fn distinct_markets<S: AsRef<str>>(markets: &[S]) -> Vec<&str> {
    let mut seen = HashSet::new();
    markets
        .iter()
        .map(AsRef::as_ref)
        .filter(|country| seen.insert(*country))
        .collect()
}
