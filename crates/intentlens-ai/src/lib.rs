pub mod keyword_generator;
pub mod llm_factory;
pub mod llm_provider;
pub mod mock_generator;
pub mod normalizer;
pub mod openai_compatible_provider;
pub mod orchestrator;
pub mod prompts;

pub use keyword_generator::{generate_via_model, KeywordGenerator};
pub use llm_factory::LLMProviderFactory;
pub use llm_provider::*;
pub use mock_generator::generate_mock;
pub use orchestrator::{
    distinct_markets, MarketOrchestrator, MarketProgress, MarketRequest, ProgressStage,
};
