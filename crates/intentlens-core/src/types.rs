use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lower bound of the popularity scale.
pub const MIN_POPULARITY: i64 = 0;
/// Upper bound of the popularity scale.
pub const MAX_POPULARITY: i64 = 100;
/// Score assigned when the model gives none, or nothing usable.
pub const DEFAULT_POPULARITY: u8 = 50;

/// Search purpose classification requested from the model.
///
/// Model output is not forced into this set: [`KeywordRecord::intent_type`]
/// keeps whatever string came back, and [`KeywordRecord::intent`] maps it here
/// when it matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntentType {
    Primary,
    Synonym,
    #[serde(rename = "Long-tail")]
    LongTail,
}

impl IntentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            IntentType::Primary => "Primary",
            IntentType::Synonym => "Synonym",
            IntentType::LongTail => "Long-tail",
        }
    }
}

impl fmt::Display for IntentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IntentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "primary" => Ok(IntentType::Primary),
            "synonym" => Ok(IntentType::Synonym),
            "long-tail" | "longtail" | "long tail" => Ok(IntentType::LongTail),
            other => Err(format!("Unknown intent type: {}", other)),
        }
    }
}

/// One localized keyword for a market.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRecord {
    /// Keyword in the target language
    pub native_term: String,
    pub english_translation: String,
    /// Expected to be "Primary", "Synonym" or "Long-tail"; kept as returned
    pub intent_type: String,
    /// Always within 0..=100
    pub popularity_score: u8,
    pub rationale: String,
}

impl KeywordRecord {
    pub fn new(
        native_term: impl Into<String>,
        english_translation: impl Into<String>,
        intent_type: IntentType,
        popularity_score: u8,
        rationale: impl Into<String>,
    ) -> Self {
        Self {
            native_term: native_term.into(),
            english_translation: english_translation.into(),
            intent_type: intent_type.as_str().to_string(),
            popularity_score: popularity_score.min(MAX_POPULARITY as u8),
            rationale: rationale.into(),
        }
    }

    /// The intent as a known category, if the model used one.
    pub fn intent(&self) -> Option<IntentType> {
        self.intent_type.parse().ok()
    }
}

/// Keywords and insight generated for a single market.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketResult {
    pub country: String,
    pub language: String,
    pub market_insight: String,
    /// Generation order, not ranked
    pub keywords: Vec<KeywordRecord>,
}

/// Output of one orchestrator run: one entry per requested market, in request order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AggregatedResult {
    markets: Vec<MarketResult>,
}

impl AggregatedResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, result: MarketResult) {
        self.markets.push(result);
    }

    pub fn markets(&self) -> &[MarketResult] {
        &self.markets
    }

    pub fn len(&self) -> usize {
        self.markets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markets.is_empty()
    }

    pub fn countries(&self) -> Vec<&str> {
        self.markets.iter().map(|m| m.country.as_str()).collect()
    }

    /// Total keywords across all markets. Duplicates across markets are counted separately.
    pub fn keyword_count(&self) -> usize {
        self.markets.iter().map(|m| m.keywords.len()).sum()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MarketResult> {
        self.markets.iter()
    }
}

impl From<Vec<MarketResult>> for AggregatedResult {
    fn from(markets: Vec<MarketResult>) -> Self {
        Self { markets }
    }
}

impl<'a> IntoIterator for &'a AggregatedResult {
    type Item = &'a MarketResult;
    type IntoIter = std::slice::Iter<'a, MarketResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.markets.iter()
    }
}
