//! Deterministic stand-in results for running without a model credential.

use intentlens_core::{IntentType, KeywordRecord, MarketResult};

/// Schema-valid placeholder result for one market. Same inputs, same output; no I/O.
///
/// German-language markets get a fixed set of real-world German examples.
/// Every other language gets placeholders derived from the seed keyword.
pub fn generate_mock(keyword: &str, language: &str, country: &str) -> MarketResult {
    let keyword = keyword.trim();

    let keywords = if language.eq_ignore_ascii_case("German") {
        german_examples()
    } else {
        seed_placeholders(keyword, language)
    };

    MarketResult {
        country: country.to_string(),
        language: language.to_string(),
        market_insight: format!(
            "In the {country} market, searches related to '{keyword}' center on low-maintenance \
             equipment, smart-home solutions and sustainable living. Local shoppers lean on \
             long-tail queries and show strong interest in specifications and technical detail. \
             (Sample data: no API key was provided.)"
        ),
        keywords,
    }
}

fn german_examples() -> Vec<KeywordRecord> {
    vec![
        KeywordRecord::new(
            "Rasenmähroboter",
            "Robot lawn mower",
            IntentType::Primary,
            95,
            "The most common search term in the German market; names the product category directly",
        ),
        KeywordRecord::new(
            "automatischer Rasenmäher",
            "Automatic lawn mower",
            IntentType::Synonym,
            65,
            "Synonym variant with lower volume but strong relevance",
        ),
        KeywordRecord::new(
            "bester Rasenmähroboter 2024",
            "Best robot lawn mower 2024",
            IntentType::LongTail,
            75,
            "High purchase-intent long-tail term with a year and comparison intent",
        ),
        KeywordRecord::new(
            "Rasenmähroboter Test",
            "Robot lawn mower test/review",
            IntentType::LongTail,
            70,
            "Informational query from users researching product reviews",
        ),
        KeywordRecord::new(
            "Mähroboter kaufen",
            "Buy robot lawn mower",
            IntentType::LongTail,
            80,
            "Clear transactional intent with a purchase verb",
        ),
    ]
}

fn seed_placeholders(keyword: &str, language: &str) -> Vec<KeywordRecord> {
    let note = format!("Sample {language} placeholder; provide an API key for localized terms");
    let entry = |term: String, intent: IntentType, score: u8, why: &str| {
        KeywordRecord::new(term.clone(), term, intent, score, format!("{why}. {note}"))
    };

    vec![
        entry(keyword.to_string(), IntentType::Primary, 90, "Head term for the category"),
        entry(
            format!("{keyword} alternatives"),
            IntentType::Synonym,
            55,
            "Comparison wording around the seed",
        ),
        entry(
            format!("best {keyword}"),
            IntentType::LongTail,
            72,
            "Purchase research with comparison intent",
        ),
        entry(
            format!("{keyword} review"),
            IntentType::LongTail,
            68,
            "Informational query about product reviews",
        ),
        entry(
            format!("buy {keyword}"),
            IntentType::LongTail,
            78,
            "Transactional query with a purchase verb",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_german_market_uses_fixed_examples() {
        let result = generate_mock("Robot Lawn Mower", "German", "Germany");
        assert_eq!(result.country, "Germany");
        assert_eq!(result.language, "German");
        assert_eq!(result.keywords.len(), 5);
        assert_eq!(result.keywords[0].native_term, "Rasenmähroboter");
        assert_eq!(result.keywords[0].popularity_score, 95);
        assert!(result.market_insight.contains("Robot Lawn Mower"));
    }

    #[test]
    fn test_other_languages_derive_from_seed() {
        let result = generate_mock("  espresso machine ", "Japanese", "Japan");
        assert_eq!(result.keywords.len(), 5);
        assert_eq!(result.keywords[0].native_term, "espresso machine");
        assert_eq!(result.keywords[4].native_term, "buy espresso machine");
        assert!(result.keywords[1].rationale.contains("Japanese"));
        assert!(result.market_insight.contains("Japan market"));
    }

    #[test]
    fn test_mock_is_deterministic() {
        let a = generate_mock("standing desk", "French", "France");
        let b = generate_mock("standing desk", "French", "France");
        assert_eq!(a, b);

        let shape_a = serde_json::to_value(&a).unwrap();
        let shape_b = serde_json::to_value(generate_mock("x", "German", "Austria")).unwrap();
        let keys = |v: &serde_json::Value| {
            v["keywords"][0]
                .as_object()
                .unwrap()
                .keys()
                .cloned()
                .collect::<Vec<_>>()
        };
        assert_eq!(keys(&shape_a), keys(&shape_b));
    }

    #[test]
    fn test_mock_records_are_in_range_and_typed() {
        for language in ["German", "Spanish", "English"] {
            let result = generate_mock("solar panel", language, "Somewhere");
            assert!(!result.keywords.is_empty());
            for record in &result.keywords {
                assert!(record.popularity_score <= 100);
                assert!(record.intent().is_some());
            }
        }
    }
}
