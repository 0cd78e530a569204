//! Instructions sent to the model for one market.

/// System instructions: role, output schema, intent set and score calibration.
pub fn build_system_prompt(explanation_language: &str) -> String {
    format!(
        r#"You are an experienced local SEO specialist focusing on search intent and keyword strategies in target markets.

Your tasks are:
1. Analyze the search intent of English seed keywords in target markets
2. Generate localized keywords, not direct translations
3. Consider local consumer search habits, language conventions, and cultural background
4. Estimate the relative popularity of each keyword (based on your training data knowledge)
5. Return a response in strict JSON format

Required JSON format:
{{
  "market_insight": "A summary of the local market search landscape (in {lang})",
  "keywords": [
    {{
      "native_term": "Local keyword (in target language)",
      "english_translation": "English translation",
      "intent_type": "Primary" | "Synonym" | "Long-tail",
      "rationale": "Explanation of why this keyword was chosen (in {lang})",
      "popularity_score": integer (0-100)
    }}
  ]
}}

Important rules:
- intent_type must be one of: "Primary", "Synonym", or "Long-tail"
- Generate 5-8 high-quality keywords
- Cover different search intents: transactional, informational, navigational
- Do not directly translate; generate keywords based on search intent and local habits
- popularity_score rules:
  * popularity_score must be an integer from 0 to 100
  * 100 = extremely common head term (e.g., "Rasenmähroboter" in the German market should score 90-100)
  * 80-99 = very popular keywords
  * 60-79 = moderately popular keywords
  * 40-59 = less used keywords
  * 0-39 = very rare long-tail keywords
  * Common head terms score high, specific long-tail queries score low
- Write the "market_insight" and "rationale" fields strictly in {lang}, even when the keywords are in another language.
- Return the raw JSON object only. No Markdown, no ```json fences, no text before or after the object."#,
        lang = explanation_language
    )
}

/// User message naming the seed and the target market.
pub fn build_user_prompt(
    seed_keyword: &str,
    language: &str,
    country: &str,
    explanation_language: &str,
) -> String {
    format!(
        "Generate localized keywords for the following English seed keyword in the {country} ({language}) market:\n\n\
         Seed keyword: {seed_keyword}\n\n\
         Target market: {country}\n\
         Target language: {language}\n\n\
         Generate keywords based on search intent (not direct translation) and estimate popularity_score for each keyword. \
         Return results as pure JSON (no Markdown). All explanations must be in {explanation_language}."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_prompt_carries_schema_and_language() {
        let prompt = build_system_prompt("Chinese");
        assert!(prompt.contains("\"market_insight\""));
        assert!(prompt.contains("\"popularity_score\": integer (0-100)"));
        assert!(prompt.contains("\"Primary\" | \"Synonym\" | \"Long-tail\""));
        assert!(prompt.contains("Generate 5-8 high-quality keywords"));
        assert!(prompt.contains("strictly in Chinese"));
        assert!(!prompt.contains("{lang}"));
    }

    #[test]
    fn test_user_prompt_names_market() {
        let prompt = build_user_prompt("Robot Lawn Mower", "German", "Germany", "English");
        assert!(prompt.contains("Seed keyword: Robot Lawn Mower"));
        assert!(prompt.contains("Germany (German) market"));
        assert!(prompt.contains("Target language: German"));
        assert!(prompt.ends_with("must be in English."));
    }
}
