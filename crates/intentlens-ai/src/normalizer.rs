//! Validation and normalization of the model's keyword payload.
//!
//! Structural problems (unparseable text, missing `market_insight` or
//! `keywords`) are format errors. Per-record problems never are: text fields
//! fall back to empty strings and `popularity_score` is coerced and clamped
//! into `0..=100`, defaulting to 50.

use intentlens_core::{
    IntentLensError, KeywordRecord, MarketResult, Result, DEFAULT_POPULARITY, MAX_POPULARITY,
    MIN_POPULARITY,
};
use serde_json::{Map, Value};
use tracing::warn;

/// Characters of raw output quoted in a format error.
pub const EXCERPT_CHARS: usize = 200;

/// Parse raw model text into a validated [`MarketResult`].
pub fn parse_market_payload(raw: &str, country: &str, language: &str) -> Result<MarketResult> {
    let value: Value = serde_json::from_str(raw).map_err(|e| {
        IntentLensError::Format(format!(
            "Could not parse model response as JSON: {}. Raw response: {}",
            e,
            excerpt(raw, EXCERPT_CHARS)
        ))
    })?;

    normalize_payload(value, country, language)
}

/// Validate an already-parsed payload and normalize every keyword record.
pub fn normalize_payload(value: Value, country: &str, language: &str) -> Result<MarketResult> {
    let Value::Object(mut payload) = value else {
        return Err(IntentLensError::Format(
            "Model response is not a JSON object".to_string(),
        ));
    };

    if !payload.contains_key("market_insight") || !payload.contains_key("keywords") {
        return Err(IntentLensError::Format(
            "Model response is missing required fields (market_insight, keywords)".to_string(),
        ));
    }

    let market_insight = text_field(payload.get("market_insight"));

    let keywords = match payload.remove("keywords") {
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(IntentLensError::Format(format!(
                "Field 'keywords' must be an array, got {}",
                json_type(&other)
            )))
        }
        None => Vec::new(),
    };

    let keywords = keywords
        .into_iter()
        .enumerate()
        .filter_map(|(i, item)| match item {
            Value::Object(fields) => Some(normalize_record(&fields)),
            other => {
                warn!(
                    country,
                    index = i,
                    kind = json_type(&other),
                    "Skipping keyword entry that is not an object"
                );
                None
            }
        })
        .collect();

    Ok(MarketResult {
        country: country.to_string(),
        language: language.to_string(),
        market_insight,
        keywords,
    })
}

/// Build a [`KeywordRecord`] from one `keywords` entry. Never fails.
pub fn normalize_record(fields: &Map<String, Value>) -> KeywordRecord {
    KeywordRecord {
        native_term: text_field(fields.get("native_term")),
        english_translation: text_field(fields.get("english_translation")),
        intent_type: text_field(fields.get("intent_type")),
        popularity_score: normalize_popularity(fields.get("popularity_score")),
        rationale: text_field(fields.get("rationale")),
    }
}

/// Coerce a raw `popularity_score` into `0..=100`.
///
/// Integers clamp, floats truncate toward zero and clamp, numeric strings are
/// parsed the same way. Anything else (missing, null, bool, arrays, objects,
/// non-numeric text) yields [`DEFAULT_POPULARITY`].
pub fn normalize_popularity(value: Option<&Value>) -> u8 {
    let coerced = match value {
        Some(Value::Number(n)) => number_to_i64(n),
        Some(Value::String(s)) => parse_numeric(s),
        _ => None,
    };

    coerced
        .map(|n| n.clamp(MIN_POPULARITY, MAX_POPULARITY) as u8)
        .unwrap_or(DEFAULT_POPULARITY)
}

fn number_to_i64(n: &serde_json::Number) -> Option<i64> {
    if let Some(i) = n.as_i64() {
        return Some(i);
    }
    if n.as_u64().is_some() {
        // Larger than i64::MAX
        return Some(i64::MAX);
    }
    n.as_f64().and_then(truncate_f64)
}

fn parse_numeric(s: &str) -> Option<i64> {
    let s = s.trim();
    if let Ok(i) = s.parse::<i64>() {
        return Some(i);
    }
    s.parse::<f64>().ok().and_then(truncate_f64)
}

fn truncate_f64(f: f64) -> Option<i64> {
    if f.is_nan() {
        return None;
    }
    // `as` saturates at the i64 bounds, infinities included
    Some(f.trunc() as i64)
}

fn text_field(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// First `max_chars` characters of `raw`, cut on a char boundary.
pub fn excerpt(raw: &str, max_chars: usize) -> &str {
    match raw.char_indices().nth(max_chars) {
        Some((idx, _)) => &raw[..idx],
        None => raw,
    }
}
