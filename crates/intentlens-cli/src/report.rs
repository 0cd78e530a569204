use colored::Colorize;
use intentlens_core::AggregatedResult;
use serde::Serialize;
use tabled::settings::{object::Columns, Modify, Style, Width};
use tabled::{Table, Tabled};

/// Column headers, in display and export order.
pub const HEADERS: [&str; 7] = [
    "No.",
    "Country",
    "Local Keyword",
    "English Translation",
    "Intent Type",
    "AI Hotness",
    "Reasoning",
];

/// One keyword flattened with its market, ready for display or export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
pub struct RankedRow {
    #[tabled(rename = "No.")]
    #[serde(rename = "No.")]
    pub rank: usize,
    #[tabled(rename = "Country")]
    #[serde(rename = "Country")]
    pub country: String,
    #[tabled(rename = "Local Keyword")]
    #[serde(rename = "Local Keyword")]
    pub native_term: String,
    #[tabled(rename = "English Translation")]
    #[serde(rename = "English Translation")]
    pub english_translation: String,
    #[tabled(rename = "Intent Type")]
    #[serde(rename = "Intent Type")]
    pub intent_type: String,
    #[tabled(rename = "AI Hotness")]
    #[serde(rename = "AI Hotness")]
    pub popularity_score: u8,
    #[tabled(rename = "Reasoning")]
    #[serde(rename = "Reasoning")]
    pub rationale: String,
}

/// All keywords across markets, most popular first.
///
/// Ties keep generation order (market order, then keyword order).
pub fn rank_keywords(aggregate: &AggregatedResult) -> Vec<RankedRow> {
    let mut rows: Vec<RankedRow> = aggregate
        .iter()
        .flat_map(|market| {
            market.keywords.iter().map(move |kw| RankedRow {
                rank: 0,
                country: market.country.clone(),
                native_term: kw.native_term.clone(),
                english_translation: kw.english_translation.clone(),
                intent_type: kw.intent_type.clone(),
                popularity_score: kw.popularity_score,
                rationale: kw.rationale.clone(),
            })
        })
        .collect();

    rows.sort_by(|a, b| b.popularity_score.cmp(&a.popularity_score));
    for (i, row) in rows.iter_mut().enumerate() {
        row.rank = i + 1;
    }
    rows
}

pub fn render_table(rows: &[RankedRow]) -> String {
    Table::new(rows)
        .with(Style::modern())
        .with(Modify::new(Columns::last()).with(Width::wrap(60)))
        .to_string()
}

pub fn print_insights(aggregate: &AggregatedResult) {
    println!("{}", "Market Insights Summary".bold());
    for market in aggregate {
        println!(
            "\n{} {}",
            "📊".cyan(),
            format!("{} ({})", market.country, market.language).bold()
        );
        println!("   {}", market.market_insight);
    }
    println!();
}

pub fn print_report(aggregate: &AggregatedResult, rows: &[RankedRow]) {
    print_insights(aggregate);

    if rows.is_empty() {
        println!(
            "{}",
            "⚠️  No keywords generated. Please check API response format.".yellow()
        );
        return;
    }

    println!("{}", "Localized Keywords (All Markets)".bold());
    println!(
        "{}",
        "AI Hotness is a model-estimated relative popularity score (0-100), not real search volume."
            .dimmed()
    );
    println!("{}", render_table(rows));
    println!(
        "{} {} keywords covering {} markets",
        "Total:".bold(),
        rows.len(),
        aggregate.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use intentlens_core::{IntentType, KeywordRecord, MarketResult};

    fn market(country: &str, scores: &[u8]) -> MarketResult {
        MarketResult {
            country: country.to_string(),
            language: "English".to_string(),
            market_insight: format!("{country} insight"),
            keywords: scores
                .iter()
                .enumerate()
                .map(|(i, s)| {
                    KeywordRecord::new(format!("{country}-{i}"), "t", IntentType::Primary, *s, "r")
                })
                .collect(),
        }
    }

    #[test]
    fn test_rank_sorts_descending_and_numbers_rows() {
        let aggregate =
            AggregatedResult::from(vec![market("Ireland", &[40, 90]), market("Kenya", &[95, 10])]);
        let rows = rank_keywords(&aggregate);

        let order: Vec<&str> = rows.iter().map(|r| r.native_term.as_str()).collect();
        assert_eq!(order, vec!["Kenya-0", "Ireland-1", "Ireland-0", "Kenya-1"]);
        let ranks: Vec<usize> = rows.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4]);
        assert_eq!(rows[0].country, "Kenya");
    }

    #[test]
    fn test_rank_ties_keep_generation_order() {
        let aggregate =
            AggregatedResult::from(vec![market("Ghana", &[70, 70]), market("Zambia", &[70])]);
        let rows = rank_keywords(&aggregate);
        let order: Vec<&str> = rows.iter().map(|r| r.native_term.as_str()).collect();
        assert_eq!(order, vec!["Ghana-0", "Ghana-1", "Zambia-0"]);
    }

    #[test]
    fn test_same_term_in_two_markets_is_two_rows() {
        let mut a = market("Austria", &[80]);
        let mut b = market("Switzerland", &[60]);
        a.keywords[0].native_term = "Rasenmähroboter".to_string();
        b.keywords[0].native_term = "Rasenmähroboter".to_string();

        let rows = rank_keywords(&AggregatedResult::from(vec![a, b]));
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_table_has_headers() {
        let rows = rank_keywords(&AggregatedResult::from(vec![market("Chad", &[5])]));
        let table = render_table(&rows);
        for header in HEADERS {
            assert!(table.contains(header), "missing {header}");
        }
        assert!(table.contains("Chad-0"));
    }
}
