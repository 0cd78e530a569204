use intentlens_cli::export::UTF8_BOM;
use intentlens_cli::{export_for_tier, rank_keywords, write_csv};
use intentlens_core::{AccessTier, AggregatedResult, IntentType, KeywordRecord, MarketResult};
use tempfile::TempDir;

fn sample() -> AggregatedResult {
    AggregatedResult::from(vec![
        MarketResult {
            country: "Germany".to_string(),
            language: "German".to_string(),
            market_insight: "Strong demand".to_string(),
            keywords: vec![
                KeywordRecord::new(
                    "Mähroboter kaufen",
                    "Buy robot lawn mower",
                    IntentType::LongTail,
                    80,
                    "Transactional, \"buy\" verb",
                ),
                KeywordRecord::new(
                    "Rasenmähroboter",
                    "Robot lawn mower",
                    IntentType::Primary,
                    95,
                    "Head term",
                ),
            ],
        },
        MarketResult {
            country: "Japan".to_string(),
            language: "Japanese".to_string(),
            market_insight: "Compact gardens".to_string(),
            keywords: vec![KeywordRecord::new(
                "ロボット芝刈り機",
                "Robot lawn mower",
                IntentType::Primary,
                88,
                "Category name",
            )],
        },
    ])
}

#[test]
fn test_csv_export_writes_ranked_rows_with_bom() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("out.csv");
    let rows = rank_keywords(&sample());

    let written = write_csv(
        &rows,
        Some(target.as_path()),
        "Robot Lawn Mower",
        &["Germany", "Japan"],
    )
    .unwrap();
    assert_eq!(written, target);

    let bytes = std::fs::read(&target).unwrap();
    assert!(bytes.starts_with(UTF8_BOM));

    let mut reader = csv::Reader::from_reader(&bytes[UTF8_BOM.len()..]);
    let headers = reader.headers().unwrap().clone();
    assert_eq!(&headers[0], "No.");
    assert_eq!(&headers[5], "AI Hotness");

    let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(records.len(), 3);
    assert_eq!(&records[0][0], "1");
    assert_eq!(&records[0][2], "Rasenmähroboter");
    assert_eq!(&records[1][1], "Japan");
    assert_eq!(&records[1][2], "ロボット芝刈り機");
    assert_eq!(&records[2][5], "80");
    assert_eq!(&records[2][6], "Transactional, \"buy\" verb");
}

#[test]
fn test_export_gate_writes_nothing_below_privileged() {
    let dir = TempDir::new().unwrap();
    let rows = rank_keywords(&sample());

    for tier in [AccessTier::Guest, AccessTier::Registered] {
        let target = dir.path().join(format!("{tier}.csv"));
        let written =
            export_for_tier(tier, &rows, Some(target.as_path()), "desk", &["Germany"]).unwrap();
        assert!(written.is_none());
        assert!(!target.exists());
    }
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_export_gate_writes_for_privileged() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("vip.csv");
    let rows = rank_keywords(&sample());

    let written = export_for_tier(
        AccessTier::Privileged,
        &rows,
        Some(target.as_path()),
        "desk",
        &["Germany", "Japan"],
    )
    .unwrap();
    assert_eq!(written.as_deref(), Some(target.as_path()));
    assert!(std::fs::read(&target).unwrap().starts_with(UTF8_BOM));
}
