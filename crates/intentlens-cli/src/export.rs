//! CSV export of ranked keyword rows.

use crate::report::{RankedRow, HEADERS};
use anyhow::{Context, Result};
use intentlens_core::AccessTier;
use std::path::{Path, PathBuf};

/// Byte-order mark so spreadsheet tools pick up UTF-8.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Markets spelled out in the default filename before the rest are counted.
const NAMED_MARKETS: usize = 3;

/// Default export filename, e.g. `Robot Lawn Mower_Japan_Germany_France_and_2_more_keywords.csv`.
pub fn export_filename<S: AsRef<str>>(seed: &str, markets: &[S]) -> String {
    let seed: String = seed
        .trim()
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();

    let mut countries = markets
        .iter()
        .take(NAMED_MARKETS)
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join("_");
    if markets.len() > NAMED_MARKETS {
        countries.push_str(&format!("_and_{}_more", markets.len() - NAMED_MARKETS));
    }

    format!("{}_{}_keywords.csv", seed, countries)
}

/// Header plus one line per row, prefixed with a UTF-8 BOM.
pub fn to_csv_bytes(rows: &[RankedRow]) -> Result<Vec<u8>> {
    let mut buffer = UTF8_BOM.to_vec();
    {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(&mut buffer);
        writer.write_record(HEADERS)?;
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
    }
    Ok(buffer)
}

/// Write `rows` to `path`, or to [`export_filename`] in the working directory.
pub fn write_csv<S: AsRef<str>>(
    rows: &[RankedRow],
    path: Option<&Path>,
    seed: &str,
    markets: &[S],
) -> Result<PathBuf> {
    let target = match path {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(export_filename(seed, markets)),
    };
    let bytes = to_csv_bytes(rows)?;
    std::fs::write(&target, bytes)
        .with_context(|| format!("Failed to write CSV to {}", target.display()))?;
    Ok(target)
}

/// Export when `tier` carries the export right. `Ok(None)` means nothing was written.
pub fn export_for_tier<S: AsRef<str>>(
    tier: AccessTier,
    rows: &[RankedRow],
    path: Option<&Path>,
    seed: &str,
    markets: &[S],
) -> Result<Option<PathBuf>> {
    if !tier.can_export() {
        return Ok(None);
    }
    write_csv(rows, path, seed, markets).map(Some)
}
