use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use url::Url;

use super::ExportError;
use crate::parser::ExtractionResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRow {
    #[serde(rename = "Username")]
    pub username: String,
    #[serde(rename = "Link Type")]
    pub link_type: String,
    #[serde(rename = "Full URL")]
    pub full_url: String,
    #[serde(rename = "Domain")]
    pub domain: String,
    #[serde(rename = "Path")]
    pub path: String,
}

/// One row per grouped link, accounts in first-seen order.
/// Links that were never attributed to an account are not exported.
pub fn export_rows(result: &ExtractionResult) -> Vec<ExportRow> {
    result
        .profiles
        .values()
        .flat_map(|profile| {
            profile.links.iter().map(move |record| ExportRow {
                username: profile.account.clone(),
                link_type: record.link_type.label().to_string(),
                full_url: record.url.clone(),
                domain: domain_of(&record.url),
                path: record.path.clone(),
            })
        })
        .collect()
}

fn domain_of(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_default()
}

const HEADER: [&str; 5] = ["Username", "Link Type", "Full URL", "Domain", "Path"];

/// Header row first, even when there are no rows to follow.
pub fn write_csv<W: Write>(rows: &[ExportRow], writer: W) -> Result<(), ExportError> {
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
    wtr.write_record(HEADER)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Output path for an export stem, falling back to `default_stem` when blank.
pub fn export_path(stem: &str, default_stem: &str) -> PathBuf {
    let stem = if stem.trim().is_empty() { default_stem } else { stem.trim() };
    PathBuf::from(format!("{}.csv", stem))
}

/// Write every grouped link of `result` to `path`. Returns the row count.
pub fn write_csv_file(result: &ExtractionResult, path: &Path) -> Result<usize, ExportError> {
    if result.is_empty() {
        return Err(ExportError::NoLinks);
    }
    let rows = export_rows(result);
    let file = File::create(path)?;
    write_csv(&rows, file)?;
    tracing::info!(path = %path.display(), rows = rows.len(), "Wrote export");
    Ok(rows.len())
}

// ── Tests ──
