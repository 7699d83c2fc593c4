use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::models::{AnalyticsRow, ArchiveRow, SENTIMENT_NEUTRAL};

/// Load the full archive from a JSON file (one array of rows). The storage
/// collaborator owns column layout and authentication; by the time rows
/// reach this crate they are plain records. A load failure surfaces as an
/// error rather than an empty archive.
pub fn load_archive(path: &Path) -> Result<Vec<ArchiveRow>> {
    let start = std::time::Instant::now();
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading archive file {}", path.display()))?;
    let rows: Vec<ArchiveRow> = serde_json::from_str(&raw)
        .with_context(|| format!("decoding archive JSON {}", path.display()))?;
    info!(
        "Archive loaded - rows={}, duration={:.2}s, path={}",
        rows.len(),
        start.elapsed().as_secs_f32(),
        path.display()
    );
    Ok(rows)
}

/// Rows whose topic contains `topic` as a substring. The storage layer
/// matches topics by containment, not equality.
pub fn rows_for_topic<'a>(rows: &'a [ArchiveRow], topic: &str) -> Vec<&'a ArchiveRow> {
    rows.iter().filter(|r| r.topic.contains(topic)).collect()
}

/// Project full archive rows down to the three-field engine contract:
/// date clipped to its first 10 characters, blank sentiment defaulted to
/// Neutral, rows without a date dropped.
pub fn rows_for_analytics(rows: &[ArchiveRow], topic: &str) -> Vec<AnalyticsRow> {
    let out: Vec<AnalyticsRow> = rows_for_topic(rows, topic)
        .into_iter()
        .map(|r| {
            let sentiment = r.sentiment.trim();
            AnalyticsRow {
                date: clip10(&r.date).to_string(),
                sentiment: if sentiment.is_empty() {
                    SENTIMENT_NEUTRAL.to_string()
                } else {
                    sentiment.to_string()
                },
                keywords: r.keywords.clone(),
            }
        })
        .filter(|r| !r.date.is_empty())
        .collect();
    debug!("Analytics rows projected - topic={}, rows={}", topic, out.len());
    out
}

/// First 10 characters, multibyte-safe.
fn clip10(s: &str) -> &str {
    match s.char_indices().nth(10) {
        Some((i, _)) => &s[..i],
        None => s,
    }
}
