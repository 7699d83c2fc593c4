// src/export.rs
use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::json;
use std::{fs, path::Path};
use tracing::info;

use crate::outlets::OutletCount;
use crate::report::TopicAnalytics;

/// Public entry point: write every analytics view plus an index into
/// `out_dir` as chart-ready JSON files.
pub fn write_all_analytics(
    out_dir: &Path,
    topic: &str,
    analytics: &TopicAnalytics,
    outlets: &[OutletCount],
) -> Result<()> {
    fs::create_dir_all(out_dir).with_context(|| format!("create {:?}", out_dir))?;

    write_json(out_dir.join("analytics.trend.json"), &analytics.sentiment_trend)?;
    write_json(out_dir.join("analytics.corpus.json"), &analytics.keyword_corpus)?;
    write_json(out_dir.join("analytics.heatmap.json"), &analytics.keyword_heatmap)?;
    write_json(out_dir.join("analytics.rising.json"), &analytics.rising_keywords)?;
    write_json(out_dir.join("analytics.outlets.json"), &outlets)?;

    let idx = json!({
        "topic": topic,
        "version": 1,
        "counts": {
            "trendPoints": analytics.sentiment_trend.len(),
            "corpusKeywords": analytics.keyword_corpus.len(),
            "heatmapDates": analytics.keyword_heatmap.dates.len(),
            "risingKeywords": analytics.rising_keywords.len(),
            "outlets": outlets.len(),
        },
        "files": [
            "analytics.trend.json",
            "analytics.corpus.json",
            "analytics.heatmap.json",
            "analytics.rising.json",
            "analytics.outlets.json"
        ]
    });
    write_json(out_dir.join("analytics.index.json"), &idx)?;

    info!("Analytics exported - topic={}, dir={}", topic, out_dir.display());
    Ok(())
}

fn write_json<P: AsRef<Path>, T: ?Sized + Serialize>(path: P, value: &T) -> Result<()> {
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .map(|_| ())
        .map_err(|e| e.into())
}
