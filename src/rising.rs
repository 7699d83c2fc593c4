use chrono::{Duration, NaiveDate};
use serde::Serialize;
use std::collections::HashMap;

use crate::keywords::split_keywords;
use crate::models::{truncate_day, AnalyticsRow};

const MAX_RISING_KEYWORDS: usize = 15;

/// A keyword whose frequency grew from the previous trailing window to the
/// recent one. `change` is the relative delta; `1.0` marks a keyword with no
/// prior occurrences at all ("NEW", 100% by convention).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RisingKeyword {
    pub keyword: String,
    pub recent_count: u32,
    pub previous_count: u32,
    pub change: f64,
}

/// Compare keyword frequencies between the trailing `period_days` window
/// ending at `now` and the `period_days` window before it. Rows older than
/// both windows, or without a parseable date, are excluded entirely.
pub fn build_rising_keywords(
    rows: &[AnalyticsRow],
    period_days: i64,
    now: NaiveDate,
) -> Vec<RisingKeyword> {
    let recent_start = now - Duration::days(period_days);
    let previous_start = recent_start - Duration::days(period_days);

    let mut recent: HashMap<String, u32> = HashMap::new();
    let mut previous: HashMap<String, u32> = HashMap::new();

    for r in rows {
        let Some(day) = truncate_day(&r.date) else {
            continue;
        };
        let Ok(date) = NaiveDate::parse_from_str(day, "%Y-%m-%d") else {
            continue;
        };
        let table = if date >= recent_start {
            &mut recent
        } else if date >= previous_start {
            &mut previous
        } else {
            continue;
        };
        for kw in split_keywords(&r.keywords) {
            *table.entry(kw).or_insert(0) += 1;
        }
    }

    let mut all: Vec<&String> = recent.keys().chain(previous.keys()).collect();
    all.sort();
    all.dedup();

    let mut out: Vec<RisingKeyword> = all
        .into_iter()
        .map(|kw| {
            let r = recent.get(kw).copied().unwrap_or(0);
            let p = previous.get(kw).copied().unwrap_or(0);
            // no prior occurrences -> reported as NEW (100%), never a ratio
            let change = if p == 0 {
                if r > 0 { 1.0 } else { 0.0 }
            } else {
                (r as f64 - p as f64) / p as f64
            };
            RisingKeyword {
                keyword: kw.clone(),
                recent_count: r,
                previous_count: p,
                change,
            }
        })
        .filter(|e| e.recent_count > 0 && e.change > 0.0)
        .collect();

    out.sort_by(|a, b| {
        b.change
            .partial_cmp(&a.change)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    out.truncate(MAX_RISING_KEYWORDS);
    out
}
