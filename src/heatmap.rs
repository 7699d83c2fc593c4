use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

use crate::keywords::{build_keyword_corpus, split_keywords};
use crate::models::{truncate_day, AnalyticsRow};

/// Date × keyword frequency grid limited to the top corpus keywords.
/// `matrix[keyword_idx][date_idx]` is the token count for that pair.
#[derive(Debug, Clone, Serialize)]
pub struct HeatmapData {
    pub dates: Vec<String>,
    pub keywords: Vec<String>,
    pub matrix: Vec<Vec<u32>>,
}

/// Project keyword frequencies onto a date×keyword matrix restricted to the
/// `top_keyword_count` most frequent corpus keywords. When fewer distinct
/// keywords exist the axis is simply shorter.
pub fn build_keyword_heatmap(rows: &[AnalyticsRow], top_keyword_count: usize) -> HeatmapData {
    let corpus = build_keyword_corpus(rows);
    let keywords: Vec<String> = corpus
        .into_iter()
        .take(top_keyword_count)
        .map(|e| e.keyword)
        .collect();

    let mut date_set: BTreeSet<String> = BTreeSet::new();
    for r in rows {
        if let Some(day) = truncate_day(&r.date) {
            date_set.insert(day.to_string());
        }
    }
    let dates: Vec<String> = date_set.into_iter().collect();

    // index maps so the row scan stays O(tokens)
    let kw_idx: HashMap<&str, usize> = keywords
        .iter()
        .enumerate()
        .map(|(i, k)| (k.as_str(), i))
        .collect();
    let date_idx: HashMap<&str, usize> = dates
        .iter()
        .enumerate()
        .map(|(i, d)| (d.as_str(), i))
        .collect();

    let mut matrix = vec![vec![0u32; dates.len()]; keywords.len()];
    for r in rows {
        let Some(day) = truncate_day(&r.date) else {
            continue;
        };
        let di = date_idx[day];
        for kw in split_keywords(&r.keywords) {
            if let Some(&ki) = kw_idx.get(kw.as_str()) {
                matrix[ki][di] += 1;
            }
        }
    }

    HeatmapData { dates, keywords, matrix }
}
