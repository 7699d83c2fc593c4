use std::collections::HashMap;

use crate::keywords::normalize_keyword;
use crate::models::round2;

/// Cohesion of one article's keywords against the accumulated corpus for its
/// topic: the mean of per-keyword corpus-frequency ratios, in `[0, 1]`.
///
/// The corpus is expected to be built from prior archive rows, excluding the
/// article being scored. Keywords that normalize to empty still occupy a
/// slot in the mean; they simply never match the corpus.
pub fn compute_cohesion(article_keywords: &[String], corpus: &HashMap<String, u32>) -> f64 {
    if article_keywords.is_empty() {
        return 0.0;
    }
    let max_freq = corpus.values().copied().max().unwrap_or(1).max(1) as f64;
    let sum: f64 = article_keywords
        .iter()
        .map(|k| {
            let n = normalize_keyword(k);
            corpus.get(&n).copied().unwrap_or(0) as f64 / max_freq
        })
        .sum();
    round2(sum / article_keywords.len() as f64).min(1.0)
}
