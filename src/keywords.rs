use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::HashMap;
use unicode_normalization::UnicodeNormalization;

use crate::models::AnalyticsRow;

/// Upstream keyword strings come out of a multilingual language model, so the
/// delimiter set mixes the ASCII, Arabic, and ideographic commas. Changing
/// this set silently diverges corpus counts for non-English locales.
pub const KEYWORD_DELIMITERS: [char; 3] = [',', '،', '、'];

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Canonical form of one keyword token: NFC-folded, trimmed, lowercased,
/// internal whitespace runs collapsed to a single `_`. Empty input stays
/// empty; callers drop empty results.
pub fn normalize_keyword(raw: &str) -> String {
    let folded = raw.nfc().collect::<String>().to_lowercase();
    WHITESPACE_RUN.replace_all(folded.trim(), "_").into_owned()
}

/// Split a raw keyword field into normalized tokens. Duplicates are
/// preserved so downstream frequency counting stays correct.
pub fn split_keywords(raw: &str) -> Vec<String> {
    raw.split(KEYWORD_DELIMITERS)
        .map(normalize_keyword)
        .filter(|k| !k.is_empty())
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct CorpusEntry {
    pub keyword: String,
    pub count: u32,
}

/// Lifetime keyword frequency table over any set of raw keyword fields.
/// Used directly by the cohesion scorer.
pub fn keyword_counts<I, S>(keyword_fields: I) -> HashMap<String, u32>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counts: HashMap<String, u32> = HashMap::new();
    for field in keyword_fields {
        for kw in split_keywords(field.as_ref()) {
            *counts.entry(kw).or_insert(0) += 1;
        }
    }
    counts
}

/// Corpus as a sorted list, count descending. Entries are accumulated in
/// first-encounter order and the sort is stable, so equal counts keep that
/// order.
pub fn build_keyword_corpus(rows: &[AnalyticsRow]) -> Vec<CorpusEntry> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut entries: Vec<CorpusEntry> = Vec::new();

    for row in rows {
        for kw in split_keywords(&row.keywords) {
            match index.get(&kw) {
                Some(&i) => entries[i].count += 1,
                None => {
                    index.insert(kw.clone(), entries.len());
                    entries.push(CorpusEntry { keyword: kw, count: 1 });
                }
            }
        }
    }

    entries.sort_by_key(|e| Reverse(e.count));
    entries
}
