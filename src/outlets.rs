use itertools::Itertools;
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::HashMap;
use url::Url;

/// Article count per news outlet, derived from row link URLs.
#[derive(Debug, Clone, Serialize)]
pub struct OutletCount {
    pub outlet: String,
    pub count: u32,
}

/// Outlet identity for a source string: URL host without a leading "www.",
/// or a lowercased first path segment for non-URL sources.
pub fn outlet_from_source(src: &str) -> String {
    if let Ok(u) = Url::parse(src) {
        if let Some(h) = u.host_str() {
            return h.trim_start_matches("www.").to_string();
        }
    }
    src.trim()
        .trim_start_matches("www.")
        .split('/')
        .next()
        .unwrap_or(src)
        .to_lowercase()
}

/// Count rows per outlet, count descending. Rows without a link are skipped.
pub fn build_outlet_breakdown<'a, I>(links: I) -> Vec<OutletCount>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: HashMap<String, u32> = HashMap::new();
    for link in links {
        if link.trim().is_empty() {
            continue;
        }
        *counts.entry(outlet_from_source(link)).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .sorted_by_key(|(outlet, _)| outlet.clone())
        .sorted_by_key(|&(_, count)| Reverse(count))
        .map(|(outlet, count)| OutletCount { outlet, count })
        .collect()
}
