use serde::{Deserialize, Serialize};

pub const SENTIMENT_POSITIVE: &str = "Positive";
pub const SENTIMENT_NEGATIVE: &str = "Negative";
pub const SENTIMENT_NEUTRAL: &str = "Neutral";

fn default_sentiment() -> String {
    SENTIMENT_NEUTRAL.to_string()
}

/// One persisted, previously-processed news record as the archive stores it.
/// Field names on the wire are camelCase to match the archive's row shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveRow {
    pub date: String, // "YYYY-MM-DD" or a longer timestamp
    pub topic: String,
    #[serde(default)]
    pub title_original: String,
    #[serde(default)]
    pub title_translated: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub summary_original: String,
    #[serde(default)]
    pub summary_translated: String,
    #[serde(default = "default_sentiment")]
    pub sentiment: String,
    #[serde(default)]
    pub keywords: String, // multiple keywords joined by a comma-family delimiter
    #[serde(default)]
    pub cohesion: Option<f64>,
}

/// The minimum three-field contract the analytics engine consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsRow {
    pub date: String,
    pub sentiment: String,
    pub keywords: String,
}

/// Round to 2 decimal places, the precision every derived score is reported at.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Heuristic: "YYYY-MM-DD" prefix. Byte-level so arbitrary (multibyte)
/// garbage is rejected without ever slicing mid-character.
pub fn looks_like_date(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() >= 10
        && b[4] == b'-'
        && b[7] == b'-'
        && b[..4].iter().all(u8::is_ascii_digit)
        && b[5..7].iter().all(u8::is_ascii_digit)
        && b[8..10].iter().all(u8::is_ascii_digit)
}

/// Truncate a row date to its calendar day, or None when it isn't date-shaped.
/// Rows that fail this check are excluded from date-bucketed views.
pub fn truncate_day(s: &str) -> Option<&str> {
    if looks_like_date(s) {
        Some(&s[..10])
    } else {
        None
    }
}
