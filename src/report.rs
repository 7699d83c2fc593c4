use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::heatmap::{build_keyword_heatmap, HeatmapData};
use crate::keywords::{build_keyword_corpus, CorpusEntry};
use crate::models::AnalyticsRow;
use crate::rising::{build_rising_keywords, RisingKeyword};
use crate::trend::{build_sentiment_trend, SentimentTrendPoint};

pub const DEFAULT_TOP_KEYWORD_COUNT: usize = 20;
pub const DEFAULT_PERIOD_DAYS: i64 = 7;

/// Explicit, passed-in analytics configuration. There is no global settings
/// store; every invocation carries its own parameters and clock anchor.
#[derive(Debug, Clone, Copy)]
pub struct ReportParams {
    pub top_keyword_count: usize,
    pub period_days: i64,
    pub now: NaiveDate,
}

impl ReportParams {
    pub fn new(now: NaiveDate) -> Self {
        Self {
            top_keyword_count: DEFAULT_TOP_KEYWORD_COUNT,
            period_days: DEFAULT_PERIOD_DAYS,
            now,
        }
    }
}

/// The four derived views for one topic, shaped like the analytics API
/// response the presentation layer consumes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicAnalytics {
    pub sentiment_trend: Vec<SentimentTrendPoint>,
    pub keyword_corpus: Vec<CorpusEntry>,
    pub keyword_heatmap: HeatmapData,
    pub rising_keywords: Vec<RisingKeyword>,
}

/// Compute all four views over one row sequence. The views are independent
/// pure functions over the same input, so they run concurrently; the heatmap
/// rebuilds the corpus from the rows rather than sharing state with the
/// corpus view.
pub fn build_topic_analytics(rows: &[AnalyticsRow], params: &ReportParams) -> TopicAnalytics {
    debug!(
        "Building analytics - rows={}, top_keywords={}, period_days={}, now={}",
        rows.len(),
        params.top_keyword_count,
        params.period_days,
        params.now
    );

    let ((sentiment_trend, keyword_corpus), (keyword_heatmap, rising_keywords)) = rayon::join(
        || {
            rayon::join(
                || build_sentiment_trend(rows),
                || build_keyword_corpus(rows),
            )
        },
        || {
            rayon::join(
                || build_keyword_heatmap(rows, params.top_keyword_count),
                || build_rising_keywords(rows, params.period_days, params.now),
            )
        },
    );

    debug!(
        "Analytics built - trend_points={}, corpus_keywords={}, rising={}",
        sentiment_trend.len(),
        keyword_corpus.len(),
        rising_keywords.len()
    );

    TopicAnalytics {
        sentiment_trend,
        keyword_corpus,
        keyword_heatmap,
        rising_keywords,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(date: &str, sentiment: &str, keywords: &str) -> AnalyticsRow {
        AnalyticsRow {
            date: date.into(),
            sentiment: sentiment.into(),
            keywords: keywords.into(),
        }
    }

    fn params() -> ReportParams {
        ReportParams::new("2024-01-10".parse().unwrap())
    }

    #[test]
    fn empty_archive_yields_empty_views() {
        let report = build_topic_analytics(&[], &params());
        assert!(report.sentiment_trend.is_empty());
        assert!(report.keyword_corpus.is_empty());
        assert!(report.keyword_heatmap.dates.is_empty());
        assert!(report.rising_keywords.is_empty());
    }

    #[test]
    fn views_agree_on_the_same_rows() {
        let rows = vec![
            row("2023-12-01", "Positive", "AI, Climate"),
            row("2023-12-01", "Negative", "AI"),
            row("2024-01-09", "Neutral", "AI"),
        ];
        let report = build_topic_analytics(&rows, &params());

        assert_eq!(report.sentiment_trend.len(), 2);
        assert_eq!(report.keyword_corpus[0].keyword, "ai");
        assert_eq!(report.keyword_corpus[0].count, 3);
        assert_eq!(report.keyword_heatmap.dates.len(), 2);
        // the December rows sit outside both trailing windows, so the
        // January occurrence makes "ai" a new rising keyword
        assert!(report.rising_keywords.iter().any(|e| e.keyword == "ai"));
    }

    #[test]
    fn report_serializes_with_camel_case_envelope() {
        let rows = vec![row("2024-01-09", "Positive", "AI")];
        let report = build_topic_analytics(&rows, &params());
        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("sentimentTrend").is_some());
        assert!(json.get("keywordCorpus").is_some());
        assert!(json.get("keywordHeatmap").is_some());
        assert!(json.get("risingKeywords").is_some());
        let rising = &json["risingKeywords"][0];
        assert!(rising.get("recentCount").is_some());
        assert!(rising.get("previousCount").is_some());
    }

    #[test]
    fn repeated_builds_are_identical() {
        let rows = vec![
            row("2024-01-01", "Positive", "AI, Climate"),
            row("2024-01-09", "Negative", "AI"),
        ];
        let a = serde_json::to_string(&build_topic_analytics(&rows, &params())).unwrap();
        let b = serde_json::to_string(&build_topic_analytics(&rows, &params())).unwrap();
        assert_eq!(a, b);
    }
}
