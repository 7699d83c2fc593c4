use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::{
    round2, truncate_day, AnalyticsRow, SENTIMENT_NEGATIVE, SENTIMENT_POSITIVE,
};

/// Per-day sentiment index: `(positive - negative) / total`, in `[-1, 1]`.
#[derive(Debug, Clone, Serialize)]
pub struct SentimentTrendPoint {
    pub date: String,
    pub score: f64,
    pub positive: u32,
    pub negative: u32,
    pub neutral: u32,
    pub total: u32,
}

#[derive(Default)]
struct DayCounts {
    positive: u32,
    negative: u32,
    neutral: u32,
}

/// Bucket rows by calendar day and compute the bounded sentiment index for
/// each. A sentiment string that is not exactly the Positive or Negative
/// label counts as Neutral. Rows without a date-shaped date are excluded.
/// Output is ascending by date (lexicographic equals chronological here).
pub fn build_sentiment_trend(rows: &[AnalyticsRow]) -> Vec<SentimentTrendPoint> {
    let mut by_date: BTreeMap<String, DayCounts> = BTreeMap::new();

    for r in rows {
        let Some(day) = truncate_day(&r.date) else {
            continue;
        };
        let counts = by_date.entry(day.to_string()).or_default();
        if r.sentiment == SENTIMENT_POSITIVE {
            counts.positive += 1;
        } else if r.sentiment == SENTIMENT_NEGATIVE {
            counts.negative += 1;
        } else {
            counts.neutral += 1;
        }
    }

    by_date
        .into_iter()
        .map(|(date, c)| {
            let total = c.positive + c.negative + c.neutral;
            let score = if total == 0 {
                0.0
            } else {
                round2((c.positive as f64 - c.negative as f64) / total as f64)
            };
            SentimentTrendPoint {
                date,
                score,
                positive: c.positive,
                negative: c.negative,
                neutral: c.neutral,
                total,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(date: &str, sentiment: &str) -> AnalyticsRow {
        AnalyticsRow {
            date: date.into(),
            sentiment: sentiment.into(),
            keywords: String::new(),
        }
    }

    #[test]
    fn balanced_day_scores_zero() {
        let rows = vec![row("2024-01-01", "Positive"), row("2024-01-01", "Negative")];
        let trend = build_sentiment_trend(&rows);
        assert_eq!(trend.len(), 1);
        let p = &trend[0];
        assert_eq!(p.date, "2024-01-01");
        assert_eq!(p.score, 0.0);
        assert_eq!((p.positive, p.negative, p.neutral, p.total), (1, 1, 0, 2));
    }

    #[test]
    fn unknown_sentiment_counts_as_neutral() {
        let rows = vec![
            row("2024-01-01", "positive"), // case-sensitive: not the label
            row("2024-01-01", "매우 긍정적"),
            row("2024-01-01", ""),
        ];
        let trend = build_sentiment_trend(&rows);
        assert_eq!(trend[0].neutral, 3);
        assert_eq!(trend[0].score, 0.0);
    }

    #[test]
    fn days_sort_ascending_and_timestamps_truncate() {
        let rows = vec![
            row("2024-02-01T18:00:00Z", "Positive"),
            row("2024-01-15", "Negative"),
            row("2024-02-01", "Positive"),
        ];
        let trend = build_sentiment_trend(&rows);
        let dates: Vec<&str> = trend.iter().map(|p| p.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-01-15", "2024-02-01"]);
        assert_eq!(trend[1].positive, 2);
    }

    #[test]
    fn undated_rows_are_excluded() {
        let rows = vec![row("", "Positive"), row("soon", "Positive")];
        assert!(build_sentiment_trend(&rows).is_empty());
    }

    #[test]
    fn score_rounds_to_two_decimals_and_stays_bounded() {
        let rows = vec![
            row("2024-01-01", "Positive"),
            row("2024-01-01", "Neutral"),
            row("2024-01-01", "Neutral"),
        ];
        let trend = build_sentiment_trend(&rows);
        assert_eq!(trend[0].score, 0.33);

        let all_neg = vec![row("2024-01-02", "Negative"); 4];
        let trend = build_sentiment_trend(&all_neg);
        assert_eq!(trend[0].score, -1.0);

        for p in build_sentiment_trend(&rows) {
            assert!(p.score >= -1.0 && p.score <= 1.0);
            assert_eq!(p.total, p.positive + p.negative + p.neutral);
        }
    }

    #[test]
    fn recomputation_is_bit_identical() {
        let rows = vec![
            row("2024-01-01", "Positive"),
            row("2024-01-02", "Negative"),
            row("2024-01-02", "Neutral"),
        ];
        let a = build_sentiment_trend(&rows);
        let b = build_sentiment_trend(&rows);
        assert_eq!(serde_json::to_string(&a).unwrap(), serde_json::to_string(&b).unwrap());
    }
}
