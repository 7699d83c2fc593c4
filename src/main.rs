use anyhow::Result;
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing::{debug, info, warn};

use news_pulse::archive::{load_archive, rows_for_analytics, rows_for_topic};
use news_pulse::cohesion::compute_cohesion;
use news_pulse::export::write_all_analytics;
use news_pulse::keywords::{keyword_counts, KEYWORD_DELIMITERS};
use news_pulse::outlets::build_outlet_breakdown;
use news_pulse::relative_date::format_relative_date;
use news_pulse::report::{build_topic_analytics, ReportParams};

/// News Pulse - analytics over an archive of processed news records
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build all analytics views for a topic and export them as JSON files
    Report {
        /// Path to the archive JSON file (array of processed rows)
        #[arg(short, long)]
        archive: std::path::PathBuf,

        /// Topic to analyze (substring match against each row's topic)
        #[arg(short, long)]
        topic: String,

        /// Output directory for generated files (default: "out")
        #[arg(short, long, default_value = "out")]
        output_dir: std::path::PathBuf,

        /// Heatmap width: number of top corpus keywords
        #[arg(long, default_value_t = 20)]
        top_keywords: usize,

        /// Rising-keyword window size in days
        #[arg(long, default_value_t = 7)]
        period_days: i64,

        /// Anchor date for the rising-keyword windows (default: today, UTC)
        #[arg(long)]
        now: Option<NaiveDate>,
    },
    /// Score one article's keywords against a topic's accumulated corpus
    Cohesion {
        /// Path to the archive JSON file (array of processed rows)
        #[arg(short, long)]
        archive: std::path::PathBuf,

        /// Topic whose archived rows form the corpus
        #[arg(short, long)]
        topic: String,

        /// The article's keywords, comma-delimited
        #[arg(short, long)]
        keywords: String,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_thread_ids(false)
        .with_line_number(true)
        .init();

    let args = Args::parse();

    match args.command {
        Command::Report {
            archive,
            topic,
            output_dir,
            top_keywords,
            period_days,
            now,
        } => {
            let today = Utc::now().date_naive();
            let now = now.unwrap_or(today);
            info!(
                "Starting report - topic={}, now={}, top_keywords={}, period_days={}",
                topic, now, top_keywords, period_days
            );

            let all_rows = load_archive(&archive)?;
            let topic_rows = rows_for_topic(&all_rows, &topic);
            if topic_rows.is_empty() {
                warn!("No archived rows match topic '{}'", topic);
            } else if let Some(latest) = topic_rows.iter().map(|r| r.date.as_str()).max() {
                info!(
                    "Latest archived row - date={} ({})",
                    latest,
                    format_relative_date(latest, today)
                );
            }

            let rows = rows_for_analytics(&all_rows, &topic);
            let params = ReportParams {
                top_keyword_count: top_keywords,
                period_days,
                now,
            };
            let analytics = build_topic_analytics(&rows, &params);
            let outlets = build_outlet_breakdown(topic_rows.iter().map(|r| r.link.as_str()));

            write_all_analytics(&output_dir, &topic, &analytics, &outlets)
        }
        Command::Cohesion {
            archive,
            topic,
            keywords,
        } => {
            let all_rows = load_archive(&archive)?;
            let topic_rows = rows_for_topic(&all_rows, &topic);
            debug!(
                "Corpus rows - topic={}, rows={}",
                topic,
                topic_rows.len()
            );

            let corpus = keyword_counts(topic_rows.iter().map(|r| r.keywords.as_str()));
            let article_keywords: Vec<String> = keywords
                .split(KEYWORD_DELIMITERS)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
            let score = compute_cohesion(&article_keywords, &corpus);

            println!(
                "{}",
                serde_json::to_string_pretty(&json!({
                    "topic": topic,
                    "keywords": article_keywords,
                    "cohesion": score,
                }))?
            );
            Ok(())
        }
    }
}
