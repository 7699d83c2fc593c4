//! Archive analytics for processed news records.
//!
//! The engine consumes a flat sequence of archive rows (date, sentiment,
//! comma-delimited keywords) for one topic and derives four views: a per-day
//! sentiment index trend, a lifetime keyword corpus, a date×keyword heatmap
//! over the top corpus keywords, and a window-over-window rising-keyword
//! list. A separate cohesion score measures one article's keyword overlap
//! with its topic's accumulated corpus. All computations are pure functions
//! over in-memory data; fetching, persistence, and rendering live with
//! external collaborators.

pub mod archive;
pub mod cohesion;
pub mod export;
pub mod heatmap;
pub mod keywords;
pub mod models;
pub mod outlets;
pub mod relative_date;
pub mod report;
pub mod rising;
pub mod trend;
