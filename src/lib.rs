//! Scoring and normalization for football scouting evaluations.
//!
//! Raw evaluation items arrive with mixed data types and value shapes. The
//! [`scoring`] module reduces them to one bounded 1-5 score per category and
//! derives radar series and strengths/weaknesses rankings from those scores.
//! Everything in [`scoring`] is pure and never fails; the other modules load
//! evaluation documents, assemble reports and render them.

pub mod analyze;
pub mod config;
pub mod error;
pub mod input;
pub mod report;
pub mod scoring;
pub mod telemetry;
pub mod types;

pub use scoring::{
    category_average, category_averages, radar_series, strengths_and_weaknesses,
    try_extract_number,
};
pub use types::evaluation::{Category, DataType, Evaluation, EvaluationItem};
pub use types::scoring::{CategoryAverages, RadarPoint, RadarSeries, RankedCategory, Rankings};
