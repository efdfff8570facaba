use crate::types::scoring::{CategoryAverages, RadarSeries, RankedCategory};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct EvaluationReport {
    pub title: String,
    pub evaluation_id: Option<String>,
    pub player_id: Option<String>,
    pub evaluation_date: Option<String>,
    pub generated_at: String,
    pub source_sha256: String,
    pub averages: CategoryAverages,
    pub scored_categories: usize,
    pub radar: RadarSeries,
    pub strengths: Vec<RankedCategory>,
    pub weaknesses: Vec<RankedCategory>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchRow {
    pub source: String,
    pub evaluation_id: Option<String>,
    pub player_id: Option<String>,
    pub averages: CategoryAverages,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkippedFile {
    pub source: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchSummary {
    pub title: String,
    pub rows: Vec<BatchRow>,
    pub skipped: Vec<SkippedFile>,
}
