pub mod json;
pub mod md;

use crate::error::ScoutError;
use crate::types::report::{BatchSummary, EvaluationReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Md,
}

impl OutputFormat {
    pub fn from_config(value: Option<&str>) -> Self {
        match value {
            Some("json") => OutputFormat::Json,
            _ => OutputFormat::Md,
        }
    }
}

pub fn render(report: &EvaluationReport, format: OutputFormat) -> Result<String, ScoutError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(ScoutError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}

pub fn render_batch(summary: &BatchSummary, format: OutputFormat) -> Result<String, ScoutError> {
    match format {
        OutputFormat::Json => json::to_json(summary).map_err(ScoutError::Json),
        OutputFormat::Md => Ok(md::batch_to_markdown(summary)),
    }
}
