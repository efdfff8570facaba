use crate::input::{load_evaluation, LoadedEvaluation};
use crate::scoring::average::category_averages;
use crate::scoring::radar::radar_points;
use crate::scoring::rank::rank_averages;
use crate::types::report::{BatchRow, BatchSummary, EvaluationReport, SkippedFile};
use crate::types::scoring::RadarSeries;
use chrono::Utc;
use std::path::{Path, PathBuf};

pub fn analyze(
    loaded: &LoadedEvaluation,
    comparison: Option<&LoadedEvaluation>,
    title: &str,
) -> EvaluationReport {
    let evaluation = &loaded.evaluation;
    let averages = category_averages(evaluation);
    let rankings = rank_averages(&averages);
    let radar = RadarSeries {
        primary: radar_points(&averages),
        comparison: comparison.map(|other| radar_points(&category_averages(&other.evaluation))),
    };

    EvaluationReport {
        title: title.to_string(),
        evaluation_id: evaluation.id.clone(),
        player_id: evaluation.player_id.clone(),
        evaluation_date: evaluation.evaluation_date.clone(),
        generated_at: Utc::now().to_rfc3339(),
        source_sha256: loaded.sha256.clone(),
        scored_categories: averages.scored_count(),
        averages,
        radar,
        strengths: rankings.strengths,
        weaknesses: rankings.weaknesses,
    }
}

/// Scores every evaluation file, collecting unreadable ones instead of failing.
pub fn analyze_batch(root: &Path, paths: &[PathBuf], title: &str) -> BatchSummary {
    let mut summary = BatchSummary {
        title: title.to_string(),
        ..BatchSummary::default()
    };

    for path in paths {
        let source = path
            .strip_prefix(root)
            .unwrap_or(path.as_path())
            .to_string_lossy()
            .to_string();
        match load_evaluation(path) {
            Ok(loaded) => summary.rows.push(BatchRow {
                source,
                evaluation_id: loaded.evaluation.id.clone(),
                player_id: loaded.evaluation.player_id.clone(),
                averages: category_averages(&loaded.evaluation),
            }),
            Err(err) => {
                tracing::warn!(source = %source, error = %err, "skipping evaluation");
                summary.skipped.push(SkippedFile {
                    source,
                    reason: err.to_string(),
                });
            }
        }
    }

    tracing::info!(
        scored = summary.rows.len(),
        skipped = summary.skipped.len(),
        "batch complete"
    );
    summary
}
