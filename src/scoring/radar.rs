use crate::scoring::average::category_averages;
use crate::types::evaluation::{Category, Evaluation};
use crate::types::scoring::{CategoryAverages, RadarPoint, RadarSeries};

/// Builds the radar series for an evaluation, optionally overlaid with a comparison.
pub fn radar_series(evaluation: &Evaluation, comparison: Option<&Evaluation>) -> RadarSeries {
    RadarSeries {
        primary: radar_points(&category_averages(evaluation)),
        comparison: comparison.map(|other| radar_points(&category_averages(other))),
    }
}

/// One point per category in display order; categories without data plot at zero.
pub fn radar_points(averages: &CategoryAverages) -> Vec<RadarPoint> {
    Category::ALL
        .into_iter()
        .map(|category| RadarPoint {
            label: category.label().to_string(),
            value: averages.get(category).unwrap_or(0.0),
        })
        .collect()
}
