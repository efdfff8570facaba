use crate::scoring::average::category_averages;
use crate::types::evaluation::Evaluation;
use crate::types::scoring::{CategoryAverages, RankedCategory, Rankings, Score};

pub const STRENGTH_THRESHOLD: Score = 4.0;
pub const WEAKNESS_THRESHOLD: Score = 3.0;
pub const MAX_RANKED: usize = 3;

pub fn strengths_and_weaknesses(evaluation: &Evaluation) -> Rankings {
    rank_averages(&category_averages(evaluation))
}

/// Ranks scored categories; categories without data never appear on either side.
pub fn rank_averages(averages: &CategoryAverages) -> Rankings {
    let mut ranked: Vec<RankedCategory> = averages
        .iter()
        .filter_map(|(category, average)| {
            average.map(|average| RankedCategory { category, average })
        })
        .collect();
    ranked.sort_by(|left, right| right.average.total_cmp(&left.average));

    let strengths = ranked
        .iter()
        .filter(|entry| entry.average >= STRENGTH_THRESHOLD)
        .take(MAX_RANKED)
        .copied()
        .collect();
    let weaknesses = ranked
        .iter()
        .rev()
        .filter(|entry| entry.average < WEAKNESS_THRESHOLD)
        .take(MAX_RANKED)
        .copied()
        .collect();

    Rankings {
        strengths,
        weaknesses,
    }
}
