use crate::types::evaluation::DataType;
use crate::types::scoring::Score;

pub const SCALE_MIN: Score = 1.0;
pub const SCALE_MAX: Score = 5.0;

pub fn from_scale_1_10(value: f64) -> Score {
    1.0 + (value - 1.0) / 9.0 * 4.0
}

pub fn from_percentage(value: f64) -> Score {
    1.0 + (value / 100.0) * 4.0
}

pub fn in_range(score: Score) -> bool {
    (SCALE_MIN..=SCALE_MAX).contains(&score)
}

/// Maps a raw item value onto the 1-5 scale according to its declared data type.
///
/// Values outside the range a data type expects are returned untouched; the caller
/// discards anything that still falls outside `[1, 5]`. Inert data types yield `None`.
pub fn normalize(value: f64, data_type: DataType) -> Option<Score> {
    let score = match data_type {
        DataType::Scale1To5 => value,
        DataType::Scale1To10 if (1.0..=10.0).contains(&value) => from_scale_1_10(value),
        DataType::Scale1To10 => value,
        DataType::Percentage if (0.0..=100.0).contains(&value) => from_percentage(value),
        DataType::Percentage => value,
        DataType::Numeric => normalize_numeric(value),
        DataType::Index | DataType::Coordinate | DataType::Unknown => return None,
    };
    Some(score)
}

// Untyped numbers are guessed by magnitude: 1-5 as is, then 1-10, then percentage.
fn normalize_numeric(value: f64) -> Score {
    if in_range(value) {
        value
    } else if value > 0.0 && value <= 10.0 {
        from_scale_1_10(value)
    } else if value > 0.0 && value <= 100.0 {
        from_percentage(value)
    } else {
        value
    }
}
