use crate::scoring::extract::try_extract_number;
use crate::scoring::normalize::{in_range, normalize};
use crate::types::evaluation::{Category, DataType, Evaluation, EvaluationItem};
use crate::types::scoring::{CategoryAverages, Score};

/// Averages the usable items of one category onto the 1-5 scale.
///
/// Returns `None` when the category has no item that survives extraction,
/// normalization and the range filter.
pub fn category_average(evaluation: &Evaluation, category: Category) -> Option<Score> {
    let items: Vec<&EvaluationItem> = evaluation
        .items
        .iter()
        .filter(|item| item.is_in(category))
        .collect();
    if items.is_empty() {
        return None;
    }

    let has_scale_1_5 = items
        .iter()
        .any(|item| item.data_type == DataType::Scale1To5);
    let selected = items.into_iter().filter(|item| {
        if has_scale_1_5 {
            item.data_type == DataType::Scale1To5
        } else {
            item.data_type.is_scored()
        }
    });

    let scores: Vec<Score> = selected
        .filter_map(|item| {
            try_extract_number(&item.value).and_then(|value| normalize(value, item.data_type))
        })
        .filter(|score| in_range(*score))
        .collect();
    if scores.is_empty() {
        return None;
    }

    let mean = scores.iter().sum::<Score>() / scores.len() as Score;
    Some(round_one_decimal(mean))
}

/// Averages for all six categories of one evaluation.
pub fn category_averages(evaluation: &Evaluation) -> CategoryAverages {
    CategoryAverages::from_fn(|category| category_average(evaluation, category))
}

// Half-up at the first decimal.
fn round_one_decimal(value: Score) -> Score {
    (value * 10.0 + 0.5).floor() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn item(category: Category, data_type: DataType, value: Value) -> EvaluationItem {
        EvaluationItem::new(category, "item", value, data_type)
    }

    fn evaluation(items: Vec<EvaluationItem>) -> Evaluation {
        Evaluation::with_items(items)
    }

    #[test]
    fn percentage_item_alone_is_remapped() {
        let eval = evaluation(vec![item(
            Category::Physical,
            DataType::Percentage,
            json!(80),
        )]);
        assert_eq!(category_average(&eval, Category::Physical), Some(4.2));
    }

    #[test]
    fn scale_1_5_items_are_averaged() {
        let eval = evaluation(vec![
            item(Category::Technical, DataType::Scale1To5, json!(3)),
            item(Category::Technical, DataType::Scale1To5, json!(5)),
        ]);
        assert_eq!(category_average(&eval, Category::Technical), Some(4.0));
    }

    #[test]
    fn numeric_seven_reads_as_one_to_ten() {
        let eval = evaluation(vec![item(Category::Cognitive, DataType::Numeric, json!(7))]);
        assert_eq!(category_average(&eval, Category::Cognitive), Some(3.7));
    }

    #[test]
    fn scale_1_5_presence_excludes_every_other_type() {
        let eval = evaluation(vec![
            item(Category::Tactical, DataType::Scale1To5, json!(2)),
            item(Category::Tactical, DataType::Percentage, json!(100)),
            item(Category::Tactical, DataType::Scale1To10, json!(10)),
            item(Category::Tactical, DataType::Numeric, json!(5)),
        ]);
        assert_eq!(category_average(&eval, Category::Tactical), Some(2.0));
    }

    #[test]
    fn unusable_scale_1_5_items_still_exclude_other_types() {
        let eval = evaluation(vec![
            item(Category::Tactical, DataType::Scale1To5, json!("abc")),
            item(Category::Tactical, DataType::Percentage, json!(50)),
        ]);
        assert_eq!(category_average(&eval, Category::Tactical), None);
    }

    #[test]
    fn mixed_types_are_averaged_with_equal_weight() {
        let eval = evaluation(vec![
            item(Category::Physical, DataType::Percentage, json!(100)),
            item(Category::Physical, DataType::Scale1To10, json!(1)),
            item(Category::Physical, DataType::Numeric, json!(3)),
        ]);
        // (5.0 + 1.0 + 3.0) / 3
        assert_eq!(category_average(&eval, Category::Physical), Some(3.0));
    }

    #[test]
    fn rounding_applies_once_to_the_mean() {
        // 1-10 values 2 and 3 normalize to ~1.444 and ~1.889; mean ~1.667
        let eval = evaluation(vec![
            item(Category::Biomedical, DataType::Scale1To10, json!(2)),
            item(Category::Biomedical, DataType::Scale1To10, json!(3)),
        ]);
        assert_eq!(category_average(&eval, Category::Biomedical), Some(1.7));
    }

    #[test]
    fn rounding_is_half_up() {
        let eval = evaluation(vec![
            item(Category::Psychological, DataType::Scale1To5, json!(3.25)),
        ]);
        assert_eq!(category_average(&eval, Category::Psychological), Some(3.3));
    }

    #[test]
    fn out_of_range_values_are_discarded() {
        let eval = evaluation(vec![
            item(Category::Technical, DataType::Scale1To5, json!(7)),
            item(Category::Technical, DataType::Scale1To5, json!(0)),
            item(Category::Technical, DataType::Scale1To5, json!(4)),
        ]);
        assert_eq!(category_average(&eval, Category::Technical), Some(4.0));
    }

    #[test]
    fn unparseable_numeric_values_yield_none() {
        let eval = evaluation(vec![item(
            Category::Cognitive,
            DataType::Numeric,
            json!("abc"),
        )]);
        assert_eq!(category_average(&eval, Category::Cognitive), None);
    }

    #[test]
    fn inert_types_alone_yield_none() {
        let eval = evaluation(vec![
            item(Category::Physical, DataType::Index, json!(3)),
            item(Category::Physical, DataType::Coordinate, json!({ "value": 2 })),
        ]);
        assert_eq!(category_average(&eval, Category::Physical), None);
    }

    #[test]
    fn missing_category_yields_none() {
        let eval = evaluation(vec![item(Category::Technical, DataType::Scale1To5, json!(4))]);
        assert_eq!(category_average(&eval, Category::Tactical), None);
    }

    #[test]
    fn wrapped_values_contribute() {
        let eval = evaluation(vec![
            item(Category::Technical, DataType::Scale1To5, json!({ "value": 2 })),
            item(Category::Technical, DataType::Scale1To5, json!({ "number": 4 })),
            item(Category::Technical, DataType::Scale1To5, json!("3")),
        ]);
        assert_eq!(category_average(&eval, Category::Technical), Some(3.0));
    }

    #[test]
    fn repeated_calls_agree() {
        let eval = evaluation(vec![
            item(Category::Physical, DataType::Numeric, json!(64)),
            item(Category::Physical, DataType::Scale1To10, json!("8")),
        ]);
        let first = category_average(&eval, Category::Physical);
        let second = category_average(&eval, Category::Physical);
        assert_eq!(first, second);
        assert!(first.is_some());
    }

    #[test]
    fn averages_cover_every_category() {
        let eval = evaluation(vec![
            item(Category::Technical, DataType::Scale1To5, json!(4.5)),
            item(Category::Physical, DataType::Scale1To5, json!(2)),
        ]);
        let averages = category_averages(&eval);

        assert_eq!(averages.iter().count(), 6);
        assert_eq!(averages.get(Category::Technical), Some(4.5));
        assert_eq!(averages.get(Category::Physical), Some(2.0));
        assert_eq!(averages.get(Category::Biomedical), None);
        assert_eq!(averages.scored_count(), 2);
    }
}
