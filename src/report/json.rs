use serde::Serialize;

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::evaluation::Category;
    use crate::types::report::EvaluationReport;
    use crate::types::scoring::{CategoryAverages, RadarSeries, RankedCategory};

    #[test]
    fn json_report_keeps_null_averages_and_category_tags() {
        let averages =
            CategoryAverages::from_fn(|category| (category == Category::Technical).then_some(4.5));
        let report = EvaluationReport {
            title: "Scouting Report".to_string(),
            evaluation_id: Some("ev-1".to_string()),
            player_id: None,
            evaluation_date: None,
            generated_at: "2026-01-01T00:00:00+00:00".to_string(),
            source_sha256: "00".to_string(),
            averages,
            scored_categories: 1,
            radar: RadarSeries {
                primary: Vec::new(),
                comparison: None,
            },
            strengths: vec![RankedCategory {
                category: Category::Technical,
                average: 4.5,
            }],
            weaknesses: Vec::new(),
        };

        let rendered = to_json(&report).expect("json should serialize");
        assert!(rendered.contains("\"técnico\": 4.5"));
        assert!(rendered.contains("\"físico\": null"));
        assert!(rendered.contains("\"category\": \"técnico\""));
        assert!(!rendered.contains("\"comparison\""));
    }
}
