use crate::types::evaluation::Category;
use crate::types::report::{BatchSummary, EvaluationReport};
use crate::types::scoring::{CategoryAverages, RadarSeries, RankedCategory, Rankings, Score};

pub fn to_markdown(report: &EvaluationReport) -> String {
    let mut output = String::new();
    output.push_str(&format!("# {}\n\n", report.title));
    output.push_str(&format!(
        "- evaluation: {}\n- player: {}\n- date: {}\n- scored categories: {}/{}\n- generated: {}\n- source sha256: {}\n\n",
        report.evaluation_id.as_deref().unwrap_or("-"),
        report.player_id.as_deref().unwrap_or("-"),
        report.evaluation_date.as_deref().unwrap_or("-"),
        report.scored_categories,
        Category::ALL.len(),
        report.generated_at,
        report.source_sha256
    ));
    output.push_str(&averages_section(&report.averages));
    output.push('\n');
    output.push_str(&radar_section(&report.radar));
    output.push('\n');
    output.push_str(&rankings_section(&Rankings {
        strengths: report.strengths.clone(),
        weaknesses: report.weaknesses.clone(),
    }));
    output
}

pub fn averages_section(averages: &CategoryAverages) -> String {
    let mut output = String::from("## Category Averages\n\n");
    for (category, score) in averages.iter() {
        output.push_str(&format!("- {}: {}\n", category.label(), format_score(score)));
    }
    output
}

pub fn radar_section(radar: &RadarSeries) -> String {
    let mut output = String::from("## Radar\n\n");
    match &radar.comparison {
        Some(comparison) => {
            output.push_str("| Category | Current | Comparison |\n|---|---|---|\n");
            for (point, other) in radar.primary.iter().zip(comparison) {
                output.push_str(&format!(
                    "| {} | {:.1} | {:.1} |\n",
                    point.label, point.value, other.value
                ));
            }
        }
        None => {
            output.push_str("| Category | Current |\n|---|---|\n");
            for point in &radar.primary {
                output.push_str(&format!("| {} | {:.1} |\n", point.label, point.value));
            }
        }
    }
    output
}

pub fn rankings_section(rankings: &Rankings) -> String {
    let mut output = String::from("## Strengths\n\n");
    push_ranked(&mut output, &rankings.strengths);
    output.push_str("\n## Weaknesses\n\n");
    push_ranked(&mut output, &rankings.weaknesses);
    output
}

pub fn batch_to_markdown(summary: &BatchSummary) -> String {
    let mut output = String::new();
    output.push_str(&format!("# {}\n\n", summary.title));

    output.push_str("| Source | Evaluation | Player |");
    for category in Category::ALL {
        output.push_str(&format!(" {} |", category.label()));
    }
    output.push_str("\n|---|---|---|");
    for _ in Category::ALL {
        output.push_str("---|");
    }
    output.push('\n');
    for row in &summary.rows {
        output.push_str(&format!(
            "| {} | {} | {} |",
            row.source,
            row.evaluation_id.as_deref().unwrap_or("-"),
            row.player_id.as_deref().unwrap_or("-")
        ));
        for (_, score) in row.averages.iter() {
            let cell = score.map_or_else(|| "-".to_string(), |score| format!("{score:.1}"));
            output.push_str(&format!(" {cell} |"));
        }
        output.push('\n');
    }

    if !summary.skipped.is_empty() {
        output.push_str("\n## Skipped\n\n");
        for skipped in &summary.skipped {
            output.push_str(&format!("- {}: {}\n", skipped.source, skipped.reason));
        }
    }
    output
}

fn push_ranked(output: &mut String, ranked: &[RankedCategory]) {
    if ranked.is_empty() {
        output.push_str("- none\n");
        return;
    }
    for entry in ranked {
        output.push_str(&format!(
            "- {}: {:.1}\n",
            entry.category.label(),
            entry.average
        ));
    }
}

fn format_score(score: Option<Score>) -> String {
    match score {
        Some(score) => format!("{score:.1}"),
        None => "no data".to_string(),
    }
}
