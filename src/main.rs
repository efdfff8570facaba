mod cli;

use clap::Parser;
use scout_score::error::ScoutError;
use scout_score::input::{discover_evaluations, load_evaluation, LoadedEvaluation};
use scout_score::report::{self, json, md, OutputFormat};
use scout_score::types::config::ScoutConfig;
use scout_score::{
    analyze, category_averages, config, radar_series, strengths_and_weaknesses, telemetry,
};
use std::path::Path;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const INVALID_INPUT: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn output_format(flag: Option<cli::ReportFormat>, cfg: &ScoutConfig) -> OutputFormat {
    match flag {
        Some(cli::ReportFormat::Json) => OutputFormat::Json,
        Some(cli::ReportFormat::Md) => OutputFormat::Md,
        None => OutputFormat::from_config(cfg.report_format()),
    }
}

fn load_comparison(path: Option<&Path>) -> Result<Option<LoadedEvaluation>, ScoutError> {
    path.map(load_evaluation).transpose()
}

// An evaluation where no category produced a score is worth flagging.
fn scored_exit_code(scored_categories: usize) -> i32 {
    if scored_categories == 0 {
        exit_code::WARNINGS
    } else {
        exit_code::SUCCESS
    }
}

fn run(cli: cli::Cli, cfg: &ScoutConfig) -> Result<i32, ScoutError> {
    match cli.command {
        cli::Commands::Averages(cmd) => {
            let loaded = load_evaluation(&cmd.path)?;
            let averages = category_averages(&loaded.evaluation);
            let rendered = match output_format(cmd.format, cfg) {
                OutputFormat::Json => json::to_json(&averages)?,
                OutputFormat::Md => md::averages_section(&averages),
            };
            println!("{rendered}");
            Ok(scored_exit_code(averages.scored_count()))
        }
        cli::Commands::Radar(cmd) => {
            let loaded = load_evaluation(&cmd.path)?;
            let comparison = load_comparison(cmd.compare.as_deref())?;
            let averages = category_averages(&loaded.evaluation);
            let radar = radar_series(
                &loaded.evaluation,
                comparison.as_ref().map(|other| &other.evaluation),
            );
            let rendered = match output_format(cmd.format, cfg) {
                OutputFormat::Json => json::to_json(&radar)?,
                OutputFormat::Md => md::radar_section(&radar),
            };
            println!("{rendered}");
            Ok(scored_exit_code(averages.scored_count()))
        }
        cli::Commands::Rank(cmd) => {
            let loaded = load_evaluation(&cmd.path)?;
            let averages = category_averages(&loaded.evaluation);
            let rankings = strengths_and_weaknesses(&loaded.evaluation);
            let rendered = match output_format(cmd.format, cfg) {
                OutputFormat::Json => json::to_json(&rankings)?,
                OutputFormat::Md => md::rankings_section(&rankings),
            };
            println!("{rendered}");
            Ok(scored_exit_code(averages.scored_count()))
        }
        cli::Commands::Report(cmd) => {
            let loaded = load_evaluation(&cmd.path)?;
            let comparison = load_comparison(cmd.compare.as_deref())?;
            let evaluation_report = analyze::analyze(&loaded, comparison.as_ref(), cfg.title());
            let rendered = report::render(&evaluation_report, output_format(cmd.format, cfg))?;
            println!("{rendered}");
            Ok(scored_exit_code(evaluation_report.scored_categories))
        }
        cli::Commands::Batch(cmd) => {
            if !cmd.dir.is_dir() {
                return Err(ScoutError::PathNotFound(cmd.dir.display().to_string()));
            }
            let paths = discover_evaluations(&cmd.dir);
            if paths.is_empty() {
                eprintln!("warning: no evaluation files found in {}", cmd.dir.display());
                return Ok(exit_code::WARNINGS);
            }

            let summary = analyze::analyze_batch(&cmd.dir, &paths, cfg.title());
            let rendered = report::render_batch(&summary, output_format(cmd.format, cfg))?;
            println!("{rendered}");

            if summary.skipped.is_empty() {
                Ok(exit_code::SUCCESS)
            } else {
                Ok(exit_code::WARNINGS)
            }
        }
    }
}

fn start() -> Result<i32, ScoutError> {
    let cli = cli::Cli::parse();
    let cwd = std::env::current_dir()?;
    let cfg = config::load_config(&cwd, cli.config.as_deref())?;
    telemetry::init(&telemetry::level_for(cli.verbose, cli.quiet, cfg.log_level()))?;
    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "scout-score starting");
    run(cli, &cfg)
}

fn main() {
    match start() {
        Ok(code) => {
            if code != exit_code::SUCCESS {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            let code = match e {
                ScoutError::InvalidEvaluation { .. } => exit_code::INVALID_INPUT,
                _ => exit_code::RUNTIME_FAILURE,
            };
            std::process::exit(code);
        }
    }
}
