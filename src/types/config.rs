use crate::error::ScoutError;
use serde::Deserialize;

pub const DEFAULT_TITLE: &str = "Scouting Report";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoutConfig {
    pub report: Option<ReportConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub format: Option<String>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl ScoutConfig {
    pub fn report_format(&self) -> Option<&str> {
        self.report
            .as_ref()
            .and_then(|report| report.format.as_deref())
    }

    pub fn title(&self) -> &str {
        self.report
            .as_ref()
            .and_then(|report| report.title.as_deref())
            .unwrap_or(DEFAULT_TITLE)
    }

    pub fn log_level(&self) -> &str {
        self.logging
            .as_ref()
            .and_then(|logging| logging.level.as_deref())
            .unwrap_or(DEFAULT_LOG_LEVEL)
    }

    pub fn validate(&self) -> Result<(), ScoutError> {
        if let Some(format) = self.report_format() {
            if !matches!(format, "md" | "json") {
                return Err(ScoutError::ConfigParse(format!(
                    "report.format must be \"md\" or \"json\", got \"{format}\""
                )));
            }
        }
        Ok(())
    }
}
