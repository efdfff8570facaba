pub mod config;
pub mod evaluation;
pub mod report;
pub mod scoring;
