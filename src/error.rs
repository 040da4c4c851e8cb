use std::io;

use thiserror::Error;

pub type DeparturesResult<T> = Result<T, DeparturesError>;

#[derive(Debug, Error)]
pub enum DeparturesError {
    #[error("System input/output error: {0}")]
    IoError(#[from] io::Error),
    #[error("Failed to read scenario: {0}")]
    ScenarioError(#[from] serde_json::Error),
    #[error("Time error: {0}")]
    TimeError(#[from] jiff::Error),
    #[error("Unknown time zone abbreviation: {0}")]
    UnknownTimeZone(String),
    #[error("Day of month out of range: {0}")]
    DayOutOfRange(i8),
    #[error("Unknown flight status: {0}")]
    UnknownStatus(String),
    #[error("Cannot format {0} as currency")]
    UnformattableAmount(f64),
}
