//! Error types for the reporter.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Environment query failed: {0}")]
    EnvironmentQuery(String),

    #[error("Unknown locale: {0}")]
    InvalidLocale(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
