//! Error type shared by the loader, the deriver and the exporters.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// A required raw column is absent from the header row.
    #[error("missing required column '{0}'")]
    MissingColumn(String),
    /// A cell in a required numeric column could not be read as a number.
    /// `row` is 1-based and excludes the header.
    #[error("invalid value '{value}' in column '{column}' at row {row}")]
    InvalidValue {
        row: usize,
        column: String,
        value: String,
    },
    #[error("no data loaded")]
    NoData,
}

pub type Result<T> = std::result::Result<T, DashboardError>;
