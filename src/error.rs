use thiserror::Error;

use crate::data::loader::LoadError;

/// Diagnostics for a filter or aggregation that cannot run.
///
/// Each variant is reported as one line on standard output; the process
/// still exits successfully.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("unsupported operator not found, expected one of: == != >= <= > <")]
    OperatorNotFound,

    #[error("invalid filter format, use: column operator value (example: --filter price > 500)")]
    InvalidFilterFormat,

    #[error("invalid aggregation format, use: function(column) (example: --agg \"avg(price)\")")]
    InvalidAggFormat,

    #[error("column '{0}' not found")]
    ColumnNotFound(String),

    #[error("unsupported function: '{0}'")]
    UnsupportedFunction(String),

    #[error("value '{0}' is not a number")]
    NotANumber(String),

    #[error("no data to compute")]
    NoData,
}

/// Everything that stops a run before a report is produced.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error("failed to render table: {0}")]
    Render(#[from] arrow::error::ArrowError),
}

impl AppError {
    /// Process exit code for this failure. Query diagnostics are ordinary
    /// outcomes; an unreadable file or a rendering failure is not.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Query(_) => 0,
            AppError::Load(_) | AppError::Render(_) => 1,
        }
    }
}
