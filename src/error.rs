use thiserror::Error;

/// Raised when the supplied attributes cannot form a gateway request.
///
/// No partially built request is ever returned alongside this error.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConstructionError {
    #[error("missing required field: {0}")]
    MissingRequiredField(&'static str),
    #[error("invalid value for {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },
}

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Construction error: {0}")]
    Construction(#[from] ConstructionError),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GatewayError>;
