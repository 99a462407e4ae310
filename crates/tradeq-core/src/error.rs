use thiserror::Error;

/// Validation and contract errors exposed by `tradeq-core`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("field '{field}' cannot be empty")]
    EmptyField { field: &'static str },

    #[error("timestamp must be RFC3339: '{value}'")]
    InvalidTimestamp { value: String },

    #[error("invalid trade type '{value}', expected BUY or SELL")]
    InvalidTradeType { value: String },

    #[error("field '{field}' must be finite")]
    NonFiniteValue { field: &'static str },
    #[error("field '{field}' must be non-negative")]
    NegativeValue { field: &'static str },

    #[error("page must be >= 1, got {value}")]
    InvalidPage { value: u64 },
    #[error("limit must be between {min} and {max}, got {value}")]
    InvalidLimit { value: u64, min: u64, max: u64 },

    #[error("duplicate trade id '{trade_id}'")]
    DuplicateTradeId { trade_id: String },

    #[error("request_id must be at least 8 characters")]
    InvalidRequestId,
    #[error("schema_version must match vMAJOR.MINOR.PATCH: '{value}'")]
    InvalidSchemaVersion { value: String },
}

/// Query configuration errors raised before any record is evaluated.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum QueryError {
    #[error("invalid sort field '{field}'")]
    InvalidSortField { field: String },

    #[error("invalid {bound} range: lower bound {lower} is after upper bound {upper}")]
    InvalidRange {
        bound: &'static str,
        lower: String,
        upper: String,
    },
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
