use thiserror::Error;
use tradeq_core::{CoreError, QueryError, ValidationError};

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error("failed to load trades from {path}: {source}")]
    Load { path: String, source: CoreError },

    #[error("strict mode failed: warnings={warning_count}")]
    StrictModeViolation { warning_count: usize },

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) | Self::Core(CoreError::Validation(_)) => 2,
            Self::Query(_) | Self::Core(CoreError::Query(_)) => 3,
            Self::StrictModeViolation { .. } => 5,
            Self::Load { .. } | Self::Core(_) | Self::Serialization(_) | Self::Io(_) => 10,
        }
    }
}
