// File: crates/dash-core/src/error.rs
// Summary: Error taxonomy shared by the kernel operations.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashError {
    /// Generator or series construction received a value it cannot honour.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("statistics requested on an empty series")]
    EmptySeries,

    /// Chart selection label outside the four known kinds.
    #[error("unsupported chart kind: {0:?}")]
    UnsupportedChartKind(String),
}

pub type Result<T> = std::result::Result<T, DashError>;
