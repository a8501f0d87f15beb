//! Parse errors for URL-carried values.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("unknown sort field: {0}")]
    UnknownSortField(String),
    #[error("unknown sex: {0}")]
    UnknownSex(String),
    #[error("invalid century: {0}")]
    InvalidCentury(String),
}
