//! Error types for catalog queries.

use std::time::Duration;

use thiserror::Error;

use crate::framework::FrameworkError;

/// Errors surfaced by every catalog operation.
///
/// An empty result is never an error.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// A parameter is malformed or out of range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The store is unreachable, or its data could not be read.
    #[error("Data access error: {0}")]
    DataAccess(String),

    /// The caller's deadline elapsed before a reply arrived.
    #[error("Query timed out after {0:?}")]
    Timeout(Duration),
}

impl From<FrameworkError> for CatalogError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::Timeout(after) => CatalogError::Timeout(after),
            other => CatalogError::DataAccess(other.to_string()),
        }
    }
}
