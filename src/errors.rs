// Copyright (c) 2025 - Cowboy AI, Inc.
//! Error types for catalog operations

use thiserror::Error;

/// Errors that can occur while paging, merging or resolving catalog fields
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// A query argument was out of range (e.g. `pageSize < 1`)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The `after` cursor does not identify any item in the current list
    #[error("Cursor not found: {0}")]
    CursorNotFound(String),

    /// The upstream collaborator failed to produce the full list
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    /// A dynamic write to a reactive field had the wrong shape
    #[error("Invalid value for reactive field '{field}': {reason}")]
    InvalidCellValue { field: String, reason: String },

    /// The requested field has no registered policy
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CatalogError {
    /// Stable machine-readable kind, reported alongside field errors
    pub fn kind(&self) -> &'static str {
        match self {
            CatalogError::InvalidArgument(_) => "INVALID_ARGUMENT",
            CatalogError::CursorNotFound(_) => "CURSOR_NOT_FOUND",
            CatalogError::UpstreamUnavailable(_) => "UPSTREAM_UNAVAILABLE",
            CatalogError::InvalidCellValue { .. } => "INVALID_CELL_VALUE",
            CatalogError::UnknownField(_) => "UNKNOWN_FIELD",
            CatalogError::Configuration(_) => "CONFIGURATION",
            CatalogError::Serialization(_) => "SERIALIZATION",
        }
    }
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Serialization(err.to_string())
    }
}
