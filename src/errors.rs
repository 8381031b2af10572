//! Error types.
//!
//! `DaoError` is what the product repository returns: every rusqlite failure
//! is caught at the repository boundary and re-signaled as one of its three
//! kinds. `AppError` is the CLI-level error that wraps it together with input
//! parsing and configuration failures.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DaoError {
    /// The operation was called on an entity in the wrong lifecycle state
    /// (no id for update/remove, an id already present for save).
    #[error("{0}")]
    Precondition(String),

    #[error("Product with id = {id} does not exist")]
    NotFound { id: i64 },

    #[error("{message}")]
    Storage {
        message: String,
        #[source]
        source: Option<rusqlite::Error>,
    },
}

impl DaoError {
    pub fn storage(message: impl Into<String>, source: rusqlite::Error) -> Self {
        DaoError::Storage {
            message: message.into(),
            source: Some(source),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, DaoError::NotFound { .. })
    }

    pub fn is_precondition(&self) -> bool {
        matches!(self, DaoError::Precondition(_))
    }

    pub fn is_storage(&self) -> bool {
        matches!(self, DaoError::Storage { .. })
    }
}

pub type DaoResult<T> = Result<T, DaoError>;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error(transparent)]
    Dao(#[from] DaoError),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
