// SPDX-FileCopyrightText: 2025 Jörg Thalheim
// SPDX-License-Identifier: MIT

//! Error types for catalog store operations.

use std::path::PathBuf;

use rusqlite::ErrorCode;
use thiserror::Error;

/// Result type for catalog store operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during catalog store operations.
///
/// Lending rule violations never show up here; they are reported as `false`
/// by the operation that detected them.
#[derive(Error, Debug)]
pub enum Error {
    /// SQLite error
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Failed to open database with context
    #[error("Failed to open database at '{path}': {source}")]
    DatabaseOpen {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Database file not found
    #[error("Database not found at: {0}")]
    DatabaseNotFound(PathBuf),

    /// A loan date so late that its due date cannot be represented
    #[error("Due date out of range for loan date {0}")]
    DateOutOfRange(chrono::NaiveDate),

    /// Closing the connection failed
    #[error("Failed to close database: {0}")]
    Close(#[source] rusqlite::Error),
}

/// Whether a SQLite error is a constraint violation (UNIQUE, NOT NULL, ...).
pub(crate) fn is_constraint_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _) if e.code == ErrorCode::ConstraintViolation
    )
}
