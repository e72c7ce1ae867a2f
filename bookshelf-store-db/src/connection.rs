// SPDX-FileCopyrightText: 2025 Jörg Thalheim
// SPDX-License-Identifier: MIT

//! Database connection management.

use std::path::Path;

use rusqlite::{Connection, OpenFlags};
use tracing::debug;

use crate::error::{Error, Result};
use crate::schema::{SCHEMA_SQL, TABLES};

/// File name used by [`CatalogDb::open_default`].
pub const DEFAULT_DB_NAME: &str = "library.db";

/// Database open mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    /// Read-write access to an existing database
    ReadWrite,
    /// Create new database if it doesn't exist
    Create,
}

/// SQLite-backed catalog of books, members and loans.
///
/// Owns a single connection for its whole lifetime. The connection is released
/// when the store is dropped, or explicitly through [`CatalogDb::close`].
#[derive(Debug)]
pub struct CatalogDb {
    pub(crate) conn: Connection,
}

impl CatalogDb {
    /// Open or create `library.db` in the current directory.
    pub fn open_default() -> Result<Self> {
        Self::open(DEFAULT_DB_NAME, OpenMode::Create)
    }

    /// Open a database at a custom path and make sure the schema exists.
    pub fn open<P: AsRef<Path>>(path: P, mode: OpenMode) -> Result<Self> {
        let path = path.as_ref();
        let flags = match mode {
            OpenMode::ReadWrite => {
                if !path.exists() {
                    return Err(Error::DatabaseNotFound(path.to_owned()));
                }
                OpenFlags::SQLITE_OPEN_READ_WRITE
            }
            OpenMode::Create => OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_CREATE,
        };

        let conn = Connection::open_with_flags(path, flags).map_err(|e| Error::DatabaseOpen {
            path: path.to_owned(),
            source: e,
        })?;
        let db = Self { conn };
        db.configure_pragmas()?;
        db.initialize()?;

        debug!("Opened database at {} ({:?})", path.display(), mode);
        Ok(db)
    }

    /// Create an in-memory database (for testing).
    ///
    /// The database is initialized with the full schema.
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.configure_pragmas()?;
        db.initialize()?;
        debug!("Created in-memory database");
        Ok(db)
    }

    /// Configure SQLite pragmas.
    ///
    /// `foreign_keys` stays off: loans are allowed to reference members that
    /// do not exist.
    fn configure_pragmas(&self) -> Result<()> {
        self.conn.execute_batch(
            r#"
            PRAGMA foreign_keys = OFF;
            PRAGMA temp_store = MEMORY;
            "#,
        )?;
        Ok(())
    }

    /// Create the books, members and loans tables if they are missing.
    ///
    /// Safe to call any number of times.
    pub fn initialize(&self) -> Result<()> {
        self.conn.execute_batch(SCHEMA_SQL)?;
        debug!("Initialized catalog schema");
        Ok(())
    }

    /// Check if all catalog tables exist.
    pub fn has_schema(&self) -> Result<bool> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name=?1")?;
        for table in TABLES {
            let count: i64 = stmt.query_row([table], |row| row.get(0))?;
            if count == 0 {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Get raw connection (for advanced usage).
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Close the connection, reporting any error SQLite raises while doing so.
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| Error::Close(e))?;
        debug!("Closed catalog database");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_is_idempotent() {
        let db = CatalogDb::open_memory().unwrap();
        db.initialize().unwrap();
        db.initialize().unwrap();
        assert!(db.has_schema().unwrap());
    }

    #[test]
    fn test_has_schema_detects_missing_table() {
        let db = CatalogDb::open_memory().unwrap();
        db.connection().execute_batch("DROP TABLE loans").unwrap();
        assert!(!db.has_schema().unwrap());
        db.initialize().unwrap();
        assert!(db.has_schema().unwrap());
    }
}
