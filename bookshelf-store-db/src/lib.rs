// SPDX-FileCopyrightText: 2025 Jörg Thalheim
// SPDX-License-Identifier: MIT

//! SQLite catalog store for library books, members and loans.
//!
//! This crate owns the three-table schema and applies the lending rules inline
//! with each operation: a book can only be loaned while `available`, a loan is
//! due fourteen days after it was taken out, and returning a book always puts
//! it back on the shelf.
//!
//! # Key Features
//!
//! - Idempotent schema setup (books, members, loans)
//! - Duplicate ISBN / email detection reported as `false`, not as an error
//! - Loan and return writes applied in a single transaction
//! - Title/author search and overdue listing
//! - In-memory database for testing
//!
//! # Example
//!
//! ```ignore
//! use bookshelf_store_db::CatalogDb;
//!
//! let mut db = CatalogDb::open_default()?;
//! db.add_book("Dune", "Frank Herbert", Some("999"))?;
//! db.add_member("Alice", "alice@x.com")?;
//! if db.loan_book(1, 1)? {
//!     println!("due back on {}", db.outstanding_loan(1)?.unwrap().due_date);
//! }
//! db.return_book(1)?;
//! db.close()?;
//! ```
//!
//! A `CatalogDb` holds exactly one connection. It can be moved to another
//! thread but not shared between threads.

mod connection;
mod error;
mod query;
mod schema;
mod types;
mod write;

pub use connection::{CatalogDb, DEFAULT_DB_NAME, OpenMode};
pub use error::{Error, Result};
pub use types::*;
