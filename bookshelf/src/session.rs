//! The lending session run by the `bookshelf` binary.

use bookshelf_store_db::{Book, CatalogDb, OverdueLoan};
use log::{info, warn};

use crate::error::AppError;

/// Catalog state after a session.
#[derive(Debug)]
pub struct Report {
    pub books: Vec<Book>,
    pub overdue: Vec<OverdueLoan>,
}

/// Add a book and a member, lend the book, take it back.
///
/// Duplicates from an earlier run against the same database are reported
/// and skipped.
pub fn run(db: &mut CatalogDb) -> Result<Report, AppError> {
    if db.add_book("Harry Potter", "J.K. Rowling", Some("12345"))? {
        info!("Added \"Harry Potter\"");
    } else {
        warn!("A book with ISBN 12345 is already catalogued");
    }

    if db.add_member("Bob", "bob@email.com")? {
        info!("Registered Bob");
    } else {
        warn!("bob@email.com is already registered");
    }

    if db.loan_book(1, 1)? {
        info!("Book 1 loaned to member 1");
    } else {
        warn!("Book 1 is not available");
    }

    db.return_book(1)?;
    info!("Book 1 returned");

    Ok(Report {
        books: db.search_books("")?,
        overdue: db.get_overdue_books()?,
    })
}
