// SPDX-FileCopyrightText: 2025 Jörg Thalheim
// SPDX-License-Identifier: MIT

//! Write operations for the catalog.
//!
//! Lending rule violations are reported as `Ok(false)`; anything else SQLite
//! complains about is returned as an error.

use chrono::NaiveDate;
use rusqlite::{OptionalExtension, params};
use tracing::debug;

use crate::connection::CatalogDb;
use crate::error::{Error, Result, is_constraint_violation};
use crate::types::{BookStatus, due_date_for, today};

/// Turn a constraint violation into `Ok(false)`.
fn inserted(result: rusqlite::Result<usize>) -> Result<bool> {
    match result {
        Ok(_) => Ok(true),
        Err(e) if is_constraint_violation(&e) => {
            debug!("Insert rejected: {e}");
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}

impl CatalogDb {
    /// Add a book to the catalog as `available`.
    ///
    /// Returns `false` if another book already has this ISBN. Books without
    /// an ISBN never conflict.
    pub fn add_book(&self, title: &str, author: &str, isbn: Option<&str>) -> Result<bool> {
        inserted(self.conn.execute(
            "INSERT INTO books (title, author, isbn, status) VALUES (?1, ?2, ?3, ?4)",
            params![title, author, isbn, BookStatus::Available],
        ))
    }

    /// Register a new member who joins today.
    ///
    /// Returns `false` if the email is already registered.
    pub fn add_member(&self, name: &str, email: &str) -> Result<bool> {
        self.add_member_on(name, email, today())
    }

    /// Register a new member with an explicit join date.
    pub fn add_member_on(&self, name: &str, email: &str, join_date: NaiveDate) -> Result<bool> {
        inserted(self.conn.execute(
            "INSERT INTO members (name, email, join_date) VALUES (?1, ?2, ?3)",
            params![name, email, join_date],
        ))
    }

    /// Lend a book to a member, due back in fourteen days.
    ///
    /// Returns `false` without touching anything if the book does not exist
    /// or is not `available`. The member ID is not checked.
    pub fn loan_book(&mut self, book_id: i64, member_id: i64) -> Result<bool> {
        self.loan_book_on(book_id, member_id, today())
    }

    /// Lend a book with an explicit loan date.
    ///
    /// Fails with [`Error::DateOutOfRange`] if the due date cannot be
    /// represented.
    pub fn loan_book_on(
        &mut self,
        book_id: i64,
        member_id: i64,
        loan_date: NaiveDate,
    ) -> Result<bool> {
        let due_date = due_date_for(loan_date).ok_or(Error::DateOutOfRange(loan_date))?;
        let tx = self.conn.transaction()?;

        // Compared as text: any status other than `available`, including
        // NULL or unrecognised values, means the book cannot be loaned.
        let status: Option<String> = tx
            .query_row(
                "SELECT status FROM books WHERE book_id = ?1",
                params![book_id],
                |row| row.get::<_, Option<String>>(0),
            )
            .optional()?
            .flatten();

        if status.as_deref() != Some(BookStatus::Available.as_str()) {
            debug!("Book {book_id} cannot be loaned (status: {status:?})");
            return Ok(false);
        }

        tx.execute(
            r#"
            INSERT INTO loans (book_id, member_id, loan_date, due_date)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            params![book_id, member_id, loan_date, due_date],
        )?;
        tx.execute(
            "UPDATE books SET status = ?2 WHERE book_id = ?1",
            params![book_id, BookStatus::Loaned],
        )?;

        tx.commit()?;
        debug!("Loaned book {book_id} to member {member_id}, due {due_date}");
        Ok(true)
    }

    /// Take a book back today.
    ///
    /// Closes the most recent outstanding loan for the book, if any, and
    /// marks the book `available` either way.
    pub fn return_book(&mut self, book_id: i64) -> Result<()> {
        self.return_book_on(book_id, today())
    }

    /// Take a book back with an explicit return date.
    pub fn return_book_on(&mut self, book_id: i64, return_date: NaiveDate) -> Result<()> {
        let tx = self.conn.transaction()?;

        let closed = tx.execute(
            r#"
            UPDATE loans SET return_date = ?2
            WHERE loan_id = (
                SELECT MAX(loan_id) FROM loans
                WHERE book_id = ?1 AND return_date IS NULL
            )
            "#,
            params![book_id, return_date],
        )?;
        tx.execute(
            "UPDATE books SET status = ?2 WHERE book_id = ?1",
            params![book_id, BookStatus::Available],
        )?;

        tx.commit()?;
        if closed == 0 {
            debug!("Book {book_id} returned with no outstanding loan");
        } else {
            debug!("Book {book_id} returned on {return_date}");
        }
        Ok(())
    }
}
