// SPDX-FileCopyrightText: 2025 Jörg Thalheim
// SPDX-License-Identifier: MIT

//! Read query operations for the catalog.

use chrono::NaiveDate;
use rusqlite::{OptionalExtension, Row, params};

use crate::connection::CatalogDb;
use crate::error::Result;
use crate::types::{Book, Loan, Member, OverdueLoan, today};

fn book_from_row(row: &Row<'_>) -> rusqlite::Result<Book> {
    Ok(Book {
        book_id: row.get(0)?,
        title: row.get(1)?,
        author: row.get(2)?,
        isbn: row.get(3)?,
        status: row.get(4)?,
    })
}

fn loan_from_row(row: &Row<'_>) -> rusqlite::Result<Loan> {
    Ok(Loan {
        loan_id: row.get(0)?,
        book_id: row.get(1)?,
        member_id: row.get(2)?,
        loan_date: row.get(3)?,
        due_date: row.get(4)?,
        return_date: row.get(5)?,
    })
}

impl CatalogDb {
    /// Find books whose title or author contains `query`.
    ///
    /// Uses SQLite `LIKE`, so the match ignores ASCII case. `%` and `_` in
    /// the query act as wildcards. Rows come back in storage order.
    pub fn search_books(&self, query: &str) -> Result<Vec<Book>> {
        let mut stmt = self.conn.prepare_cached(
            r#"
            SELECT book_id, title, author, isbn, status
            FROM books
            WHERE title LIKE ?1 OR author LIKE ?1
            "#,
        )?;

        let pattern = format!("%{query}%");
        let books = stmt
            .query_map(params![pattern], book_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(books)
    }

    /// List outstanding loans that were due before today.
    pub fn get_overdue_books(&self) -> Result<Vec<OverdueLoan>> {
        self.get_overdue_books_on(today())
    }

    /// List outstanding loans due strictly before `today`.
    ///
    /// Loans whose book or member row is missing are left out by the join.
    pub fn get_overdue_books_on(&self, today: NaiveDate) -> Result<Vec<OverdueLoan>> {
        let mut stmt = self.conn.prepare_cached(
            r#"
            SELECT b.title, m.name, l.due_date
            FROM loans l
            JOIN books b ON l.book_id = b.book_id
            JOIN members m ON l.member_id = m.member_id
            WHERE l.return_date IS NULL
              AND l.due_date < ?1
            "#,
        )?;

        let mut overdue = Vec::new();
        let mut rows = stmt.query(params![today])?;
        while let Some(row) = rows.next()? {
            overdue.push(OverdueLoan {
                title: row.get(0)?,
                member_name: row.get(1)?,
                due_date: row.get(2)?,
            });
        }
        Ok(overdue)
    }

    /// Query a book by ID.
    ///
    /// Returns `None` if the book is not in the catalog.
    pub fn get_book(&self, book_id: i64) -> Result<Option<Book>> {
        let mut stmt = self.conn.prepare_cached(
            r#"
            SELECT book_id, title, author, isbn, status
            FROM books
            WHERE book_id = ?1
            "#,
        )?;
        Ok(stmt.query_row(params![book_id], book_from_row).optional()?)
    }

    /// Query a member by ID.
    pub fn get_member(&self, member_id: i64) -> Result<Option<Member>> {
        let mut stmt = self.conn.prepare_cached(
            r#"
            SELECT member_id, name, email, join_date
            FROM members
            WHERE member_id = ?1
            "#,
        )?;

        let member = stmt
            .query_row(params![member_id], |row| {
                Ok(Member {
                    member_id: row.get(0)?,
                    name: row.get(1)?,
                    email: row.get(2)?,
                    join_date: row.get(3)?,
                })
            })
            .optional()?;
        Ok(member)
    }

    /// Query a loan by ID.
    pub fn get_loan(&self, loan_id: i64) -> Result<Option<Loan>> {
        let mut stmt = self.conn.prepare_cached(
            r#"
            SELECT loan_id, book_id, member_id, loan_date, due_date, return_date
            FROM loans
            WHERE loan_id = ?1
            "#,
        )?;
        Ok(stmt.query_row(params![loan_id], loan_from_row).optional()?)
    }

    /// All loans of a book, oldest first.
    pub fn loans_for_book(&self, book_id: i64) -> Result<Vec<Loan>> {
        let mut stmt = self.conn.prepare_cached(
            r#"
            SELECT loan_id, book_id, member_id, loan_date, due_date, return_date
            FROM loans
            WHERE book_id = ?1
            ORDER BY loan_id
            "#,
        )?;

        let loans = stmt
            .query_map(params![book_id], loan_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(loans)
    }

    /// The most recent outstanding loan of a book, if it is out.
    pub fn outstanding_loan(&self, book_id: i64) -> Result<Option<Loan>> {
        let mut stmt = self.conn.prepare_cached(
            r#"
            SELECT loan_id, book_id, member_id, loan_date, due_date, return_date
            FROM loans
            WHERE book_id = ?1 AND return_date IS NULL
            ORDER BY loan_id DESC
            LIMIT 1
            "#,
        )?;
        Ok(stmt.query_row(params![book_id], loan_from_row).optional()?)
    }

    /// Count the number of books.
    pub fn count_books(&self) -> Result<u64> {
        self.count("SELECT COUNT(*) FROM books")
    }

    /// Count the number of members.
    pub fn count_members(&self) -> Result<u64> {
        self.count("SELECT COUNT(*) FROM members")
    }

    /// Count the number of loans, returned or not.
    pub fn count_loans(&self) -> Result<u64> {
        self.count("SELECT COUNT(*) FROM loans")
    }

    fn count(&self, sql: &str) -> Result<u64> {
        let count: i64 = self.conn.query_row(sql, [], |row| row.get(0))?;
        Ok(count as u64)
    }
}
