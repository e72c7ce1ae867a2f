// SPDX-FileCopyrightText: 2025 Jörg Thalheim
// SPDX-License-Identifier: MIT

//! Database row types for the library catalog.

use std::fmt;
use std::str::FromStr;

use chrono::{Days, NaiveDate};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};

/// Length of a loan in days.
pub const LOAN_PERIOD_DAYS: u64 = 14;

/// The local calendar date, used by operations that stamp "today".
pub(crate) fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Due date for a loan taken out on `loan_date`.
///
/// `None` if the due date falls past the last representable date.
pub fn due_date_for(loan_date: NaiveDate) -> Option<NaiveDate> {
    loan_date.checked_add_days(Days::new(LOAN_PERIOD_DAYS))
}

/// Shelf status of a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BookStatus {
    #[default]
    Available,
    Loaned,
}

impl BookStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            BookStatus::Available => "available",
            BookStatus::Loaned => "loaned",
        }
    }
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status text that is neither `available` nor `loaned`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown book status: {0:?}")]
pub struct UnknownStatus(pub String);

impl FromStr for BookStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(BookStatus::Available),
            "loaned" => Ok(BookStatus::Loaned),
            other => Err(UnknownStatus(other.to_owned())),
        }
    }
}

impl ToSql for BookStatus {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for BookStatus {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}

/// A row from the books table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    /// Database row ID
    pub book_id: i64,
    pub title: String,
    pub author: String,
    /// Unique when present
    pub isbn: Option<String>,
    pub status: BookStatus,
}

impl Book {
    pub fn is_available(&self) -> bool {
        self.status == BookStatus::Available
    }
}

/// A registered library member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    /// Database row ID
    pub member_id: i64,
    pub name: String,
    /// Unique when present
    pub email: Option<String>,
    /// Date the member was registered; the column is nullable, so rows
    /// written by other tools may lack it
    pub join_date: Option<NaiveDate>,
}

/// A book lent to a member.
///
/// A loan with no return date is outstanding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loan {
    /// Database row ID
    pub loan_id: i64,
    pub book_id: i64,
    /// Not checked against the members table
    pub member_id: i64,
    pub loan_date: NaiveDate,
    pub due_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
}

impl Loan {
    pub fn is_outstanding(&self) -> bool {
        self.return_date.is_none()
    }

    /// Outstanding and due strictly before `today`.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.is_outstanding() && self.due_date < today
    }
}

/// One line of the overdue report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverdueLoan {
    /// Title of the loaned book
    pub title: String,
    /// Name of the borrowing member
    pub member_name: String,
    pub due_date: NaiveDate,
}
