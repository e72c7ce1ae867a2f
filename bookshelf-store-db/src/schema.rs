// SPDX-FileCopyrightText: 2025 Jörg Thalheim
// SPDX-License-Identifier: MIT

//! Database schema for the library catalog.

/// Tables created by [`CatalogDb::initialize`](crate::CatalogDb::initialize).
pub(crate) const TABLES: [&str; 3] = ["books", "members", "loans"];

/// Catalog schema SQL (books, members, loans)
///
/// The foreign keys on `loans` are declarative only: enforcement is left off,
/// so a loan may name a member that was never registered.
pub(crate) const SCHEMA_SQL: &str = r#"
create table if not exists books (
    book_id integer primary key,
    title   text not null,
    author  text not null,
    isbn    text unique,
    status  text not null default 'available'
);

create table if not exists members (
    member_id integer primary key,
    name      text not null,
    email     text unique,
    join_date date
);

create table if not exists loans (
    loan_id     integer primary key,
    book_id     integer,
    member_id   integer,
    loan_date   date,
    due_date    date,
    return_date date,
    foreign key (book_id) references books (book_id),
    foreign key (member_id) references members (member_id)
);
"#;
