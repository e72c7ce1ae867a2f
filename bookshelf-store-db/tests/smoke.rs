// SPDX-FileCopyrightText: 2025 Jörg Thalheim
// SPDX-License-Identifier: MIT

//! Smoke tests for bookshelf-store-db.
//!
//! These tests verify the schema and basic catalog operations work correctly
//! using an in-memory database.

use bookshelf_store_db::{BookStatus, CatalogDb, Error, OpenMode};
use rstest::rstest;

/// Verify schema creation and empty queries work.
#[test]
fn test_schema_creation() {
    let db = CatalogDb::open_memory().unwrap();
    assert!(db.has_schema().unwrap());
    assert_eq!(db.count_books().unwrap(), 0);
    assert_eq!(db.count_members().unwrap(), 0);
    assert_eq!(db.count_loans().unwrap(), 0);
    assert!(db.search_books("").unwrap().is_empty());
    assert!(db.get_overdue_books().unwrap().is_empty());
}

/// Verify book insertion and query roundtrip.
#[test]
fn test_book_roundtrip() {
    let db = CatalogDb::open_memory().unwrap();
    assert!(db.add_book("Dune", "Frank Herbert", Some("999")).unwrap());

    let book = db.get_book(1).unwrap().unwrap();
    assert_eq!(book.title, "Dune");
    assert_eq!(book.author, "Frank Herbert");
    assert_eq!(book.isbn.as_deref(), Some("999"));
    assert_eq!(book.status, BookStatus::Available);
    assert!(db.get_book(2).unwrap().is_none());
}

#[test]
fn test_duplicate_isbn_rejected() {
    let db = CatalogDb::open_memory().unwrap();
    assert!(db.add_book("Dune", "Frank Herbert", Some("999")).unwrap());
    assert!(!db.add_book("Dune Messiah", "Frank Herbert", Some("999")).unwrap());
    assert_eq!(db.count_books().unwrap(), 1);
    assert_eq!(db.get_book(1).unwrap().unwrap().title, "Dune");
}

#[test]
fn test_books_without_isbn_never_conflict() {
    let db = CatalogDb::open_memory().unwrap();
    assert!(db.add_book("Notes", "Anonymous", None).unwrap());
    assert!(db.add_book("More Notes", "Anonymous", None).unwrap());
    assert_eq!(db.count_books().unwrap(), 2);
    assert_eq!(db.get_book(2).unwrap().unwrap().isbn, None);
}

#[test]
fn test_member_roundtrip_and_duplicate_email() {
    let db = CatalogDb::open_memory().unwrap();
    assert!(db.add_member("Alice", "alice@x.com").unwrap());
    assert!(!db.add_member("Alice Again", "alice@x.com").unwrap());
    assert_eq!(db.count_members().unwrap(), 1);

    let member = db.get_member(1).unwrap().unwrap();
    assert_eq!(member.name, "Alice");
    assert_eq!(member.email.as_deref(), Some("alice@x.com"));
    assert_eq!(member.join_date, Some(chrono::Local::now().date_naive()));
}

#[rstest]
#[case::lowercase("potter")]
#[case::uppercase("POTTER")]
#[case::author("rowling")]
#[case::exact("Harry Potter")]
fn test_search_ignores_case(#[case] query: &str) {
    let db = CatalogDb::open_memory().unwrap();
    db.add_book("Harry Potter", "J.K. Rowling", Some("12345"))
        .unwrap();
    db.add_book("Dune", "Frank Herbert", Some("999")).unwrap();

    let found = db.search_books(query).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "Harry Potter");
}

#[test]
fn test_search_matches_title_or_author() {
    let db = CatalogDb::open_memory().unwrap();
    db.add_book("The Hobbit", "J.R.R. Tolkien", Some("1")).unwrap();
    db.add_book("Tolkien: A Biography", "Humphrey Carpenter", Some("2"))
        .unwrap();
    db.add_book("Dune", "Frank Herbert", Some("3")).unwrap();

    let titles: Vec<_> = db
        .search_books("tolkien")
        .unwrap()
        .into_iter()
        .map(|b| b.title)
        .collect();
    assert_eq!(titles, vec!["The Hobbit", "Tolkien: A Biography"]);
    assert!(db.search_books("asimov").unwrap().is_empty());
}

/// The on-disk database survives reopening and the schema setup is idempotent.
#[test]
fn test_reopen_file_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("library.db");

    let db = CatalogDb::open(&path, OpenMode::Create).unwrap();
    assert!(db.add_book("Dune", "Frank Herbert", Some("999")).unwrap());
    db.close().unwrap();

    let db = CatalogDb::open(&path, OpenMode::ReadWrite).unwrap();
    assert!(db.has_schema().unwrap());
    assert_eq!(db.count_books().unwrap(), 1);
    assert!(!db.add_book("Dune", "Frank Herbert", Some("999")).unwrap());
}

#[test]
fn test_open_missing_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.db");

    let err = CatalogDb::open(&path, OpenMode::ReadWrite).unwrap_err();
    assert!(matches!(err, Error::DatabaseNotFound(p) if p == path));
    assert!(!path.exists());
}
