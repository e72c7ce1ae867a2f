use bookshelf::config::Config;
use bookshelf::error::AppError;
use bookshelf::session;
use bookshelf_store_db::{CatalogDb, OpenMode};
use log::info;
use std::path::PathBuf;

fn main() -> Result<(), AppError> {
    // Load configuration
    let config = match std::env::args_os().nth(1) {
        Some(path) => Config::from_file(&PathBuf::from(path))?,
        None => Config::default(),
    };

    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    info!("Database path: {}", config.db_path.display());
    let mut db = CatalogDb::open(&config.db_path, OpenMode::Create)?;

    let report = session::run(&mut db)?;
    for book in &report.books {
        println!(
            "{:>4}  {:<30} {:<20} {:<14} {}",
            book.book_id,
            book.title,
            book.author,
            book.isbn.as_deref().unwrap_or("-"),
            book.status
        );
    }
    for loan in &report.overdue {
        println!(
            "overdue: {} ({}), due {}",
            loan.title, loan.member_name, loan.due_date
        );
    }

    db.close()?;
    Ok(())
}
