use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use bookshelf_store_db::DEFAULT_DB_NAME;

use crate::error::{AppError, IoContext};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Path to the catalog database
    pub db_path: PathBuf,

    /// Log level
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_NAME),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let contents = std::fs::read_to_string(path)
            .io_context(|| format!("Failed to read config file at {}", path.display()))?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.db_path, PathBuf::from("library.db"));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"db_path = "/srv/library/catalog.db""#).unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.db_path, PathBuf::from("/srv/library/catalog.db"));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_unknown_field_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "workers = 4").unwrap();

        let err = Config::from_file(file.path()).unwrap_err();
        assert!(matches!(err, AppError::Toml(_)));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::from_file(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, AppError::Io { .. }));
    }
}
