use std::path::{Path, PathBuf};

use crate::domain::CATEGORIES_FILE_NAME;

/// File locations the ledger works with, resolved once at startup and
/// handed to [`crate::application::LedgerService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_path: PathBuf,
    pub categories_path: PathBuf,
}

impl Config {
    /// Use `database_path` and keep the category document next to it.
    pub fn new(database_path: impl Into<PathBuf>) -> Self {
        let database_path = database_path.into();
        let categories_path = categories_beside(&database_path);
        Self {
            database_path,
            categories_path,
        }
    }

    pub fn with_categories_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.categories_path = path.into();
        self
    }
}

/// Default category document location: same directory as the database.
pub fn categories_beside(database_path: &Path) -> PathBuf {
    match database_path.parent() {
        Some(dir) => dir.join(CATEGORIES_FILE_NAME),
        None => PathBuf::from(CATEGORIES_FILE_NAME),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_default_beside_database() {
        let config = Config::new("/var/lib/ledger/expenses.db");
        assert_eq!(
            config.categories_path,
            PathBuf::from("/var/lib/ledger/categories.json")
        );
    }

    #[test]
    fn test_bare_database_name() {
        let config = Config::new("expenses.db");
        assert_eq!(config.categories_path, PathBuf::from("categories.json"));
    }

    #[test]
    fn test_explicit_categories_path() {
        let config = Config::new("expenses.db").with_categories_path("/etc/ledger/cats.json");
        assert_eq!(config.database_path, PathBuf::from("expenses.db"));
        assert_eq!(config.categories_path, PathBuf::from("/etc/ledger/cats.json"));
    }
}
