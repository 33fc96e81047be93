use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::domain::{CategoryDocument, CategoryTotal, DateRange, Expense, ExpenseId, NewExpense};
use crate::storage::{CategoryFile, Repository};

use super::AppError;

/// Confirmation message returned after an expense is stored.
pub const EXPENSE_ADDED_MESSAGE: &str = "Expense added successfully.";

/// Application service providing the ledger operations.
/// This is the primary interface for any client (CLI, tool server, tests).
pub struct LedgerService {
    repo: Repository,
    categories: CategoryFile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Ok,
}

/// Result of recording an expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedExpense {
    pub status: Status,
    pub message: String,
    pub id: ExpenseId,
}

impl LedgerService {
    /// Create a service from an already prepared repository.
    pub fn new(repo: Repository, categories: CategoryFile) -> Self {
        Self { repo, categories }
    }

    /// Open the ledger described by `config`, creating the schema if needed.
    pub async fn init(config: &Config) -> Result<Self, AppError> {
        let repo = Repository::init(&config.database_path).await?;
        info!(
            database = %config.database_path.display(),
            categories = %config.categories_path.display(),
            "ledger ready"
        );
        Ok(Self::new(
            repo,
            CategoryFile::new(config.categories_path.clone()),
        ))
    }

    // ========================
    // Expense operations
    // ========================

    /// Store a new expense. Values are kept exactly as given.
    pub async fn record_expense(&self, expense: NewExpense) -> Result<RecordedExpense, AppError> {
        let id = self.repo.insert_expense(&expense).await.inspect_err(|e| {
            warn!(error = %e, "failed to record expense");
        })?;

        info!(
            id,
            amount = expense.amount,
            category = %expense.category,
            date = %expense.date,
            "expense recorded"
        );

        Ok(RecordedExpense {
            status: Status::Ok,
            message: EXPENSE_ADDED_MESSAGE.to_string(),
            id,
        })
    }

    /// List every expense dated within `start_date..=end_date`, oldest insert first.
    pub async fn list_expenses(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> Result<Vec<Expense>, AppError> {
        let range = DateRange::new(start_date, end_date);
        let expenses = self.repo.list_expenses(&range).await?;
        debug!(%range, count = expenses.len(), "listed expenses");
        Ok(expenses)
    }

    /// Total spending per category within `start_date..=end_date`.
    /// An empty category is treated the same as no filter.
    pub async fn summarize(
        &self,
        start_date: &str,
        end_date: &str,
        category: Option<&str>,
    ) -> Result<Vec<CategoryTotal>, AppError> {
        let range = DateRange::new(start_date, end_date);
        let category = category.filter(|c| !c.is_empty());
        let totals = self.repo.sum_by_category(&range, category).await?;
        debug!(%range, ?category, groups = totals.len(), "summarized expenses");
        Ok(totals)
    }

    // ========================
    // Category reference
    // ========================

    /// Read the category document fresh from disk.
    pub async fn categories(&self) -> Result<CategoryDocument, AppError> {
        let content = self.categories.read().await.map_err(|source| {
            warn!(path = %self.categories.path().display(), error = %source, "category document unreadable");
            AppError::CategoriesUnavailable {
                path: self.categories.path().to_path_buf(),
                source,
            }
        })?;
        Ok(CategoryDocument::new(content))
    }

    /// Write the starter category document unless one already exists.
    pub async fn ensure_categories(&self) -> Result<bool, AppError> {
        let written = self
            .categories
            .write_default_if_missing()
            .await
            .map_err(|source| AppError::CategoriesUnavailable {
                path: self.categories.path().to_path_buf(),
                source,
            })?;
        if written {
            info!(path = %self.categories.path().display(), "wrote starter category document");
        }
        Ok(written)
    }

    pub fn categories_path(&self) -> &std::path::Path {
        self.categories.path()
    }
}
