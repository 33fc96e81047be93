// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use expense_tracker::Config;
use expense_tracker::application::LedgerService;
use expense_tracker::domain::NewExpense;
use tempfile::TempDir;

/// Helper to create a test service with a temporary database
pub async fn test_service() -> Result<(LedgerService, TempDir)> {
    let temp_dir = TempDir::new()?;
    let service = LedgerService::init(&test_config(&temp_dir)).await?;
    Ok((service, temp_dir))
}

/// Config pointing at a database (and category document) inside `temp_dir`
pub fn test_config(temp_dir: &TempDir) -> Config {
    Config::new(temp_dir.path().join("test.db"))
}

/// Test fixture: the January example ledger
pub struct JanuaryExpenses;

impl JanuaryExpenses {
    /// 12.50 food (01-05), 7.25 food (01-10), 3.00 transit (01-07)
    pub async fn create(service: &LedgerService) -> Result<()> {
        service
            .record_expense(NewExpense::new(12.50, "food", "2024-01-05"))
            .await?;
        service
            .record_expense(NewExpense::new(7.25, "food", "2024-01-10"))
            .await?;
        service
            .record_expense(NewExpense::new(3.00, "transit", "2024-01-07"))
            .await?;
        Ok(())
    }
}
