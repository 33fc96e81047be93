mod common;

use anyhow::Result;
use common::test_config;
use expense_tracker::Repository;
use expense_tracker::application::LedgerService;
use expense_tracker::domain::{DateRange, NewExpense};
use sqlx::{Connection, SqliteConnection};
use tempfile::TempDir;

#[tokio::test]
async fn test_schema_setup_is_idempotent() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = test_config(&temp_dir);

    let service = LedgerService::init(&config).await?;
    service
        .record_expense(NewExpense::new(12.50, "food", "2024-01-05"))
        .await?;
    drop(service);

    // Reopening must neither fail nor lose data.
    let service = LedgerService::init(&config).await?;
    let expenses = service.list_expenses("2024-01-01", "2024-01-31").await?;
    assert_eq!(expenses.len(), 1);

    let recorded = service
        .record_expense(NewExpense::new(1.0, "food", "2024-01-06"))
        .await?;
    assert_eq!(recorded.id, 2);

    Ok(())
}

#[tokio::test]
async fn test_repository_sees_rows_written_by_other_connections() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let db_path = temp_dir.path().join("shared.db");
    let repo = Repository::init(&db_path).await?;

    let url = format!("sqlite:{}", db_path.display());
    let mut conn = SqliteConnection::connect(&url).await?;
    sqlx::query("INSERT INTO expenses (amount, category, date) VALUES (9.5, 'food', '2024-07-01')")
        .execute(&mut conn)
        .await?;
    // Rows inserted by other tools may carry NULLs in optional columns.
    sqlx::query(
        "INSERT INTO expenses (amount, category, date, subcategory, note) VALUES (1.5, 'food', '2024-07-02', NULL, NULL)",
    )
    .execute(&mut conn)
    .await?;
    conn.close().await?;

    let expenses = repo
        .list_expenses(&DateRange::new("2024-07-01", "2024-07-31"))
        .await?;
    assert_eq!(expenses.len(), 2);
    assert_eq!(expenses[0].subcategory, "");
    assert_eq!(expenses[0].note, "");
    assert_eq!(expenses[1].subcategory, "");

    let totals = repo
        .sum_by_category(&DateRange::new("2024-07-01", "2024-07-31"), None)
        .await?;
    assert_eq!(totals.len(), 1);
    assert_eq!(totals[0].total, 11.0);

    Ok(())
}

#[tokio::test]
async fn test_missing_database_directory_is_an_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = expense_tracker::Config::new(temp_dir.path().join("missing").join("ledger.db"));

    assert!(LedgerService::init(&config).await.is_err());

    Ok(())
}
