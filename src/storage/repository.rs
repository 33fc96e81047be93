use std::path::Path;

use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection, SqliteRow};
use sqlx::{ConnectOptions, Connection, Row};

use crate::domain::{CategoryTotal, DateRange, Expense, ExpenseId, NewExpense};

use super::SCHEMA_EXPENSES;

/// Repository for persisting and querying expenses.
///
/// Holds only the connection options. Every operation opens its own
/// connection and closes it before returning, so no connection or
/// transaction state survives between calls.
pub struct Repository {
    options: SqliteConnectOptions,
}

impl Repository {
    /// Create a repository from explicit connection options.
    pub fn new(options: SqliteConnectOptions) -> Self {
        Self { options }
    }

    /// Point a repository at a SQLite file, creating it on first connect.
    pub fn open(path: &Path) -> Self {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        Self::new(options)
    }

    /// Open a repository and make sure the schema exists.
    pub async fn init(path: &Path) -> Result<Self> {
        let repo = Self::open(path);
        repo.ensure_schema().await?;
        Ok(repo)
    }

    async fn connection(&self) -> Result<SqliteConnection> {
        self.options
            .connect()
            .await
            .context("Failed to connect to database")
    }

    /// Create the `expenses` table if it is absent. Safe to run repeatedly.
    pub async fn ensure_schema(&self) -> Result<()> {
        let mut conn = self.connection().await?;

        sqlx::query(SCHEMA_EXPENSES)
            .execute(&mut conn)
            .await
            .context("Failed to create expenses table")?;

        conn.close().await.context("Failed to close connection")?;
        Ok(())
    }

    // ========================
    // Expense operations
    // ========================

    /// Insert an expense and return the id the database assigned to it.
    pub async fn insert_expense(&self, expense: &NewExpense) -> Result<ExpenseId> {
        let mut conn = self.connection().await?;

        let result = sqlx::query(
            r#"
            INSERT INTO expenses (amount, category, date, subcategory, note)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(expense.amount)
        .bind(&expense.category)
        .bind(&expense.date)
        .bind(&expense.subcategory)
        .bind(&expense.note)
        .execute(&mut conn)
        .await
        .context("Failed to save expense")?;

        conn.close().await.context("Failed to close connection")?;
        Ok(result.last_insert_rowid())
    }

    /// List expenses dated within the range (inclusive), in insertion order.
    pub async fn list_expenses(&self, range: &DateRange) -> Result<Vec<Expense>> {
        let mut conn = self.connection().await?;

        let rows = sqlx::query(
            r#"
            SELECT id, amount, category, date, subcategory, note
            FROM expenses
            WHERE date BETWEEN ? AND ?
            ORDER BY id ASC
            "#,
        )
        .bind(&range.start)
        .bind(&range.end)
        .fetch_all(&mut conn)
        .await
        .context("Failed to list expenses")?;

        conn.close().await.context("Failed to close connection")?;
        rows.iter().map(Self::row_to_expense).collect()
    }

    /// Sum amounts per category for expenses dated within the range.
    ///
    /// With a category filter the result holds at most one row and is
    /// ordered by category. Without one the rows come back in SQLite's
    /// grouping order, which callers must not rely on.
    pub async fn sum_by_category(
        &self,
        range: &DateRange,
        category: Option<&str>,
    ) -> Result<Vec<CategoryTotal>> {
        let mut query = String::from(
            "SELECT category, SUM(amount) AS total FROM expenses WHERE date BETWEEN ? AND ?",
        );

        if category.is_some() {
            query.push_str(" AND category = ? GROUP BY category ORDER BY category ASC");
        } else {
            query.push_str(" GROUP BY category");
        }

        let mut sql_query = sqlx::query(&query).bind(&range.start).bind(&range.end);
        if let Some(cat) = category {
            sql_query = sql_query.bind(cat);
        }

        let mut conn = self.connection().await?;
        let rows = sql_query
            .fetch_all(&mut conn)
            .await
            .context("Failed to summarize expenses")?;

        conn.close().await.context("Failed to close connection")?;
        rows.iter().map(Self::row_to_category_total).collect()
    }

    fn row_to_expense(row: &SqliteRow) -> Result<Expense> {
        let subcategory: Option<String> = row.try_get("subcategory")?;
        let note: Option<String> = row.try_get("note")?;

        Ok(Expense {
            id: row.try_get("id").context("Invalid expense id")?,
            amount: row.try_get("amount").context("Invalid expense amount")?,
            category: row.try_get("category")?,
            date: row.try_get("date")?,
            // Rows written outside this program may carry NULL here.
            subcategory: subcategory.unwrap_or_default(),
            note: note.unwrap_or_default(),
        })
    }

    fn row_to_category_total(row: &SqliteRow) -> Result<CategoryTotal> {
        Ok(CategoryTotal {
            category: row.try_get("category")?,
            total: row.try_get("total").context("Invalid category total")?,
        })
    }
}
