mod categories;
mod repository;

pub use categories::*;
pub use repository::*;

/// SQL for the expenses table (create-if-absent).
pub const SCHEMA_EXPENSES: &str = include_str!("migrations/001_expenses.sql");
