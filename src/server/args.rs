use schemars::JsonSchema;
use serde::Deserialize;

use crate::domain::NewExpense;

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AddExpenseArgs {
    /// Amount spent. Negative and zero values are stored as given.
    pub amount: f64,
    /// Category name, e.g. "food".
    pub category: String,
    /// Date of the expense, preferably YYYY-MM-DD.
    pub date: String,
    /// Optional subcategory, e.g. "groceries".
    #[serde(default)]
    pub subcategory: String,
    /// Optional free-form note.
    #[serde(default)]
    pub note: String,
}

impl From<AddExpenseArgs> for NewExpense {
    fn from(args: AddExpenseArgs) -> Self {
        NewExpense::new(args.amount, args.category, args.date)
            .with_subcategory(args.subcategory)
            .with_note(args.note)
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DateRangeArgs {
    /// First date to include, compared as text.
    pub start_date: String,
    /// Last date to include, compared as text.
    pub end_date: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SummarizeArgs {
    /// First date to include, compared as text.
    pub start_date: String,
    /// Last date to include, compared as text.
    pub end_date: String,
    /// Restrict the summary to one category. Omit for all categories.
    #[serde(default)]
    pub category: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_expense_args_defaults() {
        let args: AddExpenseArgs = serde_json::from_value(serde_json::json!({
            "amount": 12.5,
            "category": "food",
            "date": "2024-01-05"
        }))
        .unwrap();

        let expense = NewExpense::from(args);
        assert_eq!(expense, NewExpense::new(12.5, "food", "2024-01-05"));
    }

    #[test]
    fn test_add_expense_args_rejects_non_numeric_amount() {
        let result: Result<AddExpenseArgs, _> = serde_json::from_value(serde_json::json!({
            "amount": "twelve",
            "category": "food",
            "date": "2024-01-05"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_summarize_args_category_optional() {
        let args: SummarizeArgs = serde_json::from_value(serde_json::json!({
            "start_date": "2024-01-01",
            "end_date": "2024-01-31"
        }))
        .unwrap();
        assert_eq!(args.category, None);
    }
}
