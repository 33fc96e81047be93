use anyhow::Result;
use std::io::Write;

use crate::domain::{CategoryTotal, Expense};

/// Write expenses as CSV with a header row. Returns the number of rows written.
pub fn write_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> Result<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for expense in expenses {
        csv_writer.serialize(expense)?;
    }

    csv_writer.flush()?;
    Ok(expenses.len())
}

/// Write category totals as CSV with a header row.
pub fn write_totals_csv<W: Write>(totals: &[CategoryTotal], writer: W) -> Result<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for total in totals {
        csv_writer.serialize(total)?;
    }

    csv_writer.flush()?;
    Ok(totals.len())
}
