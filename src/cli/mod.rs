use std::path::PathBuf;

use anyhow::Result;
use chrono::{Datelike, Local};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::warn;

use crate::application::LedgerService;
use crate::config::Config;
use crate::domain::{CategoryTotal, DateRange, Expense, NewExpense};
use crate::io::{write_expenses_csv, write_totals_csv};
use crate::server;

/// Expense Tracker - personal expense ledger with a tool-protocol server
#[derive(Parser)]
#[command(name = "expense-tracker")]
#[command(about = "Record, list and summarize expenses; serve them to MCP clients")]
#[command(version)]
pub struct Cli {
    /// Database file path
    #[arg(short, long, global = true, env = "EXPENSE_DB", default_value = "expenses.db")]
    pub database: PathBuf,

    /// Category document path (defaults to categories.json beside the database)
    #[arg(long, global = true, env = "EXPENSE_CATEGORIES")]
    pub categories: Option<PathBuf>,

    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Command to run (defaults to `serve`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the ledger to MCP clients over stdin/stdout
    Serve,

    /// Create the database and a starter category document
    Init,

    /// Record an expense
    Add {
        /// Amount spent (e.g., "12.50")
        #[arg(allow_negative_numbers = true)]
        amount: f64,

        /// Category (e.g., "food")
        #[arg(short, long)]
        category: String,

        /// Date of the expense (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,

        /// Subcategory (e.g., "groceries")
        #[arg(short, long, default_value = "")]
        subcategory: String,

        /// Free-form note
        #[arg(short, long, default_value = "")]
        note: String,
    },

    /// List expenses in an inclusive date range
    List {
        /// Start date (YYYY-MM-DD, defaults to start of current month)
        #[arg(long)]
        from: Option<String>,

        /// End date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        to: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Total expenses per category in an inclusive date range
    Summary {
        /// Start date (YYYY-MM-DD, defaults to start of current month)
        #[arg(long)]
        from: Option<String>,

        /// End date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        to: Option<String>,

        /// Only include this category
        #[arg(short, long)]
        category: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Print the category document
    Categories,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

impl Cli {
    pub fn config(&self) -> Config {
        let config = Config::new(&self.database);
        match &self.categories {
            Some(path) => config.with_categories_path(path),
            None => config,
        }
    }

    pub async fn run(self) -> Result<()> {
        let config = self.config();
        let service = LedgerService::init(&config).await?;

        match self.command.unwrap_or(Commands::Serve) {
            Commands::Serve => {
                server::serve_stdio(service).await?;
            }

            Commands::Init => {
                println!("Database initialized: {}", config.database_path.display());
                if service.ensure_categories().await? {
                    println!(
                        "Wrote starter categories: {}",
                        config.categories_path.display()
                    );
                } else {
                    println!(
                        "Using existing categories: {}",
                        config.categories_path.display()
                    );
                }
            }

            Commands::Add {
                amount,
                category,
                date,
                subcategory,
                note,
            } => {
                let date = date.unwrap_or_else(today);
                let expense = NewExpense::new(amount, category, date)
                    .with_subcategory(subcategory)
                    .with_note(note);
                let recorded = service.record_expense(expense).await?;
                println!("{} (id {})", recorded.message, recorded.id);
            }

            Commands::List { from, to, format } => {
                let range = date_range_or_current_month(from, to);
                warn_if_empty(&range);
                let expenses = service.list_expenses(&range.start, &range.end).await?;
                print_expenses(&expenses, format)?;
            }

            Commands::Summary {
                from,
                to,
                category,
                format,
            } => {
                let range = date_range_or_current_month(from, to);
                warn_if_empty(&range);
                let totals = service
                    .summarize(&range.start, &range.end, category.as_deref())
                    .await?;
                print_totals(&totals, format)?;
            }

            Commands::Categories => {
                let document = service.categories().await?;
                print!("{}", document.content);
            }
        }

        Ok(())
    }
}

fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// Fill in missing bounds with the first day of the current month and today.
fn date_range_or_current_month(from: Option<String>, to: Option<String>) -> DateRange {
    let now = Local::now().date_naive();
    let from = from.unwrap_or_else(|| {
        now.with_day(1)
            .unwrap_or(now)
            .format("%Y-%m-%d")
            .to_string()
    });
    let to = to.unwrap_or_else(|| now.format("%Y-%m-%d").to_string());
    DateRange::new(from, to)
}

/// Log when the bounds are swapped. Returns true if the range can match nothing.
fn warn_if_empty(range: &DateRange) -> bool {
    let empty = range.is_empty();
    if empty {
        warn!(%range, "start date sorts after end date, no expenses can match");
    }
    empty
}

fn print_expenses(expenses: &[Expense], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(expenses)?);
        }
        OutputFormat::Csv => {
            write_expenses_csv(expenses, std::io::stdout())?;
        }
        OutputFormat::Table => {
            if expenses.is_empty() {
                println!("No expenses found.");
                return Ok(());
            }

            println!(
                "{:>6} {:<12} {:>10} {:<15} {:<15} NOTE",
                "ID", "DATE", "AMOUNT", "CATEGORY", "SUBCATEGORY"
            );
            println!("{}", "-".repeat(80));
            for expense in expenses {
                println!(
                    "{:>6} {:<12} {:>10.2} {:<15} {:<15} {}",
                    expense.id,
                    truncate(&expense.date, 12),
                    expense.amount,
                    truncate(&expense.category, 15),
                    truncate(&expense.subcategory, 15),
                    truncate(&expense.note, 30)
                );
            }
        }
    }
    Ok(())
}

fn print_totals(totals: &[CategoryTotal], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(totals)?);
        }
        OutputFormat::Csv => {
            write_totals_csv(totals, std::io::stdout())?;
        }
        OutputFormat::Table => {
            if totals.is_empty() {
                println!("No expenses found.");
                return Ok(());
            }

            println!("{:<20} {:>12}", "CATEGORY", "TOTAL");
            println!("{}", "-".repeat(33));
            for total in totals {
                println!(
                    "{:<20} {:>12.2}",
                    truncate(&total.category, 20),
                    total.total
                );
            }
            println!("{}", "-".repeat(33));
            let grand_total: f64 = totals.iter().map(|t| t.total).sum();
            println!("{:<20} {:>12.2}", "TOTAL", grand_total);
        }
    }
    Ok(())
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}
