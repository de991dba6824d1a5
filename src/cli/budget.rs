//! CLI commands for budget categories

use clap::Subcommand;

use super::parse_amount;
use crate::config::settings::Settings;
use crate::error::FinanceResult;
use crate::reports::BudgetReport;
use crate::storage::{BudgetChange, Storage};

#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Create a budget, or change an existing one; omitted values are kept
    Set {
        /// Category label
        category: String,
        /// Spending limit (required for a new category)
        limit: Option<String>,
        /// Amount spent so far
        #[arg(short, long)]
        spent: Option<String>,
        /// Alert threshold (defaults to 80% of the limit)
        #[arg(short, long)]
        alert: Option<String>,
    },

    /// Show all budget categories with progress
    #[command(alias = "ls")]
    List,

    /// Remove the budget for a category
    #[command(alias = "rm")]
    Remove { category: String },
}

pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> FinanceResult<()> {
    match cmd {
        BudgetCommands::Set {
            category,
            limit,
            spent,
            alert,
        } => {
            let change = BudgetChange {
                limit: limit.as_deref().map(parse_amount).transpose()?,
                spent: spent.as_deref().map(parse_amount).transpose()?,
                alert_threshold: alert.as_deref().map(parse_amount).transpose()?,
            };
            let budget = storage.set_budget(category, change)?;
            storage.save()?;

            let currency = settings.currency_symbol.as_str();
            println!(
                "Budget '{}': limit {}, spent {}, alert at {} ({:.1}%)",
                budget.category,
                budget.limit.format_with_symbol(currency),
                budget.spent.format_with_symbol(currency),
                budget.alert_threshold.format_with_symbol(currency),
                budget.progress()
            );
        }
        BudgetCommands::List => {
            let report = BudgetReport::generate(&storage.budgets()?);
            print!("{}", report.format_terminal(&settings.currency_symbol));
        }
        BudgetCommands::Remove { category } => {
            let removed = storage.remove_budget(&category)?;
            storage.save()?;
            println!("Removed budget '{}'", removed.category);
        }
    }

    Ok(())
}
