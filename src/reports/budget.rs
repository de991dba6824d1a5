//! Budget progress report
//!
//! Shows each budget category's spending against its limit, with overall
//! totals and the categories that have reached their alert threshold.

use serde::Serialize;
use std::io::Write;

use super::aggregator::progress_ratio;
use crate::display::report::{format_bar, format_percentage, separator, truncate};
use crate::error::{FinanceError, FinanceResult};
use crate::models::{BudgetCategory, BudgetTone, CategoryLabel, Money};

/// One budget category's row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetRow {
    pub category: CategoryLabel,
    pub limit: Money,
    pub spent: Money,
    pub remaining: Money,
    /// Spent as a percentage of the limit, uncapped
    pub progress: f64,
    pub alerting: bool,
}

impl BudgetRow {
    pub fn tone(&self) -> BudgetTone {
        BudgetTone::from_progress(self.progress)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetReport {
    pub rows: Vec<BudgetRow>,
    pub total_limit: Money,
    pub total_spent: Money,
    pub overall_progress: f64,
}

impl BudgetReport {
    pub fn generate(budgets: &[BudgetCategory]) -> Self {
        let rows: Vec<BudgetRow> = budgets
            .iter()
            .map(|b| BudgetRow {
                category: b.category.clone(),
                limit: b.limit,
                spent: b.spent,
                remaining: b.remaining(),
                progress: b.progress(),
                alerting: b.is_alerting(),
            })
            .collect();

        let total_limit: Money = budgets.iter().map(|b| b.limit).sum();
        let total_spent: Money = budgets.iter().map(|b| b.spent).sum();

        Self {
            rows,
            total_limit,
            total_spent,
            overall_progress: progress_ratio(total_spent, total_limit),
        }
    }

    /// Rows whose spending reached the alert threshold
    pub fn alerts(&self) -> impl Iterator<Item = &BudgetRow> {
        self.rows.iter().filter(|r| r.alerting)
    }

    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();
        output.push_str("Budget Progress\n");
        output.push_str(&"=".repeat(78));
        output.push('\n');

        if self.rows.is_empty() {
            output.push_str("No budget categories defined.\n\n");
            output.push_str("Run 'famfin budget set <category> <limit>' to add one.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<20} {:>12} {:>12} {:>8}  {:<12} {}\n",
            "Category", "Limit", "Spent", "%", "Progress", "Status"
        ));
        output.push_str(&separator(78));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&format!(
                "{:<20} {:>12} {:>12} {:>8}  {:<12} {}\n",
                truncate(row.category.as_str(), 20),
                row.limit.format_with_symbol(currency),
                row.spent.format_with_symbol(currency),
                format_percentage(row.progress),
                format_bar(row.progress.min(100.0), 100.0, 10),
                row.tone(),
            ));
        }

        output.push_str(&separator(78));
        output.push('\n');
        output.push_str(&format!(
            "{:<20} {:>12} {:>12} {:>8}\n",
            "TOTAL",
            self.total_limit.format_with_symbol(currency),
            self.total_spent.format_with_symbol(currency),
            format_percentage(self.overall_progress),
        ));

        let alerts: Vec<_> = self.alerts().collect();
        if !alerts.is_empty() {
            output.push_str("\nAlerts:\n");
            for row in alerts {
                output.push_str(&format!(
                    "  ! {} has spent {} of {} ({})\n",
                    row.category,
                    row.spent.format_with_symbol(currency),
                    row.limit.format_with_symbol(currency),
                    format_percentage(row.progress)
                ));
            }
        }

        output
    }

    /// Export the report to CSV
    pub fn export_csv<W: Write>(&self, writer: W) -> FinanceResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(["Category", "Limit", "Spent", "Remaining", "Progress", "Alert"])?;
        for row in &self.rows {
            csv.write_record([
                row.category.to_string(),
                format!("{:.2}", row.limit.as_f64()),
                format!("{:.2}", row.spent.as_f64()),
                format!("{:.2}", row.remaining.as_f64()),
                format!("{:.2}", row.progress),
                row.alerting.to_string(),
            ])?;
        }
        csv.flush()
            .map_err(|e| FinanceError::Export(e.to_string()))?;
        Ok(())
    }
}
