//! Financial summary report
//!
//! Combines totals, the monthly income/expense series and the expense
//! breakdown by category into the figures shown on the dashboard and the
//! reports view.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use super::aggregator::{bucket_by_month, by_category, compute_totals, MonthlyBucket, Totals};
use crate::display::report::{format_bar, format_percentage, separator, truncate};
use crate::models::{CategoryLabel, FinancialRecord, Money, PeriodWindow};

const WIDTH: usize = 72;
const BAR_WIDTH: usize = 20;

/// Derived figures for one set of records; rebuilt on every request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSummary {
    /// Last day covered by the monthly series
    pub as_of: NaiveDate,
    pub window: PeriodWindow,
    #[serde(flatten)]
    pub totals: Totals,
    pub monthly_series: Vec<MonthlyBucket>,
    pub expense_by_category: BTreeMap<CategoryLabel, Money>,
}

impl ReportSummary {
    /// Build the summary for `records` with the series ending at the month of `today`
    pub fn generate(records: &[FinancialRecord], window: PeriodWindow, today: NaiveDate) -> Self {
        let totals = compute_totals(records);
        let monthly_series = bucket_by_month(records, window, today);
        let expense_by_category = by_category(records);

        debug!(
            records = records.len(),
            window = window.months(),
            categories = expense_by_category.len(),
            "generated report summary"
        );

        Self {
            as_of: today,
            window,
            totals,
            monthly_series,
            expense_by_category,
        }
    }

    pub fn total_income(&self) -> Money {
        self.totals.total_income
    }

    pub fn total_expenses(&self) -> Money {
        self.totals.total_expenses
    }

    pub fn savings(&self) -> Money {
        self.totals.savings
    }

    pub fn savings_rate(&self) -> f64 {
        self.totals.savings_rate
    }

    /// Expense categories, largest first; ties keep label order
    pub fn expense_categories_ranked(&self) -> Vec<(&CategoryLabel, Money)> {
        let mut ranked: Vec<_> = self
            .expense_by_category
            .iter()
            .map(|(label, amount)| (label, *amount))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    /// Share of total expenses for one category, in percent
    pub fn category_share(&self, amount: Money) -> f64 {
        super::aggregator::progress_ratio(amount, self.totals.total_expenses)
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Financial Summary: last {} (as of {})\n",
            self.window, self.as_of
        ));
        output.push_str(&"=".repeat(WIDTH));
        output.push('\n');
        output.push_str(&format!(
            "{:<20} {:>16}\n",
            "Income:",
            self.total_income().format_with_symbol(currency)
        ));
        output.push_str(&format!(
            "{:<20} {:>16}\n",
            "Expenses:",
            self.total_expenses().format_with_symbol(currency)
        ));
        output.push_str(&format!(
            "{:<20} {:>16}\n",
            "Savings:",
            self.savings().format_with_symbol(currency)
        ));
        output.push_str(&format!(
            "{:<20} {:>16}\n\n",
            "Savings rate:",
            format_percentage(self.totals.savings_rate_percent())
        ));

        output.push_str("Monthly\n");
        output.push_str(&separator(WIDTH));
        output.push('\n');
        output.push_str(&format!(
            "{:<10} {:>14} {:>14} {:>14}\n",
            "Month", "Income", "Expenses", "Net"
        ));
        for bucket in &self.monthly_series {
            output.push_str(&format!(
                "{:<10} {:>14} {:>14} {:>14}\n",
                format!("{} {}", bucket.label, bucket.month.year),
                bucket.income_total.format_with_symbol(currency),
                bucket.expense_total.format_with_symbol(currency),
                bucket.net().format_with_symbol(currency),
            ));
        }

        output.push_str("\nExpenses by category\n");
        output.push_str(&separator(WIDTH));
        output.push('\n');

        let ranked = self.expense_categories_ranked();
        if ranked.is_empty() {
            output.push_str("  (no expenses recorded)\n");
        }
        let max = ranked.first().map(|(_, m)| m.as_f64()).unwrap_or(0.0);
        for (label, amount) in ranked {
            let name = if label.is_empty() {
                "(uncategorized)".to_string()
            } else {
                truncate(label.as_str(), 22)
            };
            output.push_str(&format!(
                "{:<22} {:>14} {:>7} {}\n",
                name,
                amount.format_with_symbol(currency),
                format_percentage(self.category_share(amount)),
                format_bar(amount.as_f64(), max, BAR_WIDTH),
            ));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn records() -> Vec<FinancialRecord> {
        vec![
            FinancialRecord::income(Money::from_units(5000), date(2024, 3, 15), "Salary"),
            FinancialRecord::expense(Money::from_units(2000), date(2024, 3, 5), "Housing"),
            FinancialRecord::expense(Money::from_units(800), date(2024, 3, 10), "Food"),
        ]
    }

    #[test]
    fn test_generate_summary() {
        let summary = ReportSummary::generate(&records(), PeriodWindow::default(), date(2024, 3, 31));

        assert_eq!(summary.total_income(), Money::from_units(5000));
        assert_eq!(summary.total_expenses(), Money::from_units(2800));
        assert_eq!(summary.savings(), Money::from_units(2200));
        assert!((summary.savings_rate() - 0.44).abs() < 1e-12);
        assert_eq!(summary.monthly_series.len(), 6);
        assert_eq!(summary.monthly_series[5].label, "Mar");
        assert_eq!(summary.expense_by_category.len(), 2);
    }

    #[test]
    fn test_ranked_categories() {
        let summary = ReportSummary::generate(&records(), PeriodWindow::Three, date(2024, 3, 31));
        let ranked = summary.expense_categories_ranked();
        assert_eq!(ranked[0].0.as_str(), "Housing");
        assert_eq!(ranked[1].0.as_str(), "Food");
        assert!((summary.category_share(ranked[1].1) - 800.0 / 28.0).abs() < 1e-9);
    }

    #[test]
    fn test_format_terminal() {
        let summary = ReportSummary::generate(&records(), PeriodWindow::Three, date(2024, 3, 31));
        let text = summary.format_terminal("$");
        assert!(text.contains("last 3 months"));
        assert!(text.contains("$5000.00"));
        assert!(text.contains("Housing"));
        assert!(text.contains("Mar 2024"));
    }

    #[test]
    fn test_format_terminal_without_expenses() {
        let summary = ReportSummary::generate(&[], PeriodWindow::Three, date(2024, 3, 31));
        assert!(summary.format_terminal("$").contains("no expenses recorded"));
    }

    #[test]
    fn test_serializes_flattened_totals() {
        let summary = ReportSummary::generate(&records(), PeriodWindow::Three, date(2024, 3, 31));
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["total_income"], 500_000);
        assert_eq!(value["window"], 3);
        assert_eq!(value["expense_by_category"]["Food"], 80_000);
        assert_eq!(value["monthly_series"].as_array().unwrap().len(), 3);
    }
}
