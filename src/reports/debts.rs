//! Debt payoff report

use chrono::NaiveDate;
use serde::Serialize;

use crate::display::report::{format_bar, format_percentage, separator, truncate};
use crate::models::{Debt, DebtId, DebtKind, DebtStatus, Money};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DebtRow {
    pub id: DebtId,
    pub description: String,
    pub kind: DebtKind,
    pub status: DebtStatus,
    pub amount: Money,
    pub paid: Money,
    pub due_date: NaiveDate,
    /// Paid as a percentage of the amount owed
    pub progress: f64,
    pub overdue: bool,
    /// "3/12" style installment counter
    pub installment: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DebtReport {
    pub as_of: NaiveDate,
    pub rows: Vec<DebtRow>,
    pub total_amount: Money,
    /// Sum of amounts for debts still pending
    pub pending_total: Money,
    /// Sum of amounts for debts marked paid
    pub paid_total: Money,
    pub overdue_count: usize,
}

impl DebtReport {
    pub fn generate(debts: &[Debt], today: NaiveDate) -> Self {
        let rows: Vec<DebtRow> = debts
            .iter()
            .map(|d| DebtRow {
                id: d.id,
                description: d.description.clone(),
                kind: d.kind,
                status: d.status,
                amount: d.amount,
                paid: d.paid,
                due_date: d.due_date,
                progress: d.progress(),
                overdue: d.is_overdue(today),
                installment: format!("{}/{}", d.current_installment, d.installments),
            })
            .collect();

        let amount_where = |status: DebtStatus| -> Money {
            debts
                .iter()
                .filter(|d| d.status == status)
                .map(|d| d.amount)
                .sum()
        };

        Self {
            as_of: today,
            total_amount: debts.iter().map(|d| d.amount).sum(),
            pending_total: amount_where(DebtStatus::Pending),
            paid_total: amount_where(DebtStatus::Paid),
            overdue_count: rows.iter().filter(|r| r.overdue).count(),
            rows,
        }
    }

    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();
        output.push_str(&format!("Debts (as of {})\n", self.as_of));
        output.push_str(&"=".repeat(101));
        output.push('\n');
        output.push_str(&format!(
            "Total: {}   Pending: {}   Paid: {}   Overdue: {}\n\n",
            self.total_amount.format_with_symbol(currency),
            self.pending_total.format_with_symbol(currency),
            self.paid_total.format_with_symbol(currency),
            self.overdue_count
        ));

        if self.rows.is_empty() {
            output.push_str("No debts recorded.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<14} {:<22} {:<12} {:>12} {:>12} {:<10} {:>7}  {:<10} {}\n",
            "ID", "Debt", "Type", "Amount", "Paid", "Due", "%", "Progress", "Status"
        ));
        output.push_str(&separator(101));
        output.push('\n');

        for row in &self.rows {
            let status = if row.overdue && row.status != DebtStatus::Overdue {
                format!("{} (late)", row.status)
            } else {
                row.status.to_string()
            };
            output.push_str(&format!(
                "{:<14} {:<22} {:<12} {:>12} {:>12} {:<10} {:>7}  {:<10} {}\n",
                row.id.short(),
                truncate(&row.description, 22),
                row.kind.to_string(),
                row.amount.format_with_symbol(currency),
                row.paid.format_with_symbol(currency),
                row.due_date.to_string(),
                format_percentage(row.progress),
                format_bar(row.progress.min(100.0), 100.0, 10),
                status
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

    fn debts() -> Vec<Debt> {
        vec![
            Debt::new("Card", Money::from_units(1000), date(2025, 1, 5))
                .with_paid(Money::from_units(250)),
            Debt::new("Loan", Money::from_units(5000), date(2025, 3, 1)),
            Debt::new("Phone", Money::from_units(600), date(2024, 12, 1))
                .with_paid(Money::from_units(600))
                .with_status(DebtStatus::Paid),
        ]
    }

    #[test]
    fn test_generate() {
        let report = DebtReport::generate(&debts(), date(2025, 2, 1));
        assert_eq!(report.total_amount, Money::from_units(6600));
        assert_eq!(report.pending_total, Money::from_units(6000));
        assert_eq!(report.paid_total, Money::from_units(600));
        assert_eq!(report.overdue_count, 1);
        assert!(report.rows[0].overdue);
        assert_eq!(report.rows[0].progress, 25.0);
        assert_eq!(report.rows[2].progress, 100.0);
        assert_eq!(report.rows[1].installment, "0/1");
    }

    #[test]
    fn test_format_terminal() {
        let text = DebtReport::generate(&debts(), date(2025, 2, 1)).format_terminal("$");
        assert!(text.contains("Pending (late)"));
        assert!(text.contains("Overdue: 1"));
        assert!(DebtReport::generate(&[], date(2025, 2, 1))
            .format_terminal("$")
            .contains("No debts recorded"));
    }
}
