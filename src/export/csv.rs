//! CSV export of the financial summary
//!
//! One section per row type, distinguished by the first column so the file
//! loads into a spreadsheet as a single table:
//!
//! ```text
//! Section,Key,Label,Income,Expenses
//! totals,,,5000.00,2800.00
//! month,2024-03,Mar,5000.00,2800.00
//! category,,Food,,800.00
//! ```

use std::io::Write;

use crate::error::{FinanceError, FinanceResult};
use crate::reports::ReportSummary;

fn amount(m: crate::models::Money) -> String {
    format!("{:.2}", m.as_f64())
}

pub fn export_summary_csv<W: Write>(summary: &ReportSummary, writer: W) -> FinanceResult<()> {
    let mut csv = csv::Writer::from_writer(writer);

    csv.write_record(["Section", "Key", "Label", "Income", "Expenses"])?;
    csv.write_record([
        "totals".to_string(),
        String::new(),
        String::new(),
        amount(summary.total_income()),
        amount(summary.total_expenses()),
    ])?;

    for bucket in &summary.monthly_series {
        csv.write_record([
            "month".to_string(),
            bucket.month.to_string(),
            bucket.label.clone(),
            amount(bucket.income_total),
            amount(bucket.expense_total),
        ])?;
    }

    for (label, total) in summary.expense_categories_ranked() {
        csv.write_record([
            "category".to_string(),
            String::new(),
            label.to_string(),
            String::new(),
            amount(total),
        ])?;
    }

    csv.flush()
        .map_err(|e| FinanceError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FinancialRecord, Money, PeriodWindow};
    use chrono::NaiveDate;

    #[test]
    fn test_export_summary_csv() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
        let records = vec![
            FinancialRecord::income(Money::from_units(5000), today, "Salary"),
            FinancialRecord::expense(Money::from_units(800), today, "Food, groceries"),
        ];
        let summary = ReportSummary::generate(&records, PeriodWindow::Three, today);

        let mut buffer = Vec::new();
        export_summary_csv(&summary, &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "Section,Key,Label,Income,Expenses");
        assert_eq!(lines[1], "totals,,,5000.00,800.00");
        assert_eq!(lines[2], "month,2024-01,Jan,0.00,0.00");
        assert_eq!(lines[4], "month,2024-03,Mar,5000.00,800.00");
        assert_eq!(lines[5], "category,,\"Food, groceries\",,800.00");
        assert_eq!(lines.len(), 6);
    }
}
