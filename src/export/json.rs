//! JSON export of reports

use std::io::Write;

use serde::Serialize;

use crate::error::FinanceResult;

/// Pretty-printed JSON of any report value
pub fn export_json<T: Serialize, W: Write>(report: &T, writer: W) -> FinanceResult<()> {
    serde_json::to_writer_pretty(writer, report)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FinancialRecord, Money, PeriodWindow};
    use crate::reports::ReportSummary;
    use chrono::NaiveDate;

    #[test]
    fn test_export_summary_json() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
        let records = vec![FinancialRecord::expense(Money::from_units(20), today, "Food")];
        let summary = ReportSummary::generate(&records, PeriodWindow::Six, today);

        let mut buffer = Vec::new();
        export_json(&summary, &mut buffer).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();

        assert_eq!(value["total_expenses"], 2000);
        assert_eq!(value["savings"], -2000);
        assert_eq!(value["savings_rate"], 0.0);
        assert_eq!(value["monthly_series"][5]["label"], "Mar");
        assert_eq!(value["monthly_series"][5]["month"]["year"], 2024);
    }
}
