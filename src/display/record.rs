//! Record list formatting

use super::report::truncate;
use crate::config::settings::Settings;
use crate::models::{FinancialRecord, RecordKind};

/// Format records as a table in the order given, using the settings'
/// currency symbol and date format
pub fn format_record_table(records: &[FinancialRecord], settings: &Settings) -> String {
    let currency = settings.currency_symbol.as_str();
    if records.is_empty() {
        return "No records found.\n\nRun 'famfin record add' to record income or expenses."
            .to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<13} {:<12} {:<8} {:>14} {:<24} {:<14} {}\n",
        "ID", "Date", "Kind", "Amount", "Category", "Member", "Description"
    ));
    output.push_str(&"-".repeat(108));
    output.push('\n');

    for record in records {
        let amount = match record.kind {
            RecordKind::Income => record.amount.format_with_symbol(currency),
            RecordKind::Expense => (-record.amount).format_with_symbol(currency),
        };
        output.push_str(&format!(
            "{:<13} {:<12} {:<8} {:>14} {:<24} {:<14} {}\n",
            record.id.to_string(),
            settings.format_date(record.date),
            record.kind.to_string(),
            amount,
            truncate(&record.category_path(), 24),
            truncate(&record.member, 14),
            record.description,
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    #[test]
    fn test_empty_table() {
        assert!(format_record_table(&[], &Settings::default()).starts_with("No records found."));
    }

    #[test]
    fn test_uses_date_format_and_subcategory() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let records = vec![FinancialRecord::expense(Money::from_units(35), date, "Food")
            .with_subcategory("Delivery")];
        let mut settings = Settings::default();
        settings.currency_symbol = "R$".into();
        settings.set_date_format("%d/%m/%Y").unwrap();

        let table = format_record_table(&records, &settings);
        assert!(table.contains("05/03/2024"));
        assert!(table.contains("Food / Delivery"));
        assert!(table.contains("-R$35.00"));
    }

    #[test]
    fn test_expense_shown_as_outflow() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let records = vec![
            FinancialRecord::expense(Money::from_units(2000), date, "Housing")
                .with_description("Rent"),
            FinancialRecord::income(Money::from_units(5000), date, "Salary").with_member("Ana"),
        ];
        let table = format_record_table(&records, &Settings::default());
        assert!(table.contains("2024-03-05"));
        assert!(table.contains("-$2000.00"));
        assert!(table.contains("$5000.00"));
        assert!(table.contains("Rent"));
        assert!(table.contains("Ana"));
    }
}
