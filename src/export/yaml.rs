//! YAML export of reports

use std::io::Write;

use serde::Serialize;

use crate::error::FinanceResult;

pub fn export_yaml<T: Serialize, W: Write>(report: &T, writer: W) -> FinanceResult<()> {
    serde_yaml::to_writer(writer, report)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetCategory, Money};
    use crate::reports::BudgetReport;

    #[test]
    fn test_export_budget_yaml() {
        let budgets = vec![BudgetCategory::new("Food", Money::from_units(100))
            .with_spent(Money::from_units(90))];
        let report = BudgetReport::generate(&budgets);

        let mut buffer = Vec::new();
        export_yaml(&report, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.contains("category: Food"));
        assert!(text.contains("alerting: true"));
        assert!(text.contains("total_limit: 10000"));
    }
}
