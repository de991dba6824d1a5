//! CLI command handlers
//!
//! Bridges clap argument parsing with storage and the report generators.

pub mod budget;
pub mod debt;
pub mod goal;
pub mod profile;
pub mod record;
pub mod report;

pub use budget::{handle_budget_command, BudgetCommands};
pub use debt::{handle_debt_command, DebtCommands};
pub use goal::{handle_goal_command, GoalCommands};
pub use profile::{handle_member_command, handle_profile_command, MemberCommands, ProfileCommands};
pub use record::{handle_record_command, RecordCommands};
pub use report::{handle_report_command, ReportCommands};

use chrono::NaiveDate;

use crate::error::{FinanceError, FinanceResult};
use crate::models::Money;

/// Parse a `YYYY-MM-DD` date argument
pub(crate) fn parse_date(s: &str) -> FinanceResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        FinanceError::Validation(format!("Invalid date format: {}. Use YYYY-MM-DD", s))
    })
}

/// Parse an optional date, defaulting to today
pub(crate) fn date_or_today(s: Option<&str>) -> FinanceResult<NaiveDate> {
    match s {
        Some(s) => parse_date(s),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

pub(crate) fn parse_money(s: &str) -> FinanceResult<Money> {
    Money::parse(s).map_err(|e| FinanceError::Validation(e.to_string()))
}

/// Parse a non-negative amount argument
pub(crate) fn parse_amount(s: &str) -> FinanceResult<Money> {
    let amount = parse_money(s)?;
    if amount.is_negative() {
        return Err(FinanceError::Validation(format!(
            "Amount must not be negative: {}",
            s
        )));
    }
    Ok(amount)
}
