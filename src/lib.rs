//! famfin - Terminal-based family finance tracker
//!
//! Records household income and expenses, budget limits, savings goals and
//! debts, and turns them into the summary figures a family dashboard shows:
//! totals, savings rate, a monthly income/expense series and spending by
//! category.
//!
//! # Architecture
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Records, budgets, goals, debts, money and calendar months
//! - `storage`: JSON ledger persistence
//! - `reports`: Aggregation and report generation
//! - `display`: Terminal formatting
//! - `export`: CSV, JSON and YAML export
//! - `cli`: Command handlers for the `famfin` binary
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use famfin::models::{FinancialRecord, Money, PeriodWindow};
//! use famfin::reports::ReportSummary;
//!
//! let day = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
//! let records = vec![
//!     FinancialRecord::income(Money::from_units(5000), day, "Salary"),
//!     FinancialRecord::expense(Money::from_units(2000), day, "Housing"),
//! ];
//! let summary = ReportSummary::generate(&records, PeriodWindow::Six, day);
//! assert_eq!(summary.savings(), Money::from_units(3000));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{FinanceError, FinanceResult};
