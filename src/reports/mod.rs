//! Reports module for famfin
//!
//! The aggregator turns raw income/expense records into totals, a monthly
//! series and a per-category breakdown; the other reports present budget,
//! goal and debt progress using the same percentage formula.

pub mod aggregator;
pub mod budget;
pub mod debts;
pub mod goals;
pub mod summary;

pub use aggregator::{
    bucket_by_month, by_category, compute_totals, progress_ratio, MonthlyBucket, Totals,
};
pub use budget::{BudgetReport, BudgetRow};
pub use debts::{DebtReport, DebtRow};
pub use goals::{GoalReport, GoalRow, HorizonTotal};
pub use summary::ReportSummary;
