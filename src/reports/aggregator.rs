//! Aggregation over income and expense records
//!
//! Pure reductions used by the dashboard and report views. None of these
//! functions fail: a zero denominator yields 0 instead of an error.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{CategoryLabel, FinancialRecord, Money, MonthKey, PeriodWindow, RecordKind};

pub use crate::models::money::progress_ratio;

/// Income, expense and savings figures for a record set
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Totals {
    pub total_income: Money,
    pub total_expenses: Money,
    /// Income minus expenses; negative when overspending
    pub savings: Money,
    /// Savings as a fraction of income, 0 when there is no income
    pub savings_rate: f64,
}

impl Totals {
    /// Savings rate as a percentage
    pub fn savings_rate_percent(&self) -> f64 {
        self.savings_rate * 100.0
    }
}

/// One calendar month of the time series
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyBucket {
    pub month: MonthKey,
    /// Short month name, e.g. "Mar"
    pub label: String,
    pub income_total: Money,
    pub expense_total: Money,
}

impl MonthlyBucket {
    fn empty(month: MonthKey) -> Self {
        Self {
            month,
            label: month.short_label().to_string(),
            income_total: Money::zero(),
            expense_total: Money::zero(),
        }
    }

    pub fn net(&self) -> Money {
        self.income_total - self.expense_total
    }
}

/// Sum income and expenses and derive savings and savings rate
pub fn compute_totals(records: &[FinancialRecord]) -> Totals {
    let mut total_income = Money::zero();
    let mut total_expenses = Money::zero();

    for record in records {
        match record.kind {
            RecordKind::Income => total_income += record.amount,
            RecordKind::Expense => total_expenses += record.amount,
        }
    }

    let savings = total_income - total_expenses;

    Totals {
        total_income,
        total_expenses,
        savings,
        savings_rate: savings.ratio_of(total_income),
    }
}

/// Bucket records into the window's months ending at the month of `today`
///
/// Always returns `window.months()` buckets, oldest first. Records are
/// matched by year and month; anything outside the window is skipped.
pub fn bucket_by_month(
    records: &[FinancialRecord],
    window: PeriodWindow,
    today: NaiveDate,
) -> Vec<MonthlyBucket> {
    let months = window.months_ending(today);
    let mut buckets: Vec<MonthlyBucket> = months.iter().copied().map(MonthlyBucket::empty).collect();

    let Some(first) = months.first().copied() else {
        return buckets;
    };

    for record in records {
        let month = MonthKey::from_date(record.date);
        let Some(index) = month_offset(first, month).filter(|i| *i < buckets.len()) else {
            continue;
        };

        let bucket = &mut buckets[index];
        match record.kind {
            RecordKind::Income => bucket.income_total += record.amount,
            RecordKind::Expense => bucket.expense_total += record.amount,
        }
    }

    buckets
}

/// Sum expense amounts per category label
///
/// Only categories that appear on at least one expense record are present.
pub fn by_category(records: &[FinancialRecord]) -> BTreeMap<CategoryLabel, Money> {
    let mut totals: BTreeMap<CategoryLabel, Money> = BTreeMap::new();

    for record in records.iter().filter(|r| r.is_expense()) {
        *totals.entry(record.category.clone()).or_default() += record.amount;
    }

    totals
}

/// Months from `start` to `month`, or None when `month` is earlier
fn month_offset(start: MonthKey, month: MonthKey) -> Option<usize> {
    let start_index = i64::from(start.year) * 12 + i64::from(start.month) - 1;
    let month_index = i64::from(month.year) * 12 + i64::from(month.month) - 1;
    usize::try_from(month_index - start_index).ok()
}
