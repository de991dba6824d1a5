//! Budget categories
//!
//! A spending limit for one category with an alert threshold. Progress uses
//! the same percentage-of-limit formula as goal and debt progress.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::BudgetId;
use super::money::{progress_ratio, Money};
use super::record::CategoryLabel;

/// Progress at or above this percentage is shown as a warning
pub const WARNING_PERCENT: f64 = 80.0;

/// Alert threshold used when none is given: 80% of the limit
pub fn default_alert(limit: Money) -> Money {
    limit.scale(8, 10)
}

/// A spending limit for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetCategory {
    #[serde(default)]
    pub id: BudgetId,
    pub category: CategoryLabel,
    /// Spending limit, positive
    pub limit: Money,
    /// Spent so far; may exceed the limit
    #[serde(default)]
    pub spent: Money,
    /// Spending level that raises an alert, usually at or below the limit
    pub alert_threshold: Money,
}

impl BudgetCategory {
    /// Create a budget with the alert threshold at 80% of the limit
    pub fn new(category: impl Into<CategoryLabel>, limit: Money) -> Self {
        Self {
            id: BudgetId::new(),
            category: category.into(),
            limit,
            spent: Money::zero(),
            alert_threshold: default_alert(limit),
        }
    }

    /// Change the limit, keeping spending
    ///
    /// A threshold still at the default for the old limit follows the new
    /// limit; a custom threshold is kept.
    pub fn set_limit(&mut self, limit: Money) {
        if self.alert_threshold == default_alert(self.limit) {
            self.alert_threshold = default_alert(limit);
        }
        self.limit = limit;
    }

    pub fn with_spent(mut self, spent: Money) -> Self {
        self.spent = spent;
        self
    }

    pub fn with_alert(mut self, alert_threshold: Money) -> Self {
        self.alert_threshold = alert_threshold;
        self
    }

    /// Spent as a percentage of the limit, uncapped
    pub fn progress(&self) -> f64 {
        progress_ratio(self.spent, self.limit)
    }

    /// Spending has reached the alert threshold
    pub fn is_alerting(&self) -> bool {
        self.spent >= self.alert_threshold
    }

    pub fn is_over_limit(&self) -> bool {
        self.spent > self.limit
    }

    /// Limit minus spent; negative when overspent
    pub fn remaining(&self) -> Money {
        self.limit - self.spent
    }

    pub fn tone(&self) -> BudgetTone {
        BudgetTone::from_progress(self.progress())
    }

    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if !self.limit.is_positive() {
            return Err(BudgetValidationError::NonPositiveLimit(self.limit));
        }
        if self.spent.is_negative() {
            return Err(BudgetValidationError::NegativeSpent(self.spent));
        }
        if self.alert_threshold.is_negative() {
            return Err(BudgetValidationError::NegativeAlert(self.alert_threshold));
        }
        self.category
            .validate()
            .map_err(|e| BudgetValidationError::Category(e.to_string()))
    }
}

/// Display classification of budget progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetTone {
    Normal,
    Warning,
    Critical,
}

impl BudgetTone {
    pub fn from_progress(percent: f64) -> Self {
        if percent >= 100.0 {
            Self::Critical
        } else if percent >= WARNING_PERCENT {
            Self::Warning
        } else {
            Self::Normal
        }
    }
}

impl fmt::Display for BudgetTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "ok"),
            Self::Warning => write!(f, "warning"),
            Self::Critical => write!(f, "over"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    NonPositiveLimit(Money),
    NegativeSpent(Money),
    NegativeAlert(Money),
    Category(String),
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveLimit(m) => write!(f, "Budget limit must be positive, got {}", m),
            Self::NegativeSpent(m) => write!(f, "Spent amount cannot be negative, got {}", m),
            Self::NegativeAlert(m) => write!(f, "Alert threshold cannot be negative, got {}", m),
            Self::Category(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for BudgetValidationError {}
