//! Income and expense records
//!
//! A record's amount is always non-negative; whether it adds to income or to
//! expenses is carried by [`RecordKind`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::RecordId;
use super::money::Money;

/// Longest category label accepted from user input
pub const MAX_CATEGORY_LEN: usize = 50;

/// Whether a record is money coming in or going out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Income,
    Expense,
}

impl RecordKind {
    /// Parse from user input ("income", "in", "expense", "out", ...)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "income" | "in" | "receita" => Some(Self::Income),
            "expense" | "out" | "despesa" => Some(Self::Expense),
            _ => None,
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// Free-form category label
///
/// Surrounding whitespace is trimmed on construction. An empty label is a
/// valid label of its own and is aggregated like any other.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct CategoryLabel(String);

impl CategoryLabel {
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        let trimmed = label.trim();
        if trimmed.len() == label.len() {
            Self(label)
        } else {
            Self(trimmed.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Producer-side check used before a record is stored
    pub fn validate(&self) -> Result<(), RecordValidationError> {
        let len = self.0.chars().count();
        if len > MAX_CATEGORY_LEN {
            return Err(RecordValidationError::CategoryTooLong(len));
        }
        Ok(())
    }
}

impl From<String> for CategoryLabel {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for CategoryLabel {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<CategoryLabel> for String {
    fn from(label: CategoryLabel) -> Self {
        label.0
    }
}

impl fmt::Display for CategoryLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One dated income or expense entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialRecord {
    #[serde(default)]
    pub id: RecordId,
    pub kind: RecordKind,
    pub amount: Money,
    pub date: NaiveDate,
    #[serde(default)]
    pub category: CategoryLabel,
    #[serde(default)]
    pub description: String,
    /// Repeats every month (salary, rent, ...)
    #[serde(default)]
    pub recurring: bool,
    /// Family member the record belongs to
    #[serde(default)]
    pub member: String,
    /// Expenses only: how it was paid
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    /// Expenses only: finer label inside the category, e.g. "Delivery"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
}

impl FinancialRecord {
    pub fn new(
        kind: RecordKind,
        amount: Money,
        date: NaiveDate,
        category: impl Into<CategoryLabel>,
    ) -> Self {
        Self {
            id: RecordId::new(),
            kind,
            amount,
            date,
            category: category.into(),
            description: String::new(),
            recurring: false,
            member: String::new(),
            payment_method: None,
            subcategory: None,
        }
    }

    pub fn income(amount: Money, date: NaiveDate, category: impl Into<CategoryLabel>) -> Self {
        Self::new(RecordKind::Income, amount, date, category)
    }

    pub fn expense(amount: Money, date: NaiveDate, category: impl Into<CategoryLabel>) -> Self {
        Self::new(RecordKind::Expense, amount, date, category)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_member(mut self, member: impl Into<String>) -> Self {
        self.member = member.into();
        self
    }

    /// Set the subcategory; blank input clears it
    pub fn with_subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.set_subcategory(subcategory);
        self
    }

    pub fn set_subcategory(&mut self, subcategory: impl Into<String>) {
        let subcategory = subcategory.into();
        let trimmed = subcategory.trim();
        self.subcategory = (!trimmed.is_empty()).then(|| trimmed.to_string());
    }

    pub fn is_income(&self) -> bool {
        self.kind == RecordKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == RecordKind::Expense
    }

    /// Reject records that must not be stored
    pub fn validate(&self) -> Result<(), RecordValidationError> {
        if self.amount.is_negative() {
            return Err(RecordValidationError::NegativeAmount(self.amount));
        }
        if self.is_income() && self.payment_method.is_some() {
            return Err(RecordValidationError::PaymentMethodOnIncome);
        }
        if let Some(subcategory) = &self.subcategory {
            if self.is_income() {
                return Err(RecordValidationError::SubcategoryOnIncome);
            }
            let len = subcategory.chars().count();
            if len > MAX_CATEGORY_LEN {
                return Err(RecordValidationError::CategoryTooLong(len));
            }
        }
        self.category.validate()
    }

    /// "Category / Subcategory" when a subcategory is set
    pub fn category_path(&self) -> String {
        match &self.subcategory {
            Some(sub) => format!("{} / {}", self.category, sub),
            None => self.category.to_string(),
        }
    }
}

impl fmt::Display for FinancialRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} [{}]",
            self.date, self.kind, self.amount, self.category
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValidationError {
    NegativeAmount(Money),
    CategoryTooLong(usize),
    PaymentMethodOnIncome,
    SubcategoryOnIncome,
}

impl fmt::Display for RecordValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount(m) => {
                write!(f, "Amount cannot be negative ({}); use the record kind", m)
            }
            Self::CategoryTooLong(len) => write!(
                f,
                "Category label too long ({} chars, max {})",
                len, MAX_CATEGORY_LEN
            ),
            Self::PaymentMethodOnIncome => {
                write!(f, "Payment method only applies to expenses")
            }
            Self::SubcategoryOnIncome => write!(f, "Subcategory only applies to expenses"),
        }
    }
}

impl std::error::Error for RecordValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn test_category_label_trims() {
        assert_eq!(CategoryLabel::new("  Food ").as_str(), "Food");
        assert!(CategoryLabel::new("   ").is_empty());
        assert_eq!(CategoryLabel::from("Food"), CategoryLabel::new("Food "));
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!(RecordKind::parse("Income"), Some(RecordKind::Income));
        assert_eq!(RecordKind::parse("out"), Some(RecordKind::Expense));
        assert_eq!(RecordKind::parse("despesa"), Some(RecordKind::Expense));
        assert_eq!(RecordKind::parse("transfer"), None);
    }

    #[test]
    fn test_validate() {
        let record = FinancialRecord::expense(Money::from_units(10), date(), "Food");
        assert!(record.validate().is_ok());

        let mut negative = record.clone();
        negative.amount = Money::from_cents(-1);
        assert!(matches!(
            negative.validate(),
            Err(RecordValidationError::NegativeAmount(_))
        ));

        let long = FinancialRecord::expense(Money::zero(), date(), "x".repeat(51));
        assert_eq!(
            long.validate(),
            Err(RecordValidationError::CategoryTooLong(51))
        );

        let mut income = FinancialRecord::income(Money::from_units(1), date(), "Salary");
        income.payment_method = Some("PIX".into());
        assert_eq!(
            income.validate(),
            Err(RecordValidationError::PaymentMethodOnIncome)
        );
    }

    #[test]
    fn test_subcategory() {
        let record = FinancialRecord::expense(Money::from_units(40), date(), "Food")
            .with_subcategory(" Delivery ");
        assert_eq!(record.subcategory.as_deref(), Some("Delivery"));
        assert_eq!(record.category_path(), "Food / Delivery");
        assert!(record.validate().is_ok());

        let cleared = record.clone().with_subcategory("  ");
        assert_eq!(cleared.subcategory, None);
        assert_eq!(cleared.category_path(), "Food");

        let income = FinancialRecord::income(Money::from_units(1), date(), "Salary")
            .with_subcategory("Bonus");
        assert_eq!(
            income.validate(),
            Err(RecordValidationError::SubcategoryOnIncome)
        );

        let long = FinancialRecord::expense(Money::zero(), date(), "Food")
            .with_subcategory("y".repeat(60));
        assert_eq!(
            long.validate(),
            Err(RecordValidationError::CategoryTooLong(60))
        );
    }

    #[test]
    fn test_deserialize_minimal_record() {
        let json = r#"{"kind":"expense","amount":80000,"date":"2024-03-10","category":" Food "}"#;
        let record: FinancialRecord = serde_json::from_str(json).unwrap();
        assert!(record.is_expense());
        assert_eq!(record.amount, Money::from_units(800));
        assert_eq!(record.category.as_str(), "Food");
        assert!(record.member.is_empty());
        assert_eq!(record.subcategory, None);
    }
}
