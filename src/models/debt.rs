//! Debts and their payoff progress

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::DebtId;
use super::money::{progress_ratio, Money};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DebtStatus {
    #[default]
    Pending,
    Overdue,
    Paid,
}

impl DebtStatus {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "pending" | "pendente" => Some(Self::Pending),
            "overdue" | "late" | "atrasado" => Some(Self::Overdue),
            "paid" | "pago" => Some(Self::Paid),
            _ => None,
        }
    }
}

impl fmt::Display for DebtStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Overdue => write!(f, "Overdue"),
            Self::Paid => write!(f, "Paid"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DebtKind {
    CreditCard,
    Loan,
    Financing,
    #[default]
    Other,
}

impl DebtKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "credit_card" | "credit" | "card" | "cartao" => Some(Self::CreditCard),
            "loan" | "emprestimo" => Some(Self::Loan),
            "financing" | "financiamento" => Some(Self::Financing),
            "other" | "outros" => Some(Self::Other),
            _ => None,
        }
    }
}

impl fmt::Display for DebtKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreditCard => write!(f, "Credit card"),
            Self::Loan => write!(f, "Loan"),
            Self::Financing => write!(f, "Financing"),
            Self::Other => write!(f, "Other"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Debt {
    #[serde(default)]
    pub id: DebtId,
    pub description: String,
    /// Total owed
    pub amount: Money,
    #[serde(default)]
    pub paid: Money,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub status: DebtStatus,
    #[serde(default)]
    pub kind: DebtKind,
    /// Monthly interest rate in percent
    #[serde(default)]
    pub interest_rate: f64,
    #[serde(default = "default_installments")]
    pub installments: u32,
    #[serde(default)]
    pub current_installment: u32,
}

fn default_installments() -> u32 {
    1
}

impl Debt {
    pub fn new(description: impl Into<String>, amount: Money, due_date: NaiveDate) -> Self {
        Self {
            id: DebtId::new(),
            description: description.into(),
            amount,
            paid: Money::zero(),
            due_date,
            status: DebtStatus::Pending,
            kind: DebtKind::Other,
            interest_rate: 0.0,
            installments: default_installments(),
            current_installment: 0,
        }
    }

    pub fn with_paid(mut self, paid: Money) -> Self {
        self.paid = paid;
        self
    }

    pub fn with_status(mut self, status: DebtStatus) -> Self {
        self.status = status;
        self
    }

    /// Paid as a percentage of the total owed
    pub fn progress(&self) -> f64 {
        progress_ratio(self.paid, self.amount)
    }

    pub fn outstanding(&self) -> Money {
        self.amount - self.paid
    }

    /// Apply a payment
    ///
    /// Advances the installment counter while installments remain and marks
    /// the debt paid once the total is covered.
    pub fn record_payment(&mut self, amount: Money) {
        self.paid += amount;
        if self.current_installment < self.installments {
            self.current_installment += 1;
        }
        if self.paid >= self.amount {
            self.status = DebtStatus::Paid;
        }
    }

    /// Flagged overdue, or still pending after its due date
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        match self.status {
            DebtStatus::Overdue => true,
            DebtStatus::Pending => self.due_date < today,
            DebtStatus::Paid => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_progress_and_outstanding() {
        let debt = Debt::new("Car", Money::from_units(20_000), date(2025, 1, 10))
            .with_paid(Money::from_units(5_000));
        assert_eq!(debt.progress(), 25.0);
        assert_eq!(debt.outstanding(), Money::from_units(15_000));
    }

    #[test]
    fn test_record_payment() {
        let mut debt = Debt::new("Phone", Money::from_units(600), date(2025, 1, 10));
        debt.installments = 3;
        debt.record_payment(Money::from_units(200));
        assert_eq!(debt.paid, Money::from_units(200));
        assert_eq!(debt.current_installment, 1);
        assert_eq!(debt.status, DebtStatus::Pending);

        debt.record_payment(Money::from_units(400));
        assert_eq!(debt.current_installment, 2);
        assert_eq!(debt.status, DebtStatus::Paid);
        assert!(debt.outstanding().is_zero());
    }

    #[test]
    fn test_is_overdue() {
        let debt = Debt::new("Card", Money::from_units(100), date(2025, 1, 10));
        assert!(!debt.is_overdue(date(2025, 1, 10)));
        assert!(debt.is_overdue(date(2025, 1, 11)));

        let paid = debt.clone().with_status(DebtStatus::Paid);
        assert!(!paid.is_overdue(date(2026, 1, 1)));

        let flagged = debt.with_status(DebtStatus::Overdue);
        assert!(flagged.is_overdue(date(2024, 1, 1)));
    }

    #[test]
    fn test_parse_enums() {
        assert_eq!(DebtStatus::parse("atrasado"), Some(DebtStatus::Overdue));
        assert_eq!(DebtKind::parse("cartao"), Some(DebtKind::CreditCard));
        assert_eq!(DebtKind::parse("mortgage"), None);
    }
}
