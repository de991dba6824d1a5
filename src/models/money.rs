//! Fixed-point money amounts
//!
//! Amounts are stored as minor units (cents) in an i64 so sums over large
//! record sets stay exact. Arithmetic saturates at the i64 bounds instead of
//! overflowing. Ratios are only computed at the reporting edge.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A monetary amount stored as minor units (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create an amount from minor units
    ///
    /// # Examples
    /// ```
    /// use famfin::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.units(), 10);
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create an amount from whole currency units
    pub const fn from_units(units: i64) -> Self {
        Self(units.saturating_mul(100))
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    /// Minor units (cents)
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Whole units, truncated toward zero
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Fractional part as 0-99
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub const fn abs(&self) -> Self {
        Self(self.0.saturating_abs())
    }

    pub const fn checked_add(self, other: Money) -> Option<Money> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    pub const fn checked_sub(self, other: Money) -> Option<Money> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// `numerator / denominator` of this amount, rounded toward zero
    ///
    /// The product is taken in i128 so it cannot overflow; the result is
    /// clamped to the i64 range.
    pub fn scale(&self, numerator: i64, denominator: i64) -> Money {
        if denominator == 0 {
            return Money::zero();
        }
        let scaled = i128::from(self.0) * i128::from(numerator) / i128::from(denominator);
        Self(scaled.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64)
    }

    /// Amount as a floating point number of whole units, for charts and CSV
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// `self / other` as a plain ratio, or 0 when `other` is zero
    pub fn ratio_of(&self, other: Money) -> f64 {
        if other.is_zero() {
            0.0
        } else {
            self.0 as f64 / other.0 as f64
        }
    }

    /// Parse an amount from user input
    ///
    /// Accepts "10.50", "10,50", "-10.50", "$10.50", "R$ 10,5" and "10".
    /// Bare integers are whole units, not cents. More than two decimal
    /// places is an error rather than a silent truncation.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(s.trim().to_string());

        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, trimmed),
        };

        let rest = CURRENCY_PREFIXES
            .iter()
            .find_map(|prefix| rest.strip_prefix(prefix))
            .unwrap_or(rest)
            .trim();

        if rest.is_empty() {
            return Err(invalid());
        }

        let normalized = rest.replace(',', ".");
        let mut parts = normalized.splitn(2, '.');
        let whole = parts.next().unwrap_or_default();
        let fraction = parts.next();

        if whole.is_empty() && fraction.is_none() {
            return Err(invalid());
        }

        let units: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };

        let cents: i64 = match fraction {
            None | Some("") => 0,
            Some(f) if f.len() > 2 || !f.chars().all(|c| c.is_ascii_digit()) => {
                return Err(invalid())
            }
            Some(f) if f.len() == 1 => f.parse::<i64>().map_err(|_| invalid())? * 10,
            Some(f) => f.parse().map_err(|_| invalid())?,
        };

        let total = units
            .checked_mul(100)
            .and_then(|v| v.checked_add(cents))
            .ok_or_else(invalid)?;

        Ok(Self(if negative { -total } else { total }))
    }

    /// Format with a currency symbol, e.g. `R$1234.50`
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            symbol,
            self.units().abs(),
            self.cents_part()
        )
    }
}

/// Currency prefixes stripped by [`Money::parse`], longest first
const CURRENCY_PREFIXES: [&str; 5] = ["US$", "R$", "$", "€", "£"];

/// `current` as a percentage of `target`, uncapped; 0 when `target` is zero
///
/// Shared by budget, goal and debt progress and by category shares.
pub fn progress_ratio(current: Money, target: Money) -> f64 {
    if target.is_zero() {
        return 0.0;
    }
    (current.cents() as f64 * 100.0) / target.cents() as f64
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("$"))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units_and_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.units(), 10);
        assert_eq!(m.cents_part(), 50);
        assert_eq!(Money::from_units(5000).cents(), 500_000);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1050).to_string(), "$10.50");
        assert_eq!(Money::zero().to_string(), "$0.00");
        assert_eq!(Money::from_cents(-1050).to_string(), "-$10.50");
        assert_eq!(Money::from_cents(5).format_with_symbol("R$"), "R$0.05");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("10,50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("$10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("R$ 10,5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("1.2x").is_err());
        assert!(Money::parse("$").is_err());
        assert!(Money::parse("x5").is_err());
        assert!(Money::parse("USD5").is_err());
    }

    #[test]
    fn test_parse_rejects_extra_decimals() {
        assert!(Money::parse("1.239").is_err());
        assert!(Money::parse("10,505").is_err());
        assert_eq!(Money::parse("US$ 1.23").unwrap().cents(), 123);
        assert_eq!(Money::parse("€7").unwrap().cents(), 700);
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert!(Money::parse("92233720368547758.08").is_err());
        assert_eq!(
            Money::parse("20000000000000000").unwrap().cents(),
            2_000_000_000_000_000_000
        );
    }

    #[test]
    fn test_arithmetic_saturates() {
        let big = Money::from_cents(i64::MAX / 2 + 1);
        assert_eq!(big + big, Money::from_cents(i64::MAX));
        assert_eq!(big.checked_add(big), None);

        let mut total = big;
        total += big;
        assert_eq!(total.cents(), i64::MAX);

        let low = Money::from_cents(i64::MIN);
        assert_eq!(low - Money::from_cents(1), low);
        assert_eq!((-low).cents(), i64::MAX);
        assert_eq!(low.abs().cents(), i64::MAX);
        assert_eq!(Money::from_units(i64::MAX).cents(), i64::MAX);

        let sum: Money = [big, big, big].iter().sum();
        assert_eq!(sum.cents(), i64::MAX);
    }

    #[test]
    fn test_scale_does_not_overflow() {
        let limit = Money::from_cents(2_000_000_000_000_000_000);
        assert_eq!(limit.scale(8, 10).cents(), 1_600_000_000_000_000_000);
        assert_eq!(Money::from_cents(105).scale(8, 10).cents(), 84);
        assert_eq!(Money::from_units(1).scale(1, 0), Money::zero());
    }

    #[test]
    fn test_progress_ratio() {
        assert_eq!(progress_ratio(Money::from_units(50), Money::from_units(100)), 50.0);
        assert_eq!(progress_ratio(Money::from_units(42), Money::zero()), 0.0);
        assert!(progress_ratio(Money::from_cents(i64::MAX), Money::from_cents(1)).is_finite());
    }

    #[test]
    fn test_ratio_of_guards_zero() {
        assert_eq!(Money::from_units(1).ratio_of(Money::zero()), 0.0);
        assert_eq!(Money::from_units(1).ratio_of(Money::from_units(4)), 0.25);
    }

    #[test]
    fn test_arithmetic_and_sum() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);
        assert_eq!((a + b).cents(), 1500);
        assert_eq!((b - a).cents(), -500);
        assert_eq!((-a).cents(), -1000);

        let amounts = [a, b, Money::from_cents(1)];
        let total: Money = amounts.iter().sum();
        assert_eq!(total.cents(), 1501);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, back);
    }
}
