//! Calendar months and trailing report windows
//!
//! A [`MonthKey`] identifies an absolute calendar month (year and month), so
//! March 2023 and March 2024 are always distinct buckets.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An absolute calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthKey {
    pub year: i32,
    /// 1-12
    pub month: u32,
}

impl MonthKey {
    /// Create a month key; `month` is clamped into 1-12
    pub fn new(year: i32, month: u32) -> Self {
        Self {
            year,
            month: month.clamp(1, 12),
        }
    }

    /// The month containing `date`
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self::new(self.year - 1, 12)
        } else {
            Self::new(self.year, self.month - 1)
        }
    }

    /// Three-letter month name, e.g. "Mar"
    pub fn short_label(&self) -> &'static str {
        const NAMES: [&str; 12] = [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ];
        NAMES[(self.month.clamp(1, 12) - 1) as usize]
    }

}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Trailing-month horizon for a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum PeriodWindow {
    Three,
    #[default]
    Six,
    Twelve,
}

impl PeriodWindow {
    pub const ALL: [PeriodWindow; 3] = [Self::Three, Self::Six, Self::Twelve];

    /// Number of calendar months covered
    pub const fn months(&self) -> usize {
        match self {
            Self::Three => 3,
            Self::Six => 6,
            Self::Twelve => 12,
        }
    }

    /// The window's months ending at the month of `today`, oldest first
    pub fn months_ending(&self, today: NaiveDate) -> Vec<MonthKey> {
        let mut months = Vec::with_capacity(self.months());
        let mut current = MonthKey::from_date(today);
        for _ in 0..self.months() {
            months.push(current);
            current = current.prev();
        }
        months.reverse();
        months
    }
}

impl fmt::Display for PeriodWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} months", self.months())
    }
}

impl TryFrom<u32> for PeriodWindow {
    type Error = PeriodWindowError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            3 => Ok(Self::Three),
            6 => Ok(Self::Six),
            12 => Ok(Self::Twelve),
            other => Err(PeriodWindowError(other.to_string())),
        }
    }
}

impl From<PeriodWindow> for u32 {
    fn from(window: PeriodWindow) -> Self {
        window.months() as u32
    }
}

impl FromStr for PeriodWindow {
    type Err = PeriodWindowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        s.parse::<u32>()
            .map_err(|_| PeriodWindowError(s.to_string()))
            .and_then(Self::try_from)
    }
}

/// Rejected window selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodWindowError(pub String);

impl fmt::Display for PeriodWindowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid period window '{}': expected 3, 6 or 12", self.0)
    }
}

impl std::error::Error for PeriodWindowError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_navigation_across_years() {
        let jan = MonthKey::new(2025, 1);
        assert_eq!(jan.prev(), MonthKey::new(2024, 12));
        assert_eq!(MonthKey::new(2024, 12).prev(), MonthKey::new(2024, 11));
        assert!(MonthKey::new(2024, 12) < jan);
    }

    #[test]
    fn test_same_month_different_year_distinct() {
        assert_ne!(
            MonthKey::from_date(date(2023, 3, 1)),
            MonthKey::from_date(date(2024, 3, 1))
        );
        assert_eq!(MonthKey::from_date(date(2024, 3, 31)), MonthKey::new(2024, 3));
    }

    #[test]
    fn test_short_label_and_display() {
        assert_eq!(MonthKey::new(2024, 3).short_label(), "Mar");
        assert_eq!(MonthKey::new(2024, 12).short_label(), "Dec");
        assert_eq!(MonthKey::new(2024, 3).to_string(), "2024-03");
    }

    #[test]
    fn test_months_ending_oldest_first() {
        let months = PeriodWindow::Three.months_ending(date(2025, 2, 10));
        assert_eq!(
            months,
            vec![
                MonthKey::new(2024, 12),
                MonthKey::new(2025, 1),
                MonthKey::new(2025, 2)
            ]
        );

        for window in PeriodWindow::ALL {
            assert_eq!(window.months_ending(date(2025, 6, 1)).len(), window.months());
        }
    }

    #[test]
    fn test_window_parse() {
        assert_eq!("3".parse::<PeriodWindow>().unwrap(), PeriodWindow::Three);
        assert_eq!(" 12 ".parse::<PeriodWindow>().unwrap(), PeriodWindow::Twelve);
        assert!("7".parse::<PeriodWindow>().is_err());
        assert!("six".parse::<PeriodWindow>().is_err());
        assert_eq!(PeriodWindow::default(), PeriodWindow::Six);
    }

    #[test]
    fn test_window_serializes_as_number() {
        let json = serde_json::to_string(&PeriodWindow::Twelve).unwrap();
        assert_eq!(json, "12");
        let back: PeriodWindow = serde_json::from_str("3").unwrap();
        assert_eq!(back, PeriodWindow::Three);
        assert!(serde_json::from_str::<PeriodWindow>("5").is_err());
    }
}
