//! Savings goals

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::GoalId;
use super::money::{progress_ratio, Money};

/// Planning horizon of a goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalHorizon {
    #[default]
    Short,
    Medium,
    Long,
}

impl GoalHorizon {
    pub const ALL: [GoalHorizon; 3] = [Self::Short, Self::Medium, Self::Long];

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "short" | "curto" => Some(Self::Short),
            "medium" | "medio" | "médio" => Some(Self::Medium),
            "long" | "longo" => Some(Self::Long),
            _ => None,
        }
    }
}

impl fmt::Display for GoalHorizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Short => write!(f, "Short term"),
            Self::Medium => write!(f, "Medium term"),
            Self::Long => write!(f, "Long term"),
        }
    }
}

/// A savings target with the amount put aside so far
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    #[serde(default)]
    pub id: GoalId,
    pub description: String,
    pub target: Money,
    #[serde(default)]
    pub current: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
    #[serde(default)]
    pub horizon: GoalHorizon,
}

impl Goal {
    pub fn new(description: impl Into<String>, target: Money, horizon: GoalHorizon) -> Self {
        Self {
            id: GoalId::new(),
            description: description.into(),
            target,
            current: Money::zero(),
            deadline: None,
            horizon,
        }
    }

    pub fn with_current(mut self, current: Money) -> Self {
        self.current = current;
        self
    }

    pub fn progress(&self) -> f64 {
        progress_ratio(self.current, self.target)
    }

    /// Put `amount` aside toward the goal
    pub fn contribute(&mut self, amount: Money) {
        self.current += amount;
    }

    pub fn is_complete(&self) -> bool {
        self.current >= self.target
    }

    pub fn tone(&self) -> GoalTone {
        GoalTone::from_progress(self.progress())
    }
}

/// Display classification of goal or debt payoff progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalTone {
    Behind,
    OnTrack,
    Complete,
}

impl GoalTone {
    pub fn from_progress(percent: f64) -> Self {
        if percent >= 100.0 {
            Self::Complete
        } else if percent >= 50.0 {
            Self::OnTrack
        } else {
            Self::Behind
        }
    }
}

impl fmt::Display for GoalTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Behind => write!(f, "behind"),
            Self::OnTrack => write!(f, "on track"),
            Self::Complete => write!(f, "complete"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_progress() {
        let goal = Goal::new("Emergency fund", Money::from_units(10_000), GoalHorizon::Short)
            .with_current(Money::from_units(2_500));
        assert_eq!(goal.progress(), 25.0);
        assert_eq!(goal.tone(), GoalTone::Behind);
        assert!(!goal.is_complete());

        let done = goal.with_current(Money::from_units(12_000));
        assert_eq!(done.progress(), 120.0);
        assert_eq!(done.tone(), GoalTone::Complete);
    }

    #[test]
    fn test_contribute_advances_progress() {
        let mut goal = Goal::new("Trip", Money::from_units(1000), GoalHorizon::Short);
        goal.contribute(Money::from_units(400));
        goal.contribute(Money::from_units(600));
        assert_eq!(goal.current, Money::from_units(1000));
        assert!(goal.is_complete());
        assert_eq!(goal.tone(), GoalTone::Complete);
    }

    #[test]
    fn test_zero_target_progress_is_zero() {
        let goal = Goal::new("Nothing", Money::zero(), GoalHorizon::Long)
            .with_current(Money::from_units(5));
        assert_eq!(goal.progress(), 0.0);
    }

    #[test]
    fn test_horizon_parse() {
        assert_eq!(GoalHorizon::parse("medio"), Some(GoalHorizon::Medium));
        assert_eq!(GoalHorizon::parse("LONG"), Some(GoalHorizon::Long));
        assert_eq!(GoalHorizon::parse("forever"), None);
    }
}
