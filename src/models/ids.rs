//! Strongly-typed ID wrappers
//!
//! Records, budgets, goals, debts and family members each get their own
//! newtype so an id from one collection cannot be passed where another is
//! expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Short display form, also accepted by [`Self::matches`]
            pub fn short(&self) -> String {
                format!("{}{}", $display_prefix, &self.0.simple().to_string()[..8])
            }

            /// True when `input` is the full UUID, the short form, or a
            /// prefix of the UUID of at least 4 characters
            pub fn matches(&self, input: &str) -> bool {
                let input = input.trim();
                let bare = input.strip_prefix($display_prefix).unwrap_or(input);
                let full = self.0.to_string();
                bare.len() >= 4 && (full == bare || full.starts_with(bare))
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.short())
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

define_id!(RecordId, "rec-");
define_id!(BudgetId, "bud-");
define_id!(GoalId, "goal-");
define_id!(DebtId, "debt-");
define_id!(MemberId, "mem-");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefix() {
        let id = RecordId::new();
        let display = id.to_string();
        assert!(display.starts_with("rec-"));
        assert_eq!(display.len(), 12);
    }

    #[test]
    fn test_matches_short_and_full() {
        let id = RecordId::new();
        assert!(id.matches(&id.to_string()));
        assert!(id.matches(&id.as_uuid().to_string()));
        assert!(!id.matches("rec-"));
        assert!(!RecordId::new().matches(&id.to_string()));
    }

    #[test]
    fn test_from_str() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id: DebtId = uuid_str.parse().unwrap();
        assert_eq!(id.as_uuid().to_string(), uuid_str);
    }

    #[test]
    fn test_serialization() {
        let id = GoalId::new();
        let json = serde_json::to_string(&id).unwrap();
        let back: GoalId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }
}
