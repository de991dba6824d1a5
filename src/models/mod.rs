//! Core data models for famfin
//!
//! Income/expense records, budget categories, goals, debts and the family
//! profile, plus the calendar types the reports bucket by.

pub mod budget;
pub mod debt;
pub mod goal;
pub mod ids;
pub mod money;
pub mod period;
pub mod profile;
pub mod record;

pub use budget::{BudgetCategory, BudgetTone};
pub use debt::{Debt, DebtKind, DebtStatus};
pub use goal::{Goal, GoalHorizon, GoalTone};
pub use ids::{BudgetId, DebtId, GoalId, MemberId, RecordId};
pub use money::{progress_ratio, Money};
pub use period::{MonthKey, PeriodWindow};
pub use profile::{AccessLevel, FamilyMember, Profile, ProfileValidationError};
pub use record::{CategoryLabel, FinancialRecord, RecordKind};
