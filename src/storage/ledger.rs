//! Ledger repository
//!
//! Holds income/expense records, budget categories, goals, debts and the
//! family profile in a single `ledger.json`. Reports receive snapshots from
//! here; they never read the file themselves.

use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::file_io::{read_json, write_json_atomic};
use crate::error::{FinanceError, FinanceResult};
use crate::models::{
    BudgetCategory, CategoryLabel, Debt, FamilyMember, FinancialRecord, Goal, Money, Profile,
    RecordKind,
};

/// On-disk layout of `ledger.json`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerData {
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub records: Vec<FinancialRecord>,
    #[serde(default)]
    pub budgets: Vec<BudgetCategory>,
    #[serde(default)]
    pub goals: Vec<Goal>,
    #[serde(default)]
    pub debts: Vec<Debt>,
}

/// Fields of a budget to create or change; `None` keeps the stored value
#[derive(Debug, Clone, Default)]
pub struct BudgetChange {
    pub limit: Option<Money>,
    pub spent: Option<Money>,
    pub alert_threshold: Option<Money>,
}

pub struct Storage {
    path: PathBuf,
    data: RwLock<LedgerData>,
}

impl Storage {
    /// Create a repository backed by `path`; nothing is read until [`Self::load`]
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(LedgerData::default()),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load the ledger from disk; a missing file is an empty ledger
    pub fn load(&self) -> FinanceResult<()> {
        let loaded: LedgerData = read_json(&self.path)?;
        debug!(
            path = %self.path.display(),
            records = loaded.records.len(),
            budgets = loaded.budgets.len(),
            goals = loaded.goals.len(),
            debts = loaded.debts.len(),
            members = loaded.profile.members.len(),
            "loaded ledger"
        );
        *self.write()? = loaded;
        Ok(())
    }

    pub fn save(&self) -> FinanceResult<()> {
        let data = self.read()?;
        write_json_atomic(&self.path, &*data)?;
        debug!(path = %self.path.display(), "saved ledger");
        Ok(())
    }

    // Records

    /// Validate and append a record
    pub fn add_record(&self, record: FinancialRecord) -> FinanceResult<()> {
        validate_record(&record)?;
        info!(id = %record.id, kind = %record.kind, "adding record");
        self.write()?.records.push(record);
        Ok(())
    }

    /// Apply `edit` to the record matching `id`; nothing changes if the
    /// edited record fails validation
    pub fn update_record<F>(&self, id: &str, edit: F) -> FinanceResult<FinancialRecord>
    where
        F: FnOnce(&mut FinancialRecord),
    {
        let mut data = self.write()?;
        let index = unique_index(&data.records, id, "Record", |r| r.id.matches(id))?;
        let mut updated = data.records[index].clone();
        edit(&mut updated);
        validate_record(&updated)?;
        info!(id = %updated.id, "updated record");
        data.records[index] = updated.clone();
        Ok(updated)
    }

    /// Remove the record whose id matches `id` (full or short form)
    pub fn remove_record(&self, id: &str) -> FinanceResult<FinancialRecord> {
        let mut data = self.write()?;
        let index = unique_index(&data.records, id, "Record", |r| r.id.matches(id))?;
        let removed = data.records.remove(index);
        info!(id = %removed.id, "removed record");
        Ok(removed)
    }

    /// Snapshot of every record
    pub fn records(&self) -> FinanceResult<Vec<FinancialRecord>> {
        Ok(self.read()?.records.clone())
    }

    /// Records of one kind, newest first
    pub fn records_by_kind(&self, kind: RecordKind) -> FinanceResult<Vec<FinancialRecord>> {
        let mut records: Vec<_> = self
            .read()?
            .records
            .iter()
            .filter(|r| r.kind == kind)
            .cloned()
            .collect();
        records.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(records)
    }

    /// Records dated within `start..=end`
    pub fn records_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> FinanceResult<Vec<FinancialRecord>> {
        Ok(self
            .read()?
            .records
            .iter()
            .filter(|r| r.date >= start && r.date <= end)
            .cloned()
            .collect())
    }

    // Budgets

    pub fn budgets(&self) -> FinanceResult<Vec<BudgetCategory>> {
        Ok(self.read()?.budgets.clone())
    }

    /// Create the budget for `category`, or update the fields given in
    /// `change` on the existing one
    ///
    /// A new budget needs a limit. Updating only the limit keeps recorded
    /// spending and any custom alert threshold.
    pub fn set_budget(
        &self,
        category: impl Into<CategoryLabel>,
        change: BudgetChange,
    ) -> FinanceResult<BudgetCategory> {
        let category = category.into();
        let mut data = self.write()?;

        let updated = match data.budgets.iter().position(|b| b.category == category) {
            Some(index) => {
                let mut budget = data.budgets[index].clone();
                if let Some(limit) = change.limit {
                    budget.set_limit(limit);
                }
                apply_budget_amounts(&mut budget, &change);
                validate_budget(&budget)?;
                data.budgets[index] = budget.clone();
                budget
            }
            None => {
                let limit = change.limit.ok_or_else(|| {
                    FinanceError::Validation(format!(
                        "Budget '{}' does not exist yet; a limit is required",
                        category
                    ))
                })?;
                let mut budget = BudgetCategory::new(category, limit);
                apply_budget_amounts(&mut budget, &change);
                validate_budget(&budget)?;
                data.budgets.push(budget.clone());
                budget
            }
        };

        info!(category = %updated.category, limit = %updated.limit, "set budget");
        Ok(updated)
    }

    /// Remove the budget for `category`
    pub fn remove_budget(&self, category: &str) -> FinanceResult<BudgetCategory> {
        let label = CategoryLabel::new(category);
        let mut data = self.write()?;
        let index = data
            .budgets
            .iter()
            .position(|b| b.category == label)
            .ok_or_else(|| FinanceError::budget_not_found(category))?;
        let removed = data.budgets.remove(index);
        info!(category = %removed.category, "removed budget");
        Ok(removed)
    }

    // Goals

    pub fn goals(&self) -> FinanceResult<Vec<Goal>> {
        Ok(self.read()?.goals.clone())
    }

    pub fn add_goal(&self, goal: Goal) -> FinanceResult<()> {
        validate_goal(&goal)?;
        info!(id = %goal.id, "adding goal");
        self.write()?.goals.push(goal);
        Ok(())
    }

    /// Apply `edit` to the goal matching `id`
    pub fn update_goal<F>(&self, id: &str, edit: F) -> FinanceResult<Goal>
    where
        F: FnOnce(&mut Goal),
    {
        let mut data = self.write()?;
        let index = unique_index(&data.goals, id, "Goal", |g| g.id.matches(id))?;
        let mut updated = data.goals[index].clone();
        edit(&mut updated);
        validate_goal(&updated)?;
        info!(id = %updated.id, current = %updated.current, "updated goal");
        data.goals[index] = updated.clone();
        Ok(updated)
    }

    pub fn remove_goal(&self, id: &str) -> FinanceResult<Goal> {
        let mut data = self.write()?;
        let index = unique_index(&data.goals, id, "Goal", |g| g.id.matches(id))?;
        let removed = data.goals.remove(index);
        info!(id = %removed.id, "removed goal");
        Ok(removed)
    }

    // Debts

    pub fn debts(&self) -> FinanceResult<Vec<Debt>> {
        Ok(self.read()?.debts.clone())
    }

    pub fn add_debt(&self, debt: Debt) -> FinanceResult<()> {
        validate_debt(&debt)?;
        info!(id = %debt.id, "adding debt");
        self.write()?.debts.push(debt);
        Ok(())
    }

    /// Apply `edit` to the debt matching `id`
    pub fn update_debt<F>(&self, id: &str, edit: F) -> FinanceResult<Debt>
    where
        F: FnOnce(&mut Debt),
    {
        let mut data = self.write()?;
        let index = unique_index(&data.debts, id, "Debt", |d| d.id.matches(id))?;
        let mut updated = data.debts[index].clone();
        edit(&mut updated);
        validate_debt(&updated)?;
        info!(id = %updated.id, paid = %updated.paid, status = %updated.status, "updated debt");
        data.debts[index] = updated.clone();
        Ok(updated)
    }

    pub fn remove_debt(&self, id: &str) -> FinanceResult<Debt> {
        let mut data = self.write()?;
        let index = unique_index(&data.debts, id, "Debt", |d| d.id.matches(id))?;
        let removed = data.debts.remove(index);
        info!(id = %removed.id, "removed debt");
        Ok(removed)
    }

    // Profile

    pub fn profile(&self) -> FinanceResult<Profile> {
        Ok(self.read()?.profile.clone())
    }

    /// Apply `edit` to the profile
    pub fn update_profile<F>(&self, edit: F) -> FinanceResult<Profile>
    where
        F: FnOnce(&mut Profile),
    {
        let mut data = self.write()?;
        let mut updated = data.profile.clone();
        edit(&mut updated);
        updated
            .validate()
            .map_err(|e| FinanceError::Validation(e.to_string()))?;
        data.profile = updated.clone();
        info!("updated profile");
        Ok(updated)
    }

    pub fn add_member(&self, member: FamilyMember) -> FinanceResult<()> {
        let mut data = self.write()?;
        info!(id = %member.id, "adding family member");
        data.profile
            .add_member(member)
            .map_err(|e| FinanceError::Validation(e.to_string()))
    }

    /// Apply `edit` to the member matching `query` (id or name)
    pub fn update_member<F>(&self, query: &str, edit: F) -> FinanceResult<FamilyMember>
    where
        F: FnOnce(&mut FamilyMember),
    {
        let mut data = self.write()?;
        let index = unique_index(&data.profile.members, query, "Member", |m| m.matches(query))?;
        let mut updated = data.profile.members[index].clone();
        edit(&mut updated);
        updated
            .validate()
            .map_err(|e| FinanceError::Validation(e.to_string()))?;
        let clash = data
            .profile
            .members
            .iter()
            .enumerate()
            .any(|(i, m)| i != index && m.name.eq_ignore_ascii_case(&updated.name));
        if clash {
            return Err(FinanceError::Validation(format!(
                "Member '{}' already exists",
                updated.name
            )));
        }
        data.profile.members[index] = updated.clone();
        info!(id = %updated.id, "updated family member");
        Ok(updated)
    }

    pub fn remove_member(&self, query: &str) -> FinanceResult<FamilyMember> {
        let mut data = self.write()?;
        let index = unique_index(&data.profile.members, query, "Member", |m| m.matches(query))?;
        let removed = data.profile.members.remove(index);
        info!(id = %removed.id, "removed family member");
        Ok(removed)
    }

    fn read(&self) -> FinanceResult<RwLockReadGuard<'_, LedgerData>> {
        self.data
            .read()
            .map_err(|e| FinanceError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> FinanceResult<RwLockWriteGuard<'_, LedgerData>> {
        self.data
            .write()
            .map_err(|e| FinanceError::Storage(format!("Failed to acquire write lock: {}", e)))
    }
}

/// Index of the single item accepted by `matches`
fn unique_index<T>(
    items: &[T],
    query: &str,
    entity_type: &'static str,
    matches: impl Fn(&T) -> bool,
) -> FinanceResult<usize> {
    let found: Vec<usize> = items
        .iter()
        .enumerate()
        .filter(|(_, item)| matches(item))
        .map(|(i, _)| i)
        .collect();

    match found.as_slice() {
        [index] => Ok(*index),
        [] => Err(FinanceError::not_found(entity_type, query)),
        _ => Err(FinanceError::Validation(format!(
            "'{}' matches {} {} entries; use a longer id",
            query,
            found.len(),
            entity_type.to_lowercase()
        ))),
    }
}

fn apply_budget_amounts(budget: &mut BudgetCategory, change: &BudgetChange) {
    if let Some(spent) = change.spent {
        budget.spent = spent;
    }
    if let Some(alert) = change.alert_threshold {
        budget.alert_threshold = alert;
    }
}

fn validate_record(record: &FinancialRecord) -> FinanceResult<()> {
    record
        .validate()
        .map_err(|e| FinanceError::Validation(e.to_string()))
}

fn validate_budget(budget: &BudgetCategory) -> FinanceResult<()> {
    budget
        .validate()
        .map_err(|e| FinanceError::Validation(e.to_string()))
}

fn validate_goal(goal: &Goal) -> FinanceResult<()> {
    if goal.description.trim().is_empty() {
        return Err(FinanceError::Validation(
            "Goal description cannot be empty".into(),
        ));
    }
    if goal.target.is_negative() || goal.current.is_negative() {
        return Err(FinanceError::Validation(
            "Goal amounts cannot be negative".into(),
        ));
    }
    Ok(())
}

fn validate_debt(debt: &Debt) -> FinanceResult<()> {
    if debt.description.trim().is_empty() {
        return Err(FinanceError::Validation(
            "Debt description cannot be empty".into(),
        ));
    }
    if debt.amount.is_negative() || debt.paid.is_negative() {
        return Err(FinanceError::Validation(
            "Debt amounts cannot be negative".into(),
        ));
    }
    Ok(())
}
