//! Goal planning report

use serde::Serialize;

use super::aggregator::progress_ratio;
use crate::display::report::{format_bar, format_percentage, separator, truncate};
use crate::models::{Goal, GoalHorizon, GoalId, GoalTone, Money};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalRow {
    pub id: GoalId,
    pub description: String,
    pub horizon: GoalHorizon,
    pub target: Money,
    pub current: Money,
    pub progress: f64,
}

/// Target totals for one planning horizon
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HorizonTotal {
    pub horizon: GoalHorizon,
    pub target: Money,
    pub current: Money,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalReport {
    pub rows: Vec<GoalRow>,
    /// Always short, medium, long in that order
    pub by_horizon: Vec<HorizonTotal>,
    pub total_target: Money,
    pub total_saved: Money,
    pub overall_progress: f64,
}

impl GoalReport {
    pub fn generate(goals: &[Goal]) -> Self {
        let rows = goals
            .iter()
            .map(|g| GoalRow {
                id: g.id,
                description: g.description.clone(),
                horizon: g.horizon,
                target: g.target,
                current: g.current,
                progress: g.progress(),
            })
            .collect();

        let by_horizon = GoalHorizon::ALL
            .iter()
            .map(|&horizon| {
                let matching = goals.iter().filter(|g| g.horizon == horizon);
                HorizonTotal {
                    horizon,
                    target: matching.clone().map(|g| g.target).sum(),
                    current: matching.clone().map(|g| g.current).sum(),
                    count: matching.count(),
                }
            })
            .collect();

        let total_target: Money = goals.iter().map(|g| g.target).sum();
        let total_saved: Money = goals.iter().map(|g| g.current).sum();

        Self {
            rows,
            by_horizon,
            total_target,
            total_saved,
            overall_progress: progress_ratio(total_saved, total_target),
        }
    }

    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();
        output.push_str("Goals\n");
        output.push_str(&"=".repeat(93));
        output.push('\n');

        for total in &self.by_horizon {
            output.push_str(&format!(
                "{:<14} {:>14} ({} goal{})\n",
                total.horizon.to_string(),
                total.target.format_with_symbol(currency),
                total.count,
                if total.count == 1 { "" } else { "s" }
            ));
        }
        output.push('\n');

        if self.rows.is_empty() {
            output.push_str("No goals defined.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<14} {:<24} {:<12} {:>12} {:>12} {:>8}  {}\n",
            "ID", "Goal", "Horizon", "Saved", "Target", "%", "Progress"
        ));
        output.push_str(&separator(93));
        output.push('\n');
        for row in &self.rows {
            output.push_str(&format!(
                "{:<14} {:<24} {:<12} {:>12} {:>12} {:>8}  {} {}\n",
                row.id.short(),
                truncate(&row.description, 24),
                row.horizon.to_string(),
                row.current.format_with_symbol(currency),
                row.target.format_with_symbol(currency),
                format_percentage(row.progress),
                format_bar(row.progress.min(100.0), 100.0, 10),
                GoalTone::from_progress(row.progress),
            ));
        }
        output.push_str(&separator(93));
        output.push('\n');
        output.push_str(&format!(
            "{:<52} {:>12} {:>12} {:>8}\n",
            "TOTAL",
            self.total_saved.format_with_symbol(currency),
            self.total_target.format_with_symbol(currency),
            format_percentage(self.overall_progress)
        ));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals_by_horizon() {
        let goals = vec![
            Goal::new("Trip", Money::from_units(5000), GoalHorizon::Short)
                .with_current(Money::from_units(2500)),
            Goal::new("Car", Money::from_units(30000), GoalHorizon::Medium),
            Goal::new("Laptop", Money::from_units(1000), GoalHorizon::Short)
                .with_current(Money::from_units(1000)),
        ];
        let report = GoalReport::generate(&goals);

        assert_eq!(report.by_horizon.len(), 3);
        assert_eq!(report.by_horizon[0].target, Money::from_units(6000));
        assert_eq!(report.by_horizon[0].count, 2);
        assert_eq!(report.by_horizon[1].target, Money::from_units(30000));
        assert_eq!(report.by_horizon[2].count, 0);
        assert_eq!(report.total_saved, Money::from_units(3500));
        assert_eq!(report.rows[0].progress, 50.0);
        assert_eq!(report.rows[2].progress, 100.0);
    }

    #[test]
    fn test_format_terminal() {
        let goals = vec![Goal::new("Trip", Money::from_units(5000), GoalHorizon::Long)];
        let text = GoalReport::generate(&goals).format_terminal("$");
        assert!(text.contains("Trip"));
        assert!(text.contains(&goals[0].id.short()));
        assert!(text.contains("Long term"));
        assert!(text.contains("behind"));
        assert!(GoalReport::generate(&[]).format_terminal("$").contains("No goals"));
    }
}
