//! CLI commands for savings goals

use clap::Subcommand;

use super::{parse_amount, parse_date};
use crate::config::settings::Settings;
use crate::error::{FinanceError, FinanceResult};
use crate::models::{Goal, GoalHorizon};
use crate::storage::Storage;

#[derive(Subcommand, Debug)]
pub enum GoalCommands {
    /// Add a savings goal
    Add {
        description: String,
        /// Target amount
        target: String,
        /// Amount already saved
        #[arg(short, long)]
        current: Option<String>,
        /// Deadline (YYYY-MM-DD)
        #[arg(short, long)]
        deadline: Option<String>,
        /// short, medium or long
        #[arg(short = 'H', long, default_value = "short")]
        horizon: String,
    },

    /// Record progress on a goal or change its target
    Update {
        /// Goal id (full or short form)
        id: String,
        /// Add this amount to what is saved
        #[arg(short, long)]
        add: Option<String>,
        /// Replace the saved amount
        #[arg(short, long, conflicts_with = "add")]
        current: Option<String>,
        #[arg(short, long)]
        target: Option<String>,
        /// Deadline (YYYY-MM-DD)
        #[arg(short, long)]
        deadline: Option<String>,
    },

    /// Remove a goal
    #[command(alias = "rm")]
    Remove { id: String },
}

pub fn handle_goal_command(
    storage: &Storage,
    settings: &Settings,
    cmd: GoalCommands,
) -> FinanceResult<()> {
    match cmd {
        GoalCommands::Add {
            description,
            target,
            current,
            deadline,
            horizon,
        } => {
            let horizon = GoalHorizon::parse(&horizon).ok_or_else(|| {
                FinanceError::Validation(format!(
                    "Invalid horizon '{}': use short, medium or long",
                    horizon
                ))
            })?;

            let mut goal = Goal::new(description, parse_amount(&target)?, horizon);
            if let Some(current) = current {
                goal = goal.with_current(parse_amount(&current)?);
            }
            goal.deadline = deadline.as_deref().map(parse_date).transpose()?;

            let line = format!(
                "Goal '{}' ({}): {} of {}",
                goal.description,
                goal.horizon,
                goal.current.format_with_symbol(&settings.currency_symbol),
                goal.target.format_with_symbol(&settings.currency_symbol)
            );
            storage.add_goal(goal)?;
            storage.save()?;
            println!("Added {}", line);
        }
        GoalCommands::Update {
            id,
            add,
            current,
            target,
            deadline,
        } => {
            let add = add.as_deref().map(parse_amount).transpose()?;
            let current = current.as_deref().map(parse_amount).transpose()?;
            let target = target.as_deref().map(parse_amount).transpose()?;
            let deadline = deadline.as_deref().map(parse_date).transpose()?;

            let goal = storage.update_goal(&id, |goal| {
                if let Some(amount) = add {
                    goal.contribute(amount);
                }
                if let Some(current) = current {
                    goal.current = current;
                }
                if let Some(target) = target {
                    goal.target = target;
                }
                if deadline.is_some() {
                    goal.deadline = deadline;
                }
            })?;
            storage.save()?;
            println!(
                "Goal '{}': {} of {} ({:.1}%)",
                goal.description,
                goal.current.format_with_symbol(&settings.currency_symbol),
                goal.target.format_with_symbol(&settings.currency_symbol),
                goal.progress()
            );
        }
        GoalCommands::Remove { id } => {
            let removed = storage.remove_goal(&id)?;
            storage.save()?;
            println!("Removed goal '{}'", removed.description);
        }
    }

    Ok(())
}
