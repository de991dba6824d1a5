//! CLI commands for debts

use clap::Subcommand;

use super::{date_or_today, parse_amount, parse_date};
use crate::config::settings::Settings;
use crate::error::{FinanceError, FinanceResult};
use crate::models::{Debt, DebtKind, DebtStatus};
use crate::storage::Storage;

#[derive(Subcommand, Debug)]
pub enum DebtCommands {
    /// Add a debt
    Add {
        description: String,
        /// Total owed
        amount: String,
        /// Amount already paid
        #[arg(short, long)]
        paid: Option<String>,
        /// Due date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        due: Option<String>,
        /// pending, overdue or paid
        #[arg(short, long, default_value = "pending")]
        status: String,
        /// credit_card, loan, financing or other
        #[arg(short, long, default_value = "other")]
        kind: String,
        /// Monthly interest rate in percent
        #[arg(short, long, default_value_t = 0.0)]
        interest: f64,
        /// Number of installments
        #[arg(long, default_value_t = 1)]
        installments: u32,
        /// Installments already paid
        #[arg(long, default_value_t = 0)]
        current_installment: u32,
    },

    /// Record a payment against a debt
    Pay {
        /// Debt id (full or short form)
        id: String,
        amount: String,
    },

    /// Change a debt's status or due date
    Update {
        id: String,
        /// pending, overdue or paid
        #[arg(short, long)]
        status: Option<String>,
        /// Due date (YYYY-MM-DD)
        #[arg(short, long)]
        due: Option<String>,
    },

    /// Remove a debt
    #[command(alias = "rm")]
    Remove { id: String },
}

pub fn handle_debt_command(
    storage: &Storage,
    settings: &Settings,
    cmd: DebtCommands,
) -> FinanceResult<()> {
    match cmd {
        DebtCommands::Add {
            description,
            amount,
            paid,
            due,
            status,
            kind,
            interest,
            installments,
            current_installment,
        } => {
            let status = parse_status(&status)?;
            let kind = DebtKind::parse(&kind).ok_or_else(|| {
                FinanceError::Validation(format!(
                    "Invalid debt type '{}': use credit_card, loan, financing or other",
                    kind
                ))
            })?;

            let mut debt = Debt::new(
                description,
                parse_amount(&amount)?,
                date_or_today(due.as_deref())?,
            )
            .with_status(status);
            if let Some(paid) = paid {
                debt = debt.with_paid(parse_amount(&paid)?);
            }
            debt.kind = kind;
            debt.interest_rate = interest;
            debt.installments = installments.max(1);
            debt.current_installment = current_installment;

            let line = format!(
                "Debt '{}': {} due {} ({})",
                debt.description,
                debt.amount.format_with_symbol(&settings.currency_symbol),
                debt.due_date,
                debt.status
            );
            storage.add_debt(debt)?;
            storage.save()?;
            println!("Added {}", line);
        }
        DebtCommands::Pay { id, amount } => {
            let amount = parse_amount(&amount)?;
            let debt = storage.update_debt(&id, |debt| debt.record_payment(amount))?;
            storage.save()?;
            println!(
                "Debt '{}': paid {} of {}, installment {}/{} ({})",
                debt.description,
                debt.paid.format_with_symbol(&settings.currency_symbol),
                debt.amount.format_with_symbol(&settings.currency_symbol),
                debt.current_installment,
                debt.installments,
                debt.status
            );
        }
        DebtCommands::Update { id, status, due } => {
            let status = status.as_deref().map(parse_status).transpose()?;
            let due = due.as_deref().map(parse_date).transpose()?;
            let debt = storage.update_debt(&id, |debt| {
                if let Some(status) = status {
                    debt.status = status;
                }
                if let Some(due) = due {
                    debt.due_date = due;
                }
            })?;
            storage.save()?;
            println!(
                "Debt '{}': due {} ({})",
                debt.description, debt.due_date, debt.status
            );
        }
        DebtCommands::Remove { id } => {
            let removed = storage.remove_debt(&id)?;
            storage.save()?;
            println!("Removed debt '{}'", removed.description);
        }
    }

    Ok(())
}

fn parse_status(s: &str) -> FinanceResult<DebtStatus> {
    DebtStatus::parse(s).ok_or_else(|| {
        FinanceError::Validation(format!(
            "Invalid status '{}': use pending, overdue or paid",
            s
        ))
    })
}
