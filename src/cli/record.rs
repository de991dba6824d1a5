//! CLI commands for income and expense records

use clap::Subcommand;
use tracing::debug;

use super::{date_or_today, parse_amount, parse_date};
use crate::config::settings::Settings;
use crate::display::format_record_table;
use crate::error::{FinanceError, FinanceResult};
use crate::models::{FinancialRecord, RecordKind};
use crate::storage::Storage;

#[derive(Subcommand, Debug)]
pub enum RecordCommands {
    /// Record an income or an expense
    Add {
        /// "income" or "expense"
        kind: String,
        /// Amount, e.g. 1250.00 (never negative)
        amount: String,
        /// Category label
        #[arg(short, long, default_value = "")]
        category: String,
        /// Expenses only: subcategory, e.g. "Delivery"
        #[arg(short, long)]
        subcategory: Option<String>,
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Description
        #[arg(short = 'D', long, default_value = "")]
        description: String,
        /// Family member
        #[arg(short, long, default_value = "")]
        member: String,
        /// Payment method (expenses only)
        #[arg(short, long)]
        payment: Option<String>,
        /// Repeats monthly
        #[arg(short, long)]
        recurring: bool,
    },

    /// List records, newest first
    #[command(alias = "ls")]
    List {
        /// Only "income" or "expense"
        #[arg(short, long)]
        kind: Option<String>,
        /// Earliest date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// Latest date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
        /// Number of records to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Change fields of a record; omitted fields keep their value
    Edit {
        /// Record id (full or short form)
        id: String,
        #[arg(short, long)]
        amount: Option<String>,
        #[arg(short, long)]
        category: Option<String>,
        /// Empty string clears it
        #[arg(short, long)]
        subcategory: Option<String>,
        #[arg(short, long)]
        date: Option<String>,
        #[arg(short = 'D', long)]
        description: Option<String>,
        #[arg(short, long)]
        member: Option<String>,
        /// Empty string clears it
        #[arg(short, long)]
        payment: Option<String>,
        /// true or false
        #[arg(short, long)]
        recurring: Option<bool>,
    },

    /// Remove a record by id (full or short form)
    #[command(alias = "rm")]
    Remove { id: String },
}

pub fn handle_record_command(
    storage: &Storage,
    settings: &Settings,
    cmd: RecordCommands,
) -> FinanceResult<()> {
    match cmd {
        RecordCommands::Add {
            kind,
            amount,
            category,
            subcategory,
            date,
            description,
            member,
            payment,
            recurring,
        } => {
            let kind = parse_kind(&kind)?;
            let mut record = FinancialRecord::new(
                kind,
                parse_amount(&amount)?,
                date_or_today(date.as_deref())?,
                category,
            )
            .with_description(description)
            .with_member(resolve_member(storage, &member)?);
            if let Some(subcategory) = subcategory {
                record.set_subcategory(subcategory);
            }
            record.recurring = recurring;
            record.payment_method = payment;

            let summary = record.to_string();
            let id = record.id;
            storage.add_record(record)?;
            storage.save()?;
            println!("Added {} ({})", summary, id);
        }
        RecordCommands::List {
            kind,
            from,
            to,
            limit,
        } => {
            let kind = kind.as_deref().map(parse_kind).transpose()?;
            let mut records = match (from, to) {
                (None, None) => storage.records()?,
                (from, to) => {
                    let start = from.as_deref().map(parse_date).transpose()?;
                    let end = to.as_deref().map(parse_date).transpose()?;
                    storage.records_in_range(
                        start.unwrap_or(chrono::NaiveDate::MIN),
                        end.unwrap_or(chrono::NaiveDate::MAX),
                    )?
                }
            };
            if let Some(kind) = kind {
                records.retain(|r| r.kind == kind);
            }
            records.sort_by(|a, b| b.date.cmp(&a.date));

            debug!(total = records.len(), limit, "listing records");
            records.truncate(limit);
            print!("{}", format_record_table(&records, settings));
            println!();
        }
        RecordCommands::Edit {
            id,
            amount,
            category,
            subcategory,
            date,
            description,
            member,
            payment,
            recurring,
        } => {
            let amount = amount.as_deref().map(parse_amount).transpose()?;
            let date = date.as_deref().map(parse_date).transpose()?;
            let member = member
                .as_deref()
                .map(|m| resolve_member(storage, m))
                .transpose()?;

            let updated = storage.update_record(&id, |record| {
                if let Some(amount) = amount {
                    record.amount = amount;
                }
                if let Some(category) = category {
                    record.category = category.into();
                }
                if let Some(subcategory) = subcategory {
                    record.set_subcategory(subcategory);
                }
                if let Some(date) = date {
                    record.date = date;
                }
                if let Some(description) = description {
                    record.description = description;
                }
                if let Some(member) = member {
                    record.member = member;
                }
                if let Some(payment) = payment {
                    let payment = payment.trim().to_string();
                    record.payment_method = (!payment.is_empty()).then_some(payment);
                }
                if let Some(recurring) = recurring {
                    record.recurring = recurring;
                }
            })?;
            storage.save()?;
            println!("Updated {} ({})", updated, updated.id);
        }
        RecordCommands::Remove { id } => {
            let removed = storage.remove_record(&id)?;
            storage.save()?;
            println!("Removed {}", removed);
        }
    }

    Ok(())
}

fn parse_kind(s: &str) -> FinanceResult<RecordKind> {
    RecordKind::parse(s).ok_or_else(|| {
        FinanceError::Validation(format!(
            "Invalid record kind '{}': use income or expense",
            s
        ))
    })
}

/// Canonical member name; once the profile lists members, a record's
/// member must be one of them
fn resolve_member(storage: &Storage, name: &str) -> FinanceResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Ok(String::new());
    }
    let profile = storage.profile()?;
    if profile.members.is_empty() {
        return Ok(name.to_string());
    }
    profile
        .member_named(name)
        .map(|m| m.name.clone())
        .ok_or_else(|| FinanceError::member_not_found(name))
}
