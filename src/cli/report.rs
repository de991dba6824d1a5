//! CLI commands for reports
//!
//! Generates the financial summary and the budget, goal and debt progress
//! reports, printed to the terminal or exported to a file.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Subcommand;
use tracing::info;

use super::date_or_today;
use crate::config::settings::Settings;
use crate::error::{FinanceError, FinanceResult};
use crate::export::{export_json, export_summary_csv, export_yaml, ExportFormat};
use crate::models::PeriodWindow;
use crate::reports::{BudgetReport, DebtReport, GoalReport, ReportSummary};
use crate::storage::Storage;

#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Income, expenses, savings, monthly series and spending by category
    #[command(alias = "dashboard")]
    Summary {
        /// Trailing months to chart: 3, 6 or 12
        #[arg(short, long)]
        window: Option<PeriodWindow>,

        /// Reference date (YYYY-MM-DD); the series ends at its month
        #[arg(long)]
        as_of: Option<String>,

        /// Output format: text, csv, json or yaml
        #[arg(short, long, default_value = "text")]
        format: ExportFormat,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Budget categories against their limits
    Budget {
        #[arg(short, long, default_value = "text")]
        format: ExportFormat,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Savings goals by horizon
    Goals {
        #[arg(short, long, default_value = "text")]
        format: ExportFormat,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Debt payoff progress
    Debts {
        /// Reference date for overdue checks (YYYY-MM-DD)
        #[arg(long)]
        as_of: Option<String>,

        #[arg(short, long, default_value = "text")]
        format: ExportFormat,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> FinanceResult<()> {
    let currency = settings.currency_symbol.as_str();

    match cmd {
        ReportCommands::Summary {
            window,
            as_of,
            format,
            output,
        } => {
            let window = window.unwrap_or(settings.default_window);
            let today = date_or_today(as_of.as_deref())?;
            let records = storage.records()?;
            let summary = ReportSummary::generate(&records, window, today);

            write_report(output, |w| match format {
                ExportFormat::Text => write_text(w, &summary.format_terminal(currency)),
                ExportFormat::Csv => export_summary_csv(&summary, w),
                ExportFormat::Json => export_json(&summary, w),
                ExportFormat::Yaml => export_yaml(&summary, w),
            })
        }
        ReportCommands::Budget { format, output } => {
            let report = BudgetReport::generate(&storage.budgets()?);

            write_report(output, |w| match format {
                ExportFormat::Text => write_text(w, &report.format_terminal(currency)),
                ExportFormat::Csv => report.export_csv(w),
                ExportFormat::Json => export_json(&report, w),
                ExportFormat::Yaml => export_yaml(&report, w),
            })
        }
        ReportCommands::Goals { format, output } => {
            let report = GoalReport::generate(&storage.goals()?);

            write_report(output, |w| match format {
                ExportFormat::Text => write_text(w, &report.format_terminal(currency)),
                ExportFormat::Csv => Err(csv_unsupported("goals")),
                ExportFormat::Json => export_json(&report, w),
                ExportFormat::Yaml => export_yaml(&report, w),
            })
        }
        ReportCommands::Debts {
            as_of,
            format,
            output,
        } => {
            let today = date_or_today(as_of.as_deref())?;
            let report = DebtReport::generate(&storage.debts()?, today);

            write_report(output, |w| match format {
                ExportFormat::Text => write_text(w, &report.format_terminal(currency)),
                ExportFormat::Csv => Err(csv_unsupported("debts")),
                ExportFormat::Json => export_json(&report, w),
                ExportFormat::Yaml => export_yaml(&report, w),
            })
        }
    }
}

/// Run `render` against the output file, or stdout when none is given
fn write_report<F>(output: Option<PathBuf>, render: F) -> FinanceResult<()>
where
    F: FnOnce(&mut dyn Write) -> FinanceResult<()>,
{
    match output {
        Some(path) => {
            let file = File::create(&path).map_err(|e| {
                FinanceError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            render(&mut writer)?;
            writer
                .flush()
                .map_err(|e| FinanceError::Export(e.to_string()))?;
            info!(path = %path.display(), "report exported");
            println!("Report exported to: {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            render(&mut handle)?;
            handle.flush()?;
        }
    }
    Ok(())
}

fn write_text(writer: &mut dyn Write, text: &str) -> FinanceResult<()> {
    writer
        .write_all(text.as_bytes())
        .map_err(|e| FinanceError::Export(e.to_string()))
}

fn csv_unsupported(report: &str) -> FinanceError {
    FinanceError::Export(format!(
        "CSV export is not available for the {} report; use json or yaml",
        report
    ))
}
