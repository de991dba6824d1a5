use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use famfin::cli::{
    handle_budget_command, handle_debt_command, handle_goal_command, handle_member_command,
    handle_profile_command, handle_record_command, handle_report_command,
};
use famfin::config::{paths::FamfinPaths, settings::Settings};
use famfin::models::PeriodWindow;
use famfin::storage::Storage;

#[derive(Parser)]
#[command(
    name = "famfin",
    version,
    about = "Terminal-based family finance tracker",
    long_about = "famfin records household income, expenses, budgets, goals and debts, \
                  and reports totals, savings rate, monthly trends and spending by category."
)]
struct Cli {
    /// Base directory for settings and data (overrides FAMFIN_DATA_DIR)
    #[arg(long, global = true, env = "FAMFIN_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Income and expense records
    #[command(subcommand, alias = "rec")]
    Record(famfin::cli::RecordCommands),

    /// Reports: summary, budget, goals, debts
    #[command(subcommand)]
    Report(famfin::cli::ReportCommands),

    /// Budget category limits
    #[command(subcommand)]
    Budget(famfin::cli::BudgetCommands),

    /// Savings goals
    #[command(subcommand)]
    Goal(famfin::cli::GoalCommands),

    /// Debts
    #[command(subcommand)]
    Debt(famfin::cli::DebtCommands),

    /// Family profile
    #[command(subcommand)]
    Profile(famfin::cli::ProfileCommands),

    /// Family members
    #[command(subcommand)]
    Member(famfin::cli::MemberCommands),

    /// Create the data directory and default settings
    Init,

    /// Show current configuration and paths
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Change display settings
    Set {
        /// Currency symbol, e.g. "R$"
        #[arg(long)]
        currency: Option<String>,
        /// Default summary window in months (3, 6 or 12)
        #[arg(long)]
        window: Option<PeriodWindow>,
        /// strftime format for dates, e.g. "%d/%m/%Y"
        #[arg(long)]
        date_format: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    famfin::logging::init_tracing(cli.verbose);

    let paths = match cli.data_dir {
        Some(dir) => FamfinPaths::with_base_dir(dir),
        None => FamfinPaths::new()?,
    };
    debug!(base = %paths.base_dir().display(), "resolved paths");

    let mut settings = Settings::load_or_create(&paths)?;
    let storage = Storage::open(&paths)?;

    match cli.command {
        Some(Commands::Record(cmd)) => handle_record_command(&storage, &settings, cmd)?,
        Some(Commands::Report(cmd)) => handle_report_command(&storage, &settings, cmd)?,
        Some(Commands::Budget(cmd)) => handle_budget_command(&storage, &settings, cmd)?,
        Some(Commands::Goal(cmd)) => handle_goal_command(&storage, &settings, cmd)?,
        Some(Commands::Debt(cmd)) => handle_debt_command(&storage, &settings, cmd)?,
        Some(Commands::Profile(cmd)) => handle_profile_command(&storage, cmd)?,
        Some(Commands::Member(cmd)) => handle_member_command(&storage, cmd)?,
        Some(Commands::Init) => {
            println!("Initializing famfin at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.save(&paths)?;
            storage.save()?;
            println!("Initialization complete!");
            println!();
            println!("Next steps:");
            println!("  famfin record add income 5000 --category Salary");
            println!("  famfin report summary");
        }
        Some(Commands::Config {
            action:
                Some(ConfigAction::Set {
                    currency,
                    window,
                    date_format,
                }),
        }) => {
            if let Some(currency) = currency {
                settings.currency_symbol = currency;
            }
            if let Some(window) = window {
                settings.default_window = window;
            }
            if let Some(format) = date_format {
                settings.set_date_format(&format)?;
            }
            settings.save(&paths)?;
            println!("Settings saved.");
        }
        Some(Commands::Config { action: None }) => {
            println!("famfin Configuration");
            println!("====================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Ledger file:      {}", paths.ledger_file().display());
            println!("Export directory: {}", paths.export_dir().display());
            println!("Initialized:      {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Default window:  {}", settings.default_window);
            println!("  Date format:     {}", settings.date_format);
            let profile = storage.profile()?;
            if !profile.family_name.is_empty() {
                println!("  Family:          {}", profile.family_name);
            }
        }
        None => {
            println!("famfin - family finance tracker");
            println!();
            println!("Run 'famfin --help' for usage information.");
            println!("Run 'famfin report summary' for the dashboard figures.");
        }
    }

    Ok(())
}
