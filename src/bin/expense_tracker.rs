use std::{
    io::{self, IsTerminal},
    path::{Path, PathBuf},
    process::ExitCode,
};

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use expense_tracker::{
    cli::{
        self,
        output::{self, OutputPreferences},
        views, CliMode,
    },
    config::ConfigManager,
    core::{
        services::{ExportService, SummaryService},
        ExpenseStore,
    },
    errors::{CliError, ExpenseError},
    init,
    ledger::{
        expense::DATE_FORMAT, format_amount, parse_money, today, Category, ExpenseDraft,
        ExpensePatch,
    },
    storage::JsonStorage,
    utils::{build_info, config_file_for, default_data_file, export_file_for},
};

#[derive(Parser, Debug)]
#[command(name = "expense_tracker")]
#[command(about = "Record, list, and summarize personal expenses")]
struct Cli {
    /// Expense file (defaults to ~/.expense_tracker/expenses.json).
    #[arg(long, global = true, env = "EXPENSE_TRACKER_FILE")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all expenses ordered by date.
    List,
    /// Record a new expense dated today (or --date).
    Add {
        description: String,
        category: String,
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Date as YYYY-MM-DD.
        #[arg(long)]
        date: Option<String>,
    },
    /// Edit fields of an existing expense.
    Update {
        id: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        amount: Option<String>,
    },
    /// Remove an expense.
    Delete { id: String },
    /// Totals per month and category, flagging months over the limit.
    Summary,
    /// Set the monthly budget limit, or `clear` it.
    Limit {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Write all expenses as CSV.
    Export { path: Option<PathBuf> },
    /// Show build metadata.
    Version,
}

fn main() -> ExitCode {
    init();
    let args = Cli::parse();
    if !io::stdout().is_terminal() || std::env::var_os("NO_COLOR").is_some() {
        output::set_preferences(OutputPreferences { plain_mode: true });
    }
    let data_file = args.file.unwrap_or_else(default_data_file);

    let result = match args.command {
        None => cli::run_menu(&data_file, CliMode::from_env()),
        Some(command) => run_command(&data_file, command),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run_command(data_file: &Path, command: Command) -> Result<(), CliError> {
    let store = ExpenseStore::new(Box::new(JsonStorage::new(data_file)));
    let config_manager = ConfigManager::new(config_file_for(data_file));
    let config = config_manager.load()?;
    let symbol = config.currency_symbol.as_str();

    match command {
        Command::List => {
            views::print_expenses(&store.list_sorted()?, symbol);
        }
        Command::Add {
            description,
            category,
            amount,
            date,
        } => {
            let category: Category = category.parse()?;
            let amount = require_amount(&amount)?;
            let date = match date {
                Some(raw) => validate_date(&raw)?,
                None => today(),
            };
            let expense = store.add(ExpenseDraft::new(description, category, amount).on(date))?;
            output::success(format!("Expense {} added.", expense.id));
            views::warn_if_over_limit(&store.load()?, &expense.date, config.monthly_limit, symbol);
        }
        Command::Update {
            id,
            description,
            category,
            amount,
        } => {
            let mut patch = ExpensePatch {
                description,
                category: category.map(|raw| raw.parse::<Category>()).transpose()?,
                amount: amount.map(|raw| require_amount(&raw)).transpose()?,
                date: None,
            };
            if patch.is_empty() {
                return Err(CliError::Input(
                    "nothing to update; pass --description, --category, or --amount".into(),
                ));
            }
            patch.date = Some(today());
            let updated = store.update(&id, &patch)?;
            output::success(format!("Expense {} updated.", updated.id));
            views::print_expense_detail(&updated, symbol);
            views::warn_if_over_limit(&store.load()?, &updated.date, config.monthly_limit, symbol);
        }
        Command::Delete { id } => {
            let removed = store.delete(&id)?;
            output::success(format!("Expense {} deleted.", removed.id));
        }
        Command::Summary => {
            let expenses = store.load()?;
            let summaries = SummaryService::monthly(&expenses, config.monthly_limit);
            views::print_summaries(&summaries, config.monthly_limit, symbol);
        }
        Command::Limit { value } => {
            if value.trim().eq_ignore_ascii_case("clear") {
                config_manager.clear_limit()?;
                output::success("Monthly limit cleared.");
            } else {
                match config_manager.set_limit(&value)? {
                    Some(limit) => output::success(format!(
                        "Monthly limit set to {}.",
                        format_amount(limit, symbol)
                    )),
                    None => output::success("Monthly limit cleared."),
                }
            }
        }
        Command::Export { path } => {
            let path = path.unwrap_or_else(|| export_file_for(data_file));
            let rows = ExportService::export_to_path(&store.load()?, &path)?;
            output::success(format!("Exported {} expense(s) to {}.", rows, path.display()));
        }
        Command::Version => {
            for line in build_info::current().summary_lines() {
                output::raw(line);
            }
        }
    }
    Ok(())
}

fn require_amount(raw: &str) -> Result<f64, ExpenseError> {
    parse_money(raw).ok_or_else(|| {
        ExpenseError::InvalidInput(format!("`{}` is not a non-negative amount", raw.trim()))
    })
}

fn validate_date(raw: &str) -> Result<String, ExpenseError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map(|date| date.format(DATE_FORMAT).to_string())
        .map_err(|_| ExpenseError::InvalidInput(format!("`{}` is not a YYYY-MM-DD date", raw)))
}
