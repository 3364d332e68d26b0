use std::io;
use std::path::PathBuf;

use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use tracing::debug;

use crate::cli::commands::{LoopControl, MenuCommand};
use crate::cli::input::{InputSource, Selection};
use crate::cli::{output, views};
use crate::config::{Config, ConfigManager};
use crate::core::services::{ExportService, SummaryService};
use crate::core::ExpenseStore;
use crate::errors::{CliError, ExpenseError};
use crate::ledger::{format_amount, parse_money, today, Category, ExpenseDraft, ExpensePatch};

const MAIN_MENU_LABEL: &str = "SELECT MENU";
const CATEGORY_LABEL: &str = "Select Expense Category";
const INVALID_AMOUNT: &str = "Value isn't valid, it must be a non-negative number...";

/// Runs the menu loop: shows the fixed command list, reads a selection, and
/// invokes the matching store operation.
pub struct Dispatcher {
    store: ExpenseStore,
    config: ConfigManager,
    input: Box<dyn InputSource>,
    export_path: PathBuf,
}

impl Dispatcher {
    pub fn new(
        store: ExpenseStore,
        config: ConfigManager,
        input: Box<dyn InputSource>,
        export_path: PathBuf,
    ) -> Self {
        Self {
            store,
            config,
            input,
            export_path,
        }
    }

    pub fn store(&self) -> &ExpenseStore {
        &self.store
    }

    /// Loops until Exit is chosen or input ends. Fails only when the stored
    /// data cannot be read at startup.
    pub fn run(&mut self) -> Result<(), CliError> {
        self.store.load()?;
        self.config.load()?;

        loop {
            self.clear_screen();
            let selection = self.input.select(MAIN_MENU_LABEL, &MenuCommand::labels())?;
            let command = match selection {
                Selection::Chosen(index) => MenuCommand::from_index(index),
                Selection::Cancelled => None,
                Selection::Closed => {
                    debug!("input closed, leaving menu loop");
                    return Ok(());
                }
            };
            let Some(command) = command else {
                continue;
            };

            match self.execute(command) {
                Ok(LoopControl::Continue) => {}
                Ok(LoopControl::Exit) => {
                    output::info("Program is closed...");
                    return Ok(());
                }
                Err(err) => output::error(err),
            }
        }
    }

    /// Dispatches a single menu command.
    pub fn execute(&mut self, command: MenuCommand) -> Result<LoopControl, CliError> {
        debug!(?command, "dispatching menu command");
        match command {
            MenuCommand::View => self.view()?,
            MenuCommand::Add => self.add()?,
            MenuCommand::Update => self.update()?,
            MenuCommand::Delete => self.delete()?,
            MenuCommand::Summary => self.summary()?,
            MenuCommand::SetLimit => self.set_limit()?,
            MenuCommand::Export => self.export()?,
            MenuCommand::Exit => return Ok(LoopControl::Exit),
        }
        Ok(LoopControl::Continue)
    }

    fn settings(&self) -> Result<Config, CliError> {
        Ok(self.config.load()?)
    }

    fn view(&mut self) -> Result<(), CliError> {
        let expenses = self.store.list_sorted()?;
        let config = self.settings()?;
        views::print_expenses(&expenses, &config.currency_symbol);
        self.pause()
    }

    fn add(&mut self) -> Result<(), CliError> {
        output::section("Add new expense");

        let Some(description) = self.input.read_line("Input expense description")? else {
            return self.cancelled("Add");
        };
        let Some(category) = self.pick_category(None)? else {
            return self.cancelled("Add");
        };
        let Some(amount) = self.prompt_amount("Input expense amount")? else {
            return self.cancelled("Add");
        };

        let draft = ExpenseDraft::new(description.trim(), category, amount);
        let expense = self.store.add(draft)?;
        output::success(format!("Expense {} added.", expense.id));
        self.check_limit(&expense.date)
    }

    fn update(&mut self) -> Result<(), CliError> {
        let Some(id) = self.input.read_line("Enter expense ID to change")? else {
            return self.cancelled("Update");
        };
        let id = id.trim().to_string();
        let Some(current) = self.store.find(&id)? else {
            output::warning(format!("ID `{}` not found...", id));
            return Ok(());
        };
        let config = self.settings()?;
        views::print_expense_detail(&current, &config.currency_symbol);

        let Some(description) = self
            .input
            .read_line("New description (leave empty to keep)")?
        else {
            return self.cancelled("Update");
        };
        let Some(category) = self.pick_category(Some(current.category))? else {
            return self.cancelled("Update");
        };
        let Some(amount) = self.prompt_amount_or_keep("New amount (leave empty to keep)")? else {
            return self.cancelled("Update");
        };

        let description = description.trim();
        let patch = ExpensePatch {
            description: (!description.is_empty()).then(|| description.to_string()),
            category: Some(category),
            amount,
            date: Some(today()),
        };
        let updated = self.store.update(&id, &patch)?;
        output::success(format!("Expense {} updated.", updated.id));
        views::print_expense_detail(&updated, &config.currency_symbol);
        self.check_limit(&updated.date)
    }

    fn delete(&mut self) -> Result<(), CliError> {
        let Some(id) = self.input.read_line("Enter expense ID to delete")? else {
            return self.cancelled("Delete");
        };
        let id = id.trim().to_string();
        let Some(current) = self.store.find(&id)? else {
            output::warning(format!("ID `{}` not found...", id));
            return Ok(());
        };
        let config = self.settings()?;
        views::print_expense_detail(&current, &config.currency_symbol);

        if !self.input.confirm("Delete this expense?")? {
            return self.cancelled("Delete");
        }
        match self.store.delete(&id) {
            Ok(removed) => output::success(format!("Expense {} deleted.", removed.id)),
            Err(ExpenseError::NotFound(id)) => output::warning(format!("ID `{}` not found...", id)),
            Err(err) => return Err(err.into()),
        }
        Ok(())
    }

    fn summary(&mut self) -> Result<(), CliError> {
        let expenses = self.store.load()?;
        let config = self.settings()?;
        let summaries = SummaryService::monthly(&expenses, config.monthly_limit);
        output::section("Monthly summary");
        views::print_summaries(&summaries, config.monthly_limit, &config.currency_symbol);
        self.pause()
    }

    fn set_limit(&mut self) -> Result<(), CliError> {
        let config = self.settings()?;
        let symbol = config.currency_symbol.as_str();
        match config.monthly_limit {
            Some(limit) => output::info(format!(
                "Current monthly limit: {}",
                format_amount(limit, symbol)
            )),
            None => output::info("No monthly limit set."),
        }
        loop {
            let Some(raw) = self.input.read_line("Enter monthly limit (0 to clear)")? else {
                return self.cancelled("Set limit");
            };
            match self.config.set_limit(&raw) {
                Ok(Some(limit)) => {
                    output::success(format!(
                        "Monthly limit set to {}.",
                        format_amount(limit, symbol)
                    ));
                    return Ok(());
                }
                Ok(None) => {
                    output::success("Monthly limit cleared.");
                    return Ok(());
                }
                Err(ExpenseError::InvalidInput(_)) => output::warning(INVALID_AMOUNT),
                Err(err) => return Err(err.into()),
            }
        }
    }

    fn export(&mut self) -> Result<(), CliError> {
        let default = self.export_path.display().to_string();
        let Some(answer) = self
            .input
            .read_line(&format!("Export path (leave empty for {})", default))?
        else {
            return self.cancelled("Export");
        };
        let path = match answer.trim() {
            "" => self.export_path.clone(),
            custom => PathBuf::from(custom),
        };
        let expenses = self.store.load()?;
        let rows = ExportService::export_to_path(&expenses, &path)?;
        output::success(format!("Exported {} expense(s) to {}.", rows, path.display()));
        Ok(())
    }

    /// Category picker; with `current`, a leading "keep" option is offered.
    fn pick_category(&mut self, current: Option<Category>) -> Result<Option<Category>, CliError> {
        let mut options = Vec::new();
        if let Some(current) = current {
            options.push(format!("Keep current ({})", current));
        }
        options.extend(Category::labels());

        let offset = usize::from(current.is_some());
        match self.input.select(CATEGORY_LABEL, &options)? {
            Selection::Chosen(index) if index < offset => Ok(current),
            Selection::Chosen(index) => Ok(Category::from_index(index - offset)),
            Selection::Cancelled | Selection::Closed => Ok(None),
        }
    }

    /// Re-prompts until a valid amount is entered; `None` means the user backed out.
    fn prompt_amount(&mut self, prompt: &str) -> Result<Option<f64>, CliError> {
        loop {
            let Some(raw) = self.input.read_line(prompt)? else {
                return Ok(None);
            };
            match parse_money(&raw) {
                Some(value) => return Ok(Some(value)),
                None => output::warning(INVALID_AMOUNT),
            }
        }
    }

    /// Like [`Self::prompt_amount`], but an empty answer keeps the current value.
    fn prompt_amount_or_keep(&mut self, prompt: &str) -> Result<Option<Option<f64>>, CliError> {
        loop {
            let Some(raw) = self.input.read_line(prompt)? else {
                return Ok(None);
            };
            if raw.trim().is_empty() {
                return Ok(Some(None));
            }
            match parse_money(&raw) {
                Some(value) => return Ok(Some(Some(value))),
                None => output::warning(INVALID_AMOUNT),
            }
        }
    }

    fn check_limit(&self, date: &str) -> Result<(), CliError> {
        let config = self.settings()?;
        let expenses = self.store.load()?;
        views::warn_if_over_limit(&expenses, date, config.monthly_limit, &config.currency_symbol);
        Ok(())
    }

    fn cancelled(&self, action: &str) -> Result<(), CliError> {
        output::info(format!("{} cancelled.", action));
        Ok(())
    }

    fn clear_screen(&self) {
        if !self.input.is_interactive() {
            return;
        }
        let mut stdout = io::stdout();
        let _ = execute!(stdout, Clear(ClearType::All), MoveTo(0, 0));
    }

    fn pause(&mut self) -> Result<(), CliError> {
        if self.input.is_interactive() {
            self.input.read_line("Press ENTER to continue")?;
        }
        Ok(())
    }
}
