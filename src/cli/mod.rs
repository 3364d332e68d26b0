//! Interactive front end: menu commands, input sources, and rendering.

pub mod commands;
pub mod input;
pub mod output;
mod shell;
pub mod table;
pub mod views;

use std::io;
use std::path::Path;

pub use shell::Dispatcher;

use crate::config::ConfigManager;
use crate::core::ExpenseStore;
use crate::errors::CliError;
use crate::storage::JsonStorage;
use crate::utils::{config_file_for, export_file_for};
use input::{InputSource, ScriptInput, TerminalInput};
use output::OutputPreferences;

/// How the menu reads its answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

impl CliMode {
    /// `EXPENSE_TRACKER_CLI_SCRIPT` switches the menu to line-oriented stdin.
    pub fn from_env() -> Self {
        if std::env::var_os("EXPENSE_TRACKER_CLI_SCRIPT").is_some() {
            CliMode::Script
        } else {
            CliMode::Interactive
        }
    }
}

/// Runs the interactive menu against the expense file at `data_file`.
pub fn run_menu(data_file: &Path, mode: CliMode) -> Result<(), CliError> {
    let input: Box<dyn InputSource> = match mode {
        CliMode::Interactive => Box::new(TerminalInput::new()),
        CliMode::Script => {
            output::set_preferences(OutputPreferences { plain_mode: true });
            Box::new(ScriptInput::new(io::stdin().lock()))
        }
    };

    let mut dispatcher = Dispatcher::new(
        ExpenseStore::new(Box::new(JsonStorage::new(data_file))),
        ConfigManager::new(config_file_for(data_file)),
        input,
        export_file_for(data_file),
    );
    dispatcher.run()
}
