use std::path::{Path, PathBuf};

use tracing::debug;

use super::StorageBackend;
use crate::{
    errors::{ExpenseError, Result},
    ledger::Expense,
    utils::persistence::{read_optional, write_atomic},
};

/// Pretty-printed JSON array of expenses stored in a single file.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for JsonStorage {
    fn load(&self) -> Result<Vec<Expense>> {
        let Some(contents) = read_optional(&self.path)? else {
            debug!(path = %self.path.display(), "no expense file yet, starting empty");
            return Ok(Vec::new());
        };
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }
        let expenses: Vec<Expense> =
            serde_json::from_str(&contents).map_err(|err| ExpenseError::Malformed {
                path: self.path.clone(),
                reason: err.to_string(),
            })?;
        debug!(path = %self.path.display(), count = expenses.len(), "loaded expenses");
        Ok(expenses)
    }

    fn save(&self, expenses: &[Expense]) -> Result<()> {
        let json = serde_json::to_string_pretty(expenses)?;
        write_atomic(&self.path, json.as_bytes())?;
        debug!(path = %self.path.display(), count = expenses.len(), "saved expenses");
        Ok(())
    }
}
