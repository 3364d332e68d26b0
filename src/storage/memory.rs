use std::cell::RefCell;

use super::StorageBackend;
use crate::{errors::Result, ledger::Expense};

/// Volatile backend for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    expenses: RefCell<Vec<Expense>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn load(&self) -> Result<Vec<Expense>> {
        Ok(self.expenses.borrow().clone())
    }

    fn save(&self, expenses: &[Expense]) -> Result<()> {
        *self.expenses.borrow_mut() = expenses.to_vec();
        Ok(())
    }
}
