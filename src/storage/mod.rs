pub mod json_backend;
pub mod memory;

use crate::{errors::Result, ledger::Expense};

pub use json_backend::JsonStorage;
pub use memory::MemoryStorage;

/// Abstraction over the place the full expense list is kept.
///
/// Backends always load and save the list wholesale; there are no partial updates.
pub trait StorageBackend {
    fn load(&self) -> Result<Vec<Expense>>;
    fn save(&self, expenses: &[Expense]) -> Result<()>;
}
