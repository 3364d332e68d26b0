//! Store operations and the reporting services built on top of them.

pub mod expense_store;
pub mod services;

pub use expense_store::ExpenseStore;
