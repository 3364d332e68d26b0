//! Expense domain model, identifiers, and amount helpers.

pub mod category;
pub mod expense;
pub mod money;

pub use category::Category;
pub use expense::{
    find_by_id, generate_id, month_key, sort_by_date, today, Expense, ExpenseDraft, ExpensePatch,
};
pub use money::{format_amount, parse_money};
