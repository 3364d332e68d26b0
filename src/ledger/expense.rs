use std::cmp::Ordering;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use super::category::Category;

pub const ID_PREFIX: char = 'E';
pub const DATE_FORMAT: &str = "%Y-%m-%d";
const ID_WIDTH: usize = 4;

/// One tracked transaction as it is persisted on disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: String,
    #[serde(rename = "desc")]
    pub description: String,
    #[serde(rename = "cat")]
    pub category: Category,
    pub amount: f64,
    pub date: String,
}

impl Expense {
    pub fn new(id: impl Into<String>, draft: ExpenseDraft) -> Self {
        Self {
            id: id.into(),
            description: draft.description,
            category: draft.category,
            amount: draft.amount,
            date: draft.date,
        }
    }

    /// Applies the populated fields of `patch`; the identifier never changes.
    pub fn apply(&mut self, patch: &ExpensePatch) {
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(date) = &patch.date {
            self.date = date.clone();
        }
    }

    pub fn month(&self) -> String {
        month_key(&self.date)
    }
}

/// Fields for a record that has not been assigned an identifier yet.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseDraft {
    pub description: String,
    pub category: Category,
    pub amount: f64,
    pub date: String,
}

impl ExpenseDraft {
    /// Draft dated today.
    pub fn new(description: impl Into<String>, category: Category, amount: f64) -> Self {
        Self {
            description: description.into(),
            category,
            amount,
            date: today(),
        }
    }

    pub fn on(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }
}

/// Partial edit of an existing record. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpensePatch {
    pub description: Option<String>,
    pub category: Option<Category>,
    pub amount: Option<f64>,
    pub date: Option<String>,
}

impl ExpensePatch {
    pub fn is_empty(&self) -> bool {
        self.description.is_none()
            && self.category.is_none()
            && self.amount.is_none()
            && self.date.is_none()
    }
}

/// Next sequential identifier: `E0001` for an empty list, otherwise the last
/// record's numeric suffix plus one.
///
/// Suffixes are treated as decimal strings of any width. When the last suffix is
/// not numeric, or its successor is already taken, the largest suffix in the list
/// is incremented instead so the result never collides.
pub fn generate_id(existing: &[Expense]) -> String {
    let Some(last) = existing.last() else {
        return format_id("1");
    };
    let taken: Vec<String> = existing
        .iter()
        .filter_map(|expense| id_sequence(&expense.id))
        .collect();

    let next = match id_sequence(&last.id).map(|sequence| increment(&sequence)) {
        Some(next) if !taken.contains(&next) => next,
        _ => {
            let highest = taken
                .iter()
                .max_by(|a, b| by_magnitude(a, b))
                .map(String::as_str)
                .unwrap_or("0");
            increment(highest)
        }
    };
    format_id(&next)
}

fn format_id(sequence: &str) -> String {
    format!("{}{:0>width$}", ID_PREFIX, sequence, width = ID_WIDTH)
}

/// Digits after the prefix with leading zeros stripped, if they are all digits.
fn id_sequence(id: &str) -> Option<String> {
    let mut chars = id.chars();
    chars.next();
    let digits = chars.as_str();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let trimmed = digits.trim_start_matches('0');
    Some(if trimmed.is_empty() { "0" } else { trimmed }.to_string())
}

fn increment(sequence: &str) -> String {
    let mut digits = sequence.as_bytes().to_vec();
    let mut index = digits.len();
    loop {
        if index == 0 {
            digits.insert(0, b'1');
            break;
        }
        index -= 1;
        if digits[index] == b'9' {
            digits[index] = b'0';
        } else {
            digits[index] += 1;
            break;
        }
    }
    digits.into_iter().map(char::from).collect()
}

fn by_magnitude(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// First-match linear scan by identifier.
pub fn find_by_id(id: &str, expenses: &[Expense]) -> Option<usize> {
    expenses.iter().position(|expense| expense.id == id)
}

/// Stable ascending sort on the date string.
pub fn sort_by_date(expenses: &mut [Expense]) {
    expenses.sort_by(|a, b| a.date.cmp(&b.date));
}

/// `YYYY-MM` for ISO dates; anything unparseable is grouped under its raw value.
pub fn month_key(date: &str) -> String {
    match NaiveDate::parse_from_str(date, DATE_FORMAT) {
        Ok(parsed) => parsed.format("%Y-%m").to_string(),
        Err(_) => date.to_string(),
    }
}

pub fn today() -> String {
    Local::now().date_naive().format(DATE_FORMAT).to_string()
}
