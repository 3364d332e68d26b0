//! CSV export of the full expense list.

use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::errors::{ExpenseError, Result};
use crate::ledger::{sort_by_date, Expense};
use crate::utils::persistence::write_atomic;

pub const CSV_HEADER: [&str; 5] = ["id", "description", "category", "amount", "date"];

pub struct ExportService;

impl ExportService {
    /// Writes a header row followed by one row per expense, ordered by date.
    pub fn write_csv<W: Write>(expenses: &[Expense], writer: W) -> Result<()> {
        let mut sorted = expenses.to_vec();
        sort_by_date(&mut sorted);

        let mut out = csv::Writer::from_writer(writer);
        out.write_record(CSV_HEADER)?;
        for expense in &sorted {
            out.write_record([
                expense.id.as_str(),
                expense.description.as_str(),
                expense.category.label(),
                format!("{:.2}", expense.amount).as_str(),
                expense.date.as_str(),
            ])?;
        }
        out.flush()?;
        Ok(())
    }

    /// Renders the CSV to a string.
    pub fn to_csv_string(expenses: &[Expense]) -> Result<String> {
        let mut buffer = Vec::new();
        Self::write_csv(expenses, &mut buffer)?;
        String::from_utf8(buffer).map_err(|err| ExpenseError::InvalidInput(err.to_string()))
    }

    /// Writes the CSV to `path` atomically and returns the number of rows.
    pub fn export_to_path(expenses: &[Expense], path: &Path) -> Result<usize> {
        let rendered = Self::to_csv_string(expenses)?;
        write_atomic(path, rendered.as_bytes())?;
        info!(path = %path.display(), rows = expenses.len(), "exported expenses");
        Ok(expenses.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{Category, ExpenseDraft};

    #[test]
    fn empty_list_exports_header_only() {
        let rendered = ExportService::to_csv_string(&[]).unwrap();
        assert_eq!(rendered, "id,description,category,amount,date\n");
    }

    #[test]
    fn rows_are_sorted_and_escaped() {
        let expenses = vec![
            Expense::new(
                "E0001",
                ExpenseDraft::new("Dinner, with \"friends\"", Category::FoodAndDrinks, 40.0)
                    .on("2024-02-01"),
            ),
            Expense::new(
                "E0002",
                ExpenseDraft::new("Bus", Category::Transportation, 2.5).on("2024-01-05"),
            ),
        ];

        let rendered = ExportService::to_csv_string(&expenses).unwrap();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[1], "E0002,Bus,Transportation,2.50,2024-01-05");
        assert_eq!(
            lines[2],
            "E0001,\"Dinner, with \"\"friends\"\"\",Food & Drinks,40.00,2024-02-01"
        );
    }
}
