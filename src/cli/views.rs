//! Text rendering shared by the menu loop and the one-shot subcommands.

use crate::cli::output;
use crate::cli::table::{Table, TableColumn};
use crate::core::services::{MonthlySummary, SummaryService};
use crate::ledger::{format_amount, Expense};

const DESCRIPTION_WIDTH: usize = 32;

pub fn expense_table(expenses: &[Expense], symbol: &str) -> String {
    let mut table = Table::new(vec![
        TableColumn::left("ID"),
        TableColumn::left("Description").max_width(DESCRIPTION_WIDTH),
        TableColumn::left("Category"),
        TableColumn::right("Amount"),
        TableColumn::left("Date"),
    ]);
    for expense in expenses {
        table.push_row(vec![
            expense.id.clone(),
            expense.description.clone(),
            expense.category.to_string(),
            format_amount(expense.amount, symbol),
            expense.date.clone(),
        ]);
    }
    table.render()
}

/// Prints the full list, or the empty notice when there is nothing to show.
pub fn print_expenses(expenses: &[Expense], symbol: &str) {
    if expenses.is_empty() {
        output::separator();
        output::info("Expense is empty...");
        output::separator();
        return;
    }
    output::raw(expense_table(expenses, symbol));
    output::raw(format!(
        "\n{} record(s), total {}",
        expenses.len(),
        format_amount(SummaryService::grand_total(expenses), symbol)
    ));
}

pub fn expense_detail(expense: &Expense, symbol: &str) -> Vec<String> {
    vec![
        format!("ID: {}", expense.id),
        format!("Description: {}", expense.description),
        format!("Category: {}", expense.category),
        format!("Amount: {}", format_amount(expense.amount, symbol)),
        format!("Last update: {}", expense.date),
    ]
}

pub fn print_expense_detail(expense: &Expense, symbol: &str) {
    output::separator();
    for line in expense_detail(expense, symbol) {
        output::raw(line);
    }
    output::separator();
}

pub fn print_summaries(summaries: &[MonthlySummary], limit: Option<f64>, symbol: &str) {
    if summaries.is_empty() {
        output::info("No expenses recorded yet.");
        return;
    }
    match limit {
        Some(limit) => output::info(format!("Monthly limit: {}", format_amount(limit, symbol))),
        None => output::info("No monthly limit set."),
    }
    for summary in summaries {
        output::section(format!("{} ({} record(s))", summary.month, summary.count));
        let mut table = Table::new(vec![
            TableColumn::left("Category"),
            TableColumn::right("Amount"),
        ]);
        for entry in &summary.categories {
            table.push_row(vec![
                entry.category.to_string(),
                format_amount(entry.total, symbol),
            ]);
        }
        output::raw(table.render());
        output::raw(format!("Total: {}", format_amount(summary.total, symbol)));
        if let Some(over) = summary.overspend(limit) {
            output::warning(format!(
                "{} is over the monthly limit by {}",
                summary.month,
                format_amount(over, symbol)
            ));
        }
    }
}

/// Warns when the month containing `date` has gone past `limit`.
pub fn warn_if_over_limit(expenses: &[Expense], date: &str, limit: Option<f64>, symbol: &str) {
    let Some(limit) = limit else {
        return;
    };
    let total = SummaryService::month_total(expenses, date);
    if total > limit {
        tracing::warn!(total, limit, "monthly limit exceeded");
        output::warning(format!(
            "Monthly limit exceeded: spent {} of {} this month",
            format_amount(total, symbol),
            format_amount(limit, symbol)
        ));
    }
}
