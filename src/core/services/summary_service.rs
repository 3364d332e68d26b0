//! Aggregation helpers for monthly summaries and budget-limit checks.

use std::collections::BTreeMap;

use crate::ledger::{month_key, Category, Expense};

/// Spending for one category within a month.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: f64,
    pub count: usize,
}

/// Totals for one calendar month, with the limit verdict already applied.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySummary {
    pub month: String,
    pub total: f64,
    pub count: usize,
    pub categories: Vec<CategoryTotal>,
    pub over_limit: bool,
}

impl MonthlySummary {
    /// How far the month went past `limit`, if it did.
    pub fn overspend(&self, limit: Option<f64>) -> Option<f64> {
        limit
            .filter(|limit| self.total > *limit)
            .map(|limit| self.total - limit)
    }
}

pub struct SummaryService;

impl SummaryService {
    /// Groups expenses by month (ascending) and by category within each month.
    pub fn monthly(expenses: &[Expense], limit: Option<f64>) -> Vec<MonthlySummary> {
        let mut months: BTreeMap<String, BTreeMap<Category, (f64, usize)>> = BTreeMap::new();
        for expense in expenses {
            let slot = months
                .entry(expense.month())
                .or_default()
                .entry(expense.category)
                .or_insert((0.0, 0));
            slot.0 += expense.amount;
            slot.1 += 1;
        }

        months
            .into_iter()
            .map(|(month, per_category)| {
                let categories: Vec<CategoryTotal> = per_category
                    .into_iter()
                    .map(|(category, (total, count))| CategoryTotal {
                        category,
                        total,
                        count,
                    })
                    .collect();
                let total = categories.iter().map(|entry| entry.total).sum::<f64>();
                let count = categories.iter().map(|entry| entry.count).sum::<usize>();
                MonthlySummary {
                    over_limit: exceeds(total, limit),
                    month,
                    total,
                    count,
                    categories,
                }
            })
            .collect()
    }

    /// Sum of all amounts dated within the month of `date`.
    pub fn month_total(expenses: &[Expense], date: &str) -> f64 {
        let month = month_key(date);
        expenses
            .iter()
            .filter(|expense| expense.month() == month)
            .map(|expense| expense.amount)
            .sum()
    }

    pub fn grand_total(expenses: &[Expense]) -> f64 {
        expenses.iter().map(|expense| expense.amount).sum()
    }
}

fn exceeds(total: f64, limit: Option<f64>) -> bool {
    limit.is_some_and(|limit| total > limit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::ExpenseDraft;

    fn expense(id: &str, category: Category, amount: f64, date: &str) -> Expense {
        Expense::new(id, ExpenseDraft::new("x", category, amount).on(date))
    }

    fn sample() -> Vec<Expense> {
        vec![
            expense("E0001", Category::Travel, 300.0, "2024-02-10"),
            expense("E0002", Category::FoodAndDrinks, 12.5, "2024-01-03"),
            expense("E0003", Category::FoodAndDrinks, 7.5, "2024-01-20"),
            expense("E0004", Category::Housing, 900.0, "2024-01-01"),
        ]
    }

    #[test]
    fn groups_by_month_in_ascending_order() {
        let summaries = SummaryService::monthly(&sample(), None);
        let months: Vec<&str> = summaries.iter().map(|s| s.month.as_str()).collect();
        assert_eq!(months, ["2024-01", "2024-02"]);
        assert_eq!(summaries[0].total, 920.0);
        assert_eq!(summaries[0].count, 3);
        assert!(!summaries[0].over_limit);
    }

    #[test]
    fn categories_follow_menu_order() {
        let summaries = SummaryService::monthly(&sample(), None);
        let january: Vec<(Category, f64)> = summaries[0]
            .categories
            .iter()
            .map(|entry| (entry.category, entry.total))
            .collect();
        assert_eq!(
            january,
            [(Category::FoodAndDrinks, 20.0), (Category::Housing, 900.0)]
        );
    }

    #[test]
    fn flags_months_above_limit() {
        let summaries = SummaryService::monthly(&sample(), Some(500.0));
        assert!(summaries[0].over_limit);
        assert!(!summaries[1].over_limit);
        assert_eq!(summaries[0].overspend(Some(500.0)), Some(420.0));
        assert_eq!(summaries[1].overspend(Some(500.0)), None);
    }

    #[test]
    fn total_equal_to_limit_is_not_over() {
        let summaries = SummaryService::monthly(&sample(), Some(300.0));
        assert!(!summaries[1].over_limit);
    }

    #[test]
    fn month_total_only_counts_matching_month() {
        assert_eq!(SummaryService::month_total(&sample(), "2024-01-31"), 920.0);
        assert_eq!(SummaryService::month_total(&sample(), "2024-03-01"), 0.0);
        assert_eq!(SummaryService::grand_total(&sample()), 1220.0);
    }
}
