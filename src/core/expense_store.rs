use tracing::info;

use crate::errors::{ExpenseError, Result};
use crate::ledger::{find_by_id, generate_id, sort_by_date, Expense, ExpenseDraft, ExpensePatch};
use crate::storage::StorageBackend;

/// Load, mutate, and save the expense list as one unit per call.
///
/// Nothing is cached between calls: every operation reads the backend fresh and
/// mutating operations write the whole list back.
pub struct ExpenseStore {
    storage: Box<dyn StorageBackend>,
}

impl ExpenseStore {
    pub fn new(storage: Box<dyn StorageBackend>) -> Self {
        Self { storage }
    }

    /// Records in persisted order.
    pub fn load(&self) -> Result<Vec<Expense>> {
        self.storage.load()
    }

    /// Records ordered by ascending date; equal dates keep persisted order.
    pub fn list_sorted(&self) -> Result<Vec<Expense>> {
        let mut expenses = self.storage.load()?;
        sort_by_date(&mut expenses);
        Ok(expenses)
    }

    pub fn find(&self, id: &str) -> Result<Option<Expense>> {
        let expenses = self.storage.load()?;
        Ok(find_by_id(id, &expenses).map(|index| expenses[index].clone()))
    }

    /// Appends a record with the next sequential identifier and persists the list.
    pub fn add(&self, draft: ExpenseDraft) -> Result<Expense> {
        let mut expenses = self.storage.load()?;
        let expense = Expense::new(generate_id(&expenses), draft);
        expenses.push(expense.clone());
        self.storage.save(&expenses)?;
        info!(id = %expense.id, amount = expense.amount, category = %expense.category, "expense added");
        Ok(expense)
    }

    /// Applies `patch` to the record with `id` and returns the updated record.
    pub fn update(&self, id: &str, patch: &ExpensePatch) -> Result<Expense> {
        let mut expenses = self.storage.load()?;
        let index =
            find_by_id(id, &expenses).ok_or_else(|| ExpenseError::NotFound(id.to_string()))?;
        expenses[index].apply(patch);
        let updated = expenses[index].clone();
        self.storage.save(&expenses)?;
        info!(id = %updated.id, "expense updated");
        Ok(updated)
    }

    /// Removes the record with `id`; an unknown id leaves the file untouched.
    pub fn delete(&self, id: &str) -> Result<Expense> {
        let mut expenses = self.storage.load()?;
        let index =
            find_by_id(id, &expenses).ok_or_else(|| ExpenseError::NotFound(id.to_string()))?;
        let removed = expenses.remove(index);
        self.storage.save(&expenses)?;
        info!(id = %removed.id, "expense deleted");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::Category;
    use crate::storage::{JsonStorage, MemoryStorage};
    use tempfile::tempdir;

    fn memory_store() -> ExpenseStore {
        ExpenseStore::new(Box::new(MemoryStorage::new()))
    }

    fn draft(description: &str, date: &str) -> ExpenseDraft {
        ExpenseDraft::new(description, Category::Shopping, 10.0).on(date)
    }

    #[test]
    fn add_assigns_sequential_ids() {
        let store = memory_store();
        let first = store.add(draft("Shoes", "2024-01-01")).unwrap();
        let second = store.add(draft("Socks", "2024-01-02")).unwrap();

        assert_eq!(first.id, "E0001");
        assert_eq!(second.id, "E0002");
        assert_eq!(store.load().unwrap().len(), 2);
    }

    #[test]
    fn ids_continue_after_delete_of_earlier_record() {
        let store = memory_store();
        store.add(draft("A", "2024-01-01")).unwrap();
        store.add(draft("B", "2024-01-02")).unwrap();
        store.delete("E0001").unwrap();

        let next = store.add(draft("C", "2024-01-03")).unwrap();
        assert_eq!(next.id, "E0003");
    }

    #[test]
    fn update_changes_fields_and_persists() {
        let store = memory_store();
        store.add(draft("Lunch", "2024-01-01")).unwrap();

        let patch = ExpensePatch {
            description: Some("Team lunch".into()),
            category: Some(Category::FoodAndDrinks),
            amount: Some(32.0),
            date: None,
        };
        let updated = store.update("E0001", &patch).unwrap();

        assert_eq!(updated.description, "Team lunch");
        let stored = store.find("E0001").unwrap().unwrap();
        assert_eq!(stored.category, Category::FoodAndDrinks);
        assert_eq!(stored.amount, 32.0);
        assert_eq!(stored.date, "2024-01-01");
    }

    #[test]
    fn update_unknown_id_reports_not_found() {
        let store = memory_store();
        let err = store
            .update("E0404", &ExpensePatch::default())
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn delete_unknown_id_leaves_store_unchanged() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("expenses.json");
        let store = ExpenseStore::new(Box::new(JsonStorage::new(&path)));
        store.add(draft("Keep", "2024-01-01")).unwrap();
        let before = std::fs::read_to_string(&path).unwrap();

        let err = store.delete("E0999").unwrap_err();

        assert!(matches!(err, ExpenseError::NotFound(ref id) if id == "E0999"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn list_sorted_puts_earliest_first() {
        let store = memory_store();
        store.add(draft("March", "2024-03-01")).unwrap();
        store.add(draft("January", "2024-01-15")).unwrap();

        let listed = store.list_sorted().unwrap();
        assert_eq!(listed[0].description, "January");
        assert_eq!(listed[1].description, "March");
        assert_eq!(store.load().unwrap()[0].description, "March");
    }
}
