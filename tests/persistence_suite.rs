use std::fs;

use expense_tracker::{
    errors::ExpenseError,
    ledger::{Category, Expense, ExpenseDraft},
    storage::{JsonStorage, StorageBackend},
    utils::persistence::tmp_path,
};
use tempfile::tempdir;

fn sample_expenses() -> Vec<Expense> {
    vec![
        Expense::new(
            "E0001",
            ExpenseDraft::new("Coffee", Category::FoodAndDrinks, 4.5).on("2024-03-01"),
        ),
        Expense::new(
            "E0002",
            ExpenseDraft::new("Train, return", Category::Transportation, 18.25).on("2024-01-15"),
        ),
        Expense::new(
            "E0003",
            ExpenseDraft::new("", Category::Others, 0.0).on("2024-01-15"),
        ),
    ]
}

#[test]
fn save_then_load_is_a_fixed_point() {
    let temp = tempdir().unwrap();
    let storage = JsonStorage::new(temp.path().join("expenses.json"));
    let expenses = sample_expenses();

    storage.save(&expenses).expect("initial save");
    let loaded = storage.load().expect("reload");
    assert_eq!(loaded, expenses);

    let first = fs::read_to_string(storage.path()).unwrap();
    storage.save(&loaded).expect("second save");
    let second = fs::read_to_string(storage.path()).unwrap();
    assert_eq!(first, second, "re-saving a loaded list must not change the file");
}

#[test]
fn persisted_fields_keep_stable_names_and_order() {
    let temp = tempdir().unwrap();
    let storage = JsonStorage::new(temp.path().join("expenses.json"));
    storage.save(&sample_expenses()[..1]).unwrap();

    let raw = fs::read_to_string(storage.path()).unwrap();
    let positions: Vec<usize> = ["\"id\"", "\"desc\"", "\"cat\"", "\"amount\"", "\"date\""]
        .iter()
        .map(|key| raw.find(key).expect("field present"))
        .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}

#[test]
fn atomic_save_failure_preserves_original_file() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("expenses.json");
    let storage = JsonStorage::new(&path);
    storage.save(&sample_expenses()[..1]).expect("initial save");
    let original = fs::read_to_string(&path).unwrap();

    // A directory at the staging path makes File::create fail.
    let staging = tmp_path(&path);
    fs::create_dir_all(&staging).unwrap();

    let result = storage.save(&sample_expenses());
    assert!(result.is_err(), "save must fail when staging path is a directory");
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        original,
        "failed save must not corrupt the original file"
    );
}

#[test]
fn malformed_file_is_reported_not_panicked() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("expenses.json");
    fs::write(&path, r#"[{"id": "E0001", "desc": "x", "cat": "Snacks", "amount": 1, "date": "2024-01-01"}]"#)
        .unwrap();

    let err = JsonStorage::new(&path).load().unwrap_err();
    assert!(matches!(err, ExpenseError::Malformed { .. }), "got {err:?}");
    assert!(err.to_string().contains("expenses.json"));
}

#[test]
fn legacy_file_with_mixed_prefixes_loads() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("expenses.json");
    fs::write(
        &path,
        r#"[
 {"id": "E0001", "desc": "Lunch", "cat": "Food & Drinks", "amount": 12, "date": "01-01-2024"},
 {"id": "T0002", "desc": "Bus", "cat": "Transportation", "amount": 2.5, "date": "02-01-2024"}
]"#,
    )
    .unwrap();

    let loaded = JsonStorage::new(&path).load().unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[1].id, "T0002");
    assert_eq!(loaded[0].amount, 12.0);
    assert_eq!(expense_tracker::ledger::generate_id(&loaded), "E0003");
}
