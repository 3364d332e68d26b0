use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use strsim::levenshtein;

use crate::errors::ExpenseError;

const SUGGESTION_DISTANCE: usize = 3;

/// Closed set of labels classifying what an expense was for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    #[serde(rename = "Food & Drinks")]
    FoodAndDrinks,
    Transportation,
    Utilities,
    Housing,
    Entertainment,
    Shopping,
    Health,
    Education,
    Travel,
    Others,
}

impl Category {
    /// Every category, in the order the selection menu presents them.
    pub const ALL: [Category; 10] = [
        Category::FoodAndDrinks,
        Category::Transportation,
        Category::Utilities,
        Category::Housing,
        Category::Entertainment,
        Category::Shopping,
        Category::Health,
        Category::Education,
        Category::Travel,
        Category::Others,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::FoodAndDrinks => "Food & Drinks",
            Category::Transportation => "Transportation",
            Category::Utilities => "Utilities",
            Category::Housing => "Housing",
            Category::Entertainment => "Entertainment",
            Category::Shopping => "Shopping",
            Category::Health => "Health",
            Category::Education => "Education",
            Category::Travel => "Travel",
            Category::Others => "Others",
        }
    }

    pub fn labels() -> Vec<String> {
        Self::ALL.iter().map(|cat| cat.label().to_string()).collect()
    }

    pub fn from_index(index: usize) -> Option<Category> {
        Self::ALL.get(index).copied()
    }

    /// Closest label to a mistyped category, if any is reasonably near.
    pub fn suggest(input: &str) -> Option<Category> {
        let needle = input.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .map(|cat| (*cat, levenshtein(&needle, &cat.label().to_ascii_lowercase())))
            .filter(|(_, distance)| *distance <= SUGGESTION_DISTANCE)
            .min_by_key(|(_, distance)| *distance)
            .map(|(cat, _)| cat)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = ExpenseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let needle = value.trim();
        if let Some(found) = Category::ALL
            .iter()
            .copied()
            .find(|cat| cat.label().eq_ignore_ascii_case(needle))
        {
            return Ok(found);
        }
        let message = match Category::suggest(needle) {
            Some(hint) => format!("unknown category `{}`; did you mean `{}`?", needle, hint),
            None => format!("unknown category `{}`", needle),
        };
        Err(ExpenseError::InvalidInput(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_labels_case_insensitively() {
        assert_eq!(
            "food & drinks".parse::<Category>().unwrap(),
            Category::FoodAndDrinks
        );
        assert_eq!(" Travel ".parse::<Category>().unwrap(), Category::Travel);
    }

    #[test]
    fn rejects_unknown_label() {
        let err = "Groceries".parse::<Category>().unwrap_err();
        assert!(matches!(err, ExpenseError::InvalidInput(_)));
    }

    #[test]
    fn suggests_close_label() {
        assert_eq!(Category::suggest("helth"), Some(Category::Health));
        assert_eq!(Category::suggest("zzzzzzzzzz"), None);
        let err = "Trvel".parse::<Category>().unwrap_err();
        assert!(err.to_string().contains("did you mean `Travel`"));
    }

    #[test]
    fn serializes_as_label() {
        let json = serde_json::to_string(&Category::FoodAndDrinks).unwrap();
        assert_eq!(json, "\"Food & Drinks\"");
        let back: Category = serde_json::from_str("\"Others\"").unwrap();
        assert_eq!(back, Category::Others);
    }
}
