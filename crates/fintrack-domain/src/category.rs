//! Domain types representing spending and income categories.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Fixed set of categories a transaction can be filed under.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Food,
    Rent,
    Salary,
    Transport,
    Entertainment,
    Shopping,
    Utilities,
    Others,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Food,
        Category::Rent,
        Category::Salary,
        Category::Transport,
        Category::Entertainment,
        Category::Shopping,
        Category::Utilities,
        Category::Others,
    ];

    /// Human readable label used in listings and search.
    pub fn label(self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Rent => "Rent",
            Category::Salary => "Salary",
            Category::Transport => "Transport",
            Category::Entertainment => "Entertainment",
            Category::Shopping => "Shopping",
            Category::Utilities => "Utilities",
            Category::Others => "Others",
        }
    }

    /// Salary is income-only and never carries a spending limit.
    pub fn is_budgetable(self) -> bool {
        !matches!(self, Category::Salary)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category `{}`", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim();
        Category::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(normalized))
            .ok_or_else(|| UnknownCategory(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_labels_case_insensitively() {
        assert_eq!("food".parse::<Category>(), Ok(Category::Food));
        assert_eq!(" UTILITIES ".parse::<Category>(), Ok(Category::Utilities));
        assert!("groceries".parse::<Category>().is_err());
    }

    #[test]
    fn serializes_in_upper_case() {
        let json = serde_json::to_string(&Category::Entertainment).unwrap();
        assert_eq!(json, "\"ENTERTAINMENT\"");
    }

    #[test]
    fn salary_is_not_budgetable() {
        let budgetable: Vec<_> = Category::ALL
            .into_iter()
            .filter(|c| c.is_budgetable())
            .collect();
        assert_eq!(budgetable.len(), 7);
        assert!(!budgetable.contains(&Category::Salary));
    }
}
