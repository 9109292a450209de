//! The document persisted for each user.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{category::Category, goal::SavingGoal, profile::UserProfile, transaction::Transaction};

/// Monthly spending limit per category.
pub type Budgets = BTreeMap<Category, f64>;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub budgets: Budgets,
    pub profile: UserProfile,
    #[serde(default)]
    pub saving_goals: Vec<SavingGoal>,
}

impl UserData {
    /// An empty document for a freshly registered profile.
    pub fn empty(profile: UserProfile) -> Self {
        Self {
            transactions: Vec::new(),
            budgets: Budgets::new(),
            profile,
            saving_goals: Vec::new(),
        }
    }

    pub fn transaction(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id == id)
    }

    pub fn goal(&self, id: &str) -> Option<&SavingGoal> {
        self.saving_goals.iter().find(|goal| goal.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_documents_without_goals() {
        let raw = r#"{
            "transactions": [],
            "budgets": {"FOOD": 300, "RENT": 1200},
            "profile": {"name": "ana", "currency": "€", "monthlyGoal": 0, "recurringTransactions": []}
        }"#;
        let data: UserData = serde_json::from_str(raw).expect("valid document");
        assert!(data.saving_goals.is_empty());
        assert_eq!(data.budgets.get(&Category::Food), Some(&300.0));
        assert_eq!(data.budgets.len(), 2);
    }

    #[test]
    fn writes_camel_case_keys() {
        let data = UserData::empty(UserProfile::new("ana"));
        let json = serde_json::to_value(&data).unwrap();
        assert!(json.get("savingGoals").is_some());
        assert!(json["profile"].get("recurringTransactions").is_some());
    }
}
