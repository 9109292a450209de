//! Domain models for recorded income and expense transactions.

use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{category::Category, common::*};

/// A single historical money movement. Records are never edited after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: Category,
    pub description: String,
    pub date: NaiveDate,
}

impl Transaction {
    pub fn new(
        amount: f64,
        kind: TransactionKind,
        category: Category,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4().simple().to_string(),
            amount,
            kind,
            category,
            description: description.into(),
            date,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// Calendar month the transaction belongs to.
    pub fn period(&self) -> PeriodKey {
        PeriodKey::of(self.date)
    }

    /// Amount with the sign implied by the kind (expenses negative).
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Displayable for Transaction {
    fn display_label(&self) -> String {
        format!("{} {} [{}]", self.date, self.description, self.category)
    }
}

/// Input for recording a transaction; the identifier is assigned on insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub amount: f64,
    pub kind: TransactionKind,
    pub category: Category,
    pub description: String,
    pub date: NaiveDate,
}

impl NewTransaction {
    pub fn into_transaction(self) -> Transaction {
        Transaction::new(
            self.amount,
            self.kind,
            self.category,
            self.description,
            self.date,
        )
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
/// Direction of a money movement.
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
        };
        f.write_str(label)
    }
}

impl FromStr for TransactionKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "income" | "in" => Ok(TransactionKind::Income),
            "expense" | "out" => Ok(TransactionKind::Expense),
            other => Err(format!("unknown transaction type `{other}`")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_stored_records() {
        let raw = r#"{"id":"3","amount":45.5,"type":"EXPENSE","category":"FOOD","description":"Grocery Store","date":"2024-05-03"}"#;
        let txn: Transaction = serde_json::from_str(raw).expect("valid record");
        assert_eq!(txn.id, "3");
        assert_eq!(txn.kind, TransactionKind::Expense);
        assert_eq!(txn.category, Category::Food);
        assert_eq!(txn.date, NaiveDate::from_ymd_opt(2024, 5, 3).unwrap());
        assert_eq!(txn.signed_amount(), -45.5);
    }

    #[test]
    fn rejects_malformed_dates() {
        let raw = r#"{"id":"x","amount":1,"type":"INCOME","category":"SALARY","description":"d","date":"2024-13-40"}"#;
        assert!(serde_json::from_str::<Transaction>(raw).is_err());
    }

    #[test]
    fn fresh_transactions_get_distinct_ids() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let a = Transaction::new(1.0, TransactionKind::Income, Category::Salary, "a", date);
        let b = Transaction::new(1.0, TransactionKind::Income, Category::Salary, "a", date);
        assert_ne!(a.id, b.id);
    }
}
