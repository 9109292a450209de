//! Recording, deleting and listing transactions.

use std::cmp::Reverse;

use fintrack_domain::{NewTransaction, Transaction, UserData};

use crate::CoreError;

pub struct TransactionService;

impl TransactionService {
    /// Validates and prepends a transaction, returning its generated id.
    pub fn add(data: &mut UserData, new: NewTransaction) -> Result<String, CoreError> {
        Self::validate(&new)?;
        let transaction = new.into_transaction();
        let id = transaction.id.clone();
        data.transactions.insert(0, transaction);
        Ok(id)
    }

    /// Removes the transaction with `id`.
    pub fn delete(data: &mut UserData, id: &str) -> Result<Transaction, CoreError> {
        let index = data
            .transactions
            .iter()
            .position(|txn| txn.id == id)
            .ok_or_else(|| CoreError::TransactionNotFound(id.to_string()))?;
        Ok(data.transactions.remove(index))
    }

    /// Newest first, optionally filtered by a case-insensitive search over the
    /// category label, the description and the amount.
    pub fn list_sorted<'a>(
        transactions: &'a [Transaction],
        search: Option<&str>,
    ) -> Vec<&'a Transaction> {
        let mut sorted: Vec<&Transaction> = transactions.iter().collect();
        sorted.sort_by_key(|txn| Reverse(txn.date));

        let needle = match search.map(str::trim) {
            Some(term) if !term.is_empty() => term.to_lowercase(),
            _ => return sorted,
        };
        sorted
            .into_iter()
            .filter(|txn| Self::matches(txn, &needle))
            .collect()
    }

    fn matches(txn: &Transaction, needle: &str) -> bool {
        txn.category.label().to_lowercase().contains(needle)
            || txn.description.to_lowercase().contains(needle)
            || txn.amount.to_string().contains(needle)
    }

    fn validate(new: &NewTransaction) -> Result<(), CoreError> {
        if !(new.amount > 0.0) || !new.amount.is_finite() {
            return Err(CoreError::Validation(format!(
                "amount must be positive, got {}",
                new.amount
            )));
        }
        if new.description.trim().is_empty() {
            return Err(CoreError::Validation("description is required".into()));
        }
        Ok(())
    }
}
