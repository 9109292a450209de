use std::{
    collections::{HashMap, HashSet},
    sync::Mutex,
};

use fintrack_domain::{Identifiable, PeriodKey, Transaction, UserData, SALARY_MARKER};
use serde_json::Value;

use crate::CoreError;

const USER_DATA_PREFIX: &str = "fintrack_data_";

/// Abstraction over byte-oriented key-value backends (files, browser-style local stores, memory).
pub trait KeyValueStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CoreError>;
    fn set(&self, key: &str, value: &[u8]) -> Result<(), CoreError>;
    /// Removes `key`, returning whether it existed.
    fn remove(&self, key: &str) -> Result<bool, CoreError>;
}

/// Volatile storage for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, Vec<u8>>>, CoreError> {
        self.entries
            .lock()
            .map_err(|_| CoreError::Storage("memory storage lock poisoned".into()))
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CoreError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), CoreError> {
        self.lock()?.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool, CoreError> {
        Ok(self.lock()?.remove(key).is_some())
    }
}

/// Storage key holding the document of `user`.
pub fn user_data_key(user: &str) -> String {
    format!("{}{}", USER_DATA_PREFIX, user)
}

/// A decoded document plus the transaction rows that could not be read.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedUserData {
    pub data: UserData,
    /// One message per skipped row.
    pub skipped: Vec<String>,
}

/// Reads and decodes the document of `user`; `None` when nothing is stored yet.
pub fn load_user_data(
    storage: &dyn KeyValueStorage,
    user: &str,
) -> Result<Option<UserData>, CoreError> {
    Ok(load_user_data_lenient(storage, user)?.map(|loaded| loaded.data))
}

/// Like [`load_user_data`], but reports the transaction rows it had to drop.
///
/// Rows that do not decode (a bad date, an unknown category) are skipped so
/// that the rest of the document stays usable.
pub fn load_user_data_lenient(
    storage: &dyn KeyValueStorage,
    user: &str,
) -> Result<Option<LoadedUserData>, CoreError> {
    let Some(bytes) = storage.get(&user_data_key(user))? else {
        return Ok(None);
    };
    let mut document: Value = serde_json::from_slice(&bytes)?;

    let rows = match document.get_mut("transactions") {
        Some(Value::Array(rows)) => std::mem::take(rows),
        _ => Vec::new(),
    };
    if let Value::Object(fields) = &mut document {
        fields.insert("transactions".into(), Value::Array(Vec::new()));
    }
    let mut data: UserData = serde_json::from_value(document)?;

    let mut skipped = Vec::new();
    for (index, row) in rows.into_iter().enumerate() {
        let label = row
            .get("id")
            .and_then(Value::as_str)
            .map(|id| format!("transaction {id}"))
            .unwrap_or_else(|| format!("transaction #{index}"));
        match serde_json::from_value::<Transaction>(row) {
            Ok(txn) => data.transactions.push(txn),
            Err(err) => skipped.push(format!("skipped unreadable {label}: {err}")),
        }
    }

    Ok(Some(LoadedUserData { data, skipped }))
}

pub fn save_user_data(
    storage: &dyn KeyValueStorage,
    user: &str,
    data: &UserData,
) -> Result<(), CoreError> {
    let bytes = serde_json::to_vec(data)?;
    storage.set(&user_data_key(user), &bytes)
}

pub fn delete_user_data(storage: &dyn KeyValueStorage, user: &str) -> Result<bool, CoreError> {
    storage.remove(&user_data_key(user))
}

/// Detects anomalies within a stored document that reconciliation tolerates but
/// the user should know about.
pub fn user_data_warnings(data: &UserData) -> Vec<String> {
    let mut warnings = Vec::new();

    duplicate_ids("transaction", &data.transactions, &mut warnings);
    duplicate_ids("saving goal", &data.saving_goals, &mut warnings);
    duplicate_ids(
        "recurring item",
        &data.profile.recurring_transactions,
        &mut warnings,
    );

    for txn in &data.transactions {
        if txn.amount <= 0.0 {
            warnings.push(format!(
                "transaction {} has non-positive amount {}",
                txn.id, txn.amount
            ));
        }
    }

    let mut markers: Vec<String> = data
        .profile
        .recurring_transactions
        .iter()
        .map(|rec| rec.marker())
        .collect();
    if data.profile.salary().is_some() {
        markers.push(SALARY_MARKER.to_string());
    }
    let mut seen: HashSet<(&str, PeriodKey)> = HashSet::new();
    for txn in &data.transactions {
        if !markers.iter().any(|marker| marker == &txn.description) {
            continue;
        }
        if !seen.insert((txn.description.as_str(), txn.period())) {
            warnings.push(format!(
                "`{}` appears more than once in {}",
                txn.description,
                txn.period()
            ));
        }
    }

    for rec in &data.profile.recurring_transactions {
        if rec.day_of_month > 28 {
            warnings.push(format!(
                "recurring item `{}` is due on day {} and is skipped in shorter months",
                rec.description, rec.day_of_month
            ));
        }
    }
    warnings
}

fn duplicate_ids<T: Identifiable>(kind: &str, items: &[T], warnings: &mut Vec<String>) {
    let mut ids = HashSet::new();
    for item in items {
        if !ids.insert(item.id()) {
            warnings.push(format!("duplicate {kind} id {}", item.id()));
        }
    }
}
