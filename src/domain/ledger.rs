//! The full expense ledger plus the summary report types built from it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::expense::{Category, UserRecord};

/// The full collection of all users' expense records, keyed by the
/// caller-supplied user identifier.
///
/// A key is present if and only if at least one expense has ever been
/// registered for that user; a purge removes the key entirely. The map is
/// ordered so that serializing an unchanged ledger reproduces the same
/// document byte for byte.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Ledger(BTreeMap<String, UserRecord>);

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to a user's record, if one exists.
    pub fn record(&self, user_id: &str) -> Option<&UserRecord> {
        self.0.get(user_id)
    }

    /// Returns the user's record, creating it when absent. The display name
    /// is refreshed on every call.
    pub fn record_mut(&mut self, user_id: &str, display_name: &str) -> &mut UserRecord {
        let record = self
            .0
            .entry(user_id.to_string())
            .or_insert_with(|| UserRecord::new(display_name));
        record.display_name = display_name.to_string();
        record
    }

    /// Removes the user's record entirely, returning it when present.
    pub fn remove_record(&mut self, user_id: &str) -> Option<UserRecord> {
        self.0.remove(user_id)
    }

    pub fn user_count(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn users(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// Aggregated total for a single category bucket.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: f64,
    pub percent: f64,
}

/// Complete summary for one user: category totals ranked by descending
/// amount, plus the overall figures.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ExpenseSummary {
    pub per_category: Vec<CategoryTotal>,
    pub grand_total: f64,
    pub count: usize,
}
