//! Ties the storage backend to the ledger operations.
//!
//! Every public operation is a single load, mutate, save transaction over
//! the full document; nothing is cached between calls. The internal mutex
//! serializes those transactions within this process. Writers in other
//! processes still race last-writer-wins on the shared document, a known
//! limitation of the flat-file store.

use std::sync::Mutex;

use crate::core::services::{ExpenseService, ServiceResult, SummaryService};
use crate::domain::{Expense, ExpenseSummary};
use crate::storage::StorageBackend;

pub struct LedgerManager {
    storage: Box<dyn StorageBackend>,
    guard: Mutex<()>,
}

impl LedgerManager {
    pub fn new(storage: Box<dyn StorageBackend>) -> Self {
        Self {
            storage,
            guard: Mutex::new(()),
        }
    }

    /// Registers one expense and persists the updated ledger.
    pub fn register(
        &self,
        user_id: &str,
        display_name: &str,
        amount: f64,
        raw_label: &str,
    ) -> ServiceResult<Expense> {
        let _guard = self.guard.lock().expect("ledger guard poisoned");
        let mut ledger = self.storage.load()?;
        let expense = ExpenseService::register(&mut ledger, user_id, display_name, amount, raw_label);
        self.storage.save(&ledger)?;
        tracing::debug!(
            user = user_id,
            amount,
            category = %expense.general_category,
            "expense registered"
        );
        Ok(expense)
    }

    /// Ranked per-category totals for the user. Read-only.
    pub fn summarize(&self, user_id: &str) -> ServiceResult<ExpenseSummary> {
        let _guard = self.guard.lock().expect("ledger guard poisoned");
        let ledger = self.storage.load()?;
        SummaryService::totals(&ledger, user_id)
    }

    /// The user's most recent `limit` expenses, newest first. Read-only.
    pub fn history(&self, user_id: &str, limit: i64) -> ServiceResult<Vec<Expense>> {
        let _guard = self.guard.lock().expect("ledger guard poisoned");
        let ledger = self.storage.load()?;
        ExpenseService::recent(&ledger, user_id, limit)
    }

    /// Deletes the user's record, reporting how many expenses were removed.
    /// Skips the write entirely when there was nothing to remove.
    pub fn purge(&self, user_id: &str) -> ServiceResult<usize> {
        let _guard = self.guard.lock().expect("ledger guard poisoned");
        let mut ledger = self.storage.load()?;
        let removed = ExpenseService::purge(&mut ledger, user_id);
        if removed > 0 {
            self.storage.save(&ledger)?;
            tracing::debug!(user = user_id, removed, "expenses purged");
        }
        Ok(removed)
    }
}
