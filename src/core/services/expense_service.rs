//! Business logic for registering, listing, and pruning expenses.

use chrono::{Local, SubsecRound};

use crate::classifier::classify;
use crate::core::services::{ServiceError, ServiceResult};
use crate::domain::{Expense, Ledger};

/// Operations on a single user's expense log.
pub struct ExpenseService;

impl ExpenseService {
    /// Appends a new expense for `user_id` and returns the stored value.
    ///
    /// Creates the user record on first use and refreshes the display name on
    /// every call. The label is normalized (leading "en " connector dropped,
    /// title-cased) and classified once, here; the amount is taken as-is.
    pub fn register(
        ledger: &mut Ledger,
        user_id: &str,
        display_name: &str,
        amount: f64,
        raw_label: &str,
    ) -> Expense {
        let label = normalize_label(raw_label);
        let general_category = classify(&label);
        let expense = Expense {
            amount,
            label,
            general_category,
            timestamp: Local::now().naive_local().trunc_subsecs(0),
        };
        ledger
            .record_mut(user_id, display_name)
            .expenses
            .push(expense.clone());
        expense
    }

    /// Returns the most recent `limit` expenses, newest first.
    ///
    /// A `limit` larger than the log returns everything; a non-positive
    /// `limit` is clamped to zero and yields an empty list.
    pub fn recent(ledger: &Ledger, user_id: &str, limit: i64) -> ServiceResult<Vec<Expense>> {
        let record = ledger
            .record(user_id)
            .filter(|record| !record.expenses.is_empty())
            .ok_or_else(|| ServiceError::NoExpenses(user_id.to_string()))?;
        let take = limit.max(0) as usize;
        Ok(record.expenses.iter().rev().take(take).cloned().collect())
    }

    /// Drops the user's whole record, returning how many expenses it held.
    /// Returns 0 and leaves the ledger untouched when no record exists.
    pub fn purge(ledger: &mut Ledger, user_id: &str) -> usize {
        ledger
            .remove_record(user_id)
            .map(|record| record.expenses.len())
            .unwrap_or(0)
    }
}

fn normalize_label(raw: &str) -> String {
    let trimmed = raw.trim();
    let detail = trimmed.strip_prefix("en ").unwrap_or(trimmed).trim();
    title_case(detail)
}

/// Uppercases the first letter of every alphabetic run and lowercases the
/// rest, the way the stored labels have always been written.
fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut word_start = true;
    for ch in value.chars() {
        if ch.is_alphabetic() {
            if word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            word_start = false;
        } else {
            out.push(ch);
            word_start = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;

    #[test]
    fn register_strips_connector_and_classifies() {
        let mut ledger = Ledger::new();
        let expense = ExpenseService::register(&mut ledger, "u1", "Ana", 150.0, "en Restaurante");
        assert_eq!(expense.label, "Restaurante");
        assert_eq!(expense.general_category, Category::Comida);
        assert_eq!(ledger.record("u1").unwrap().expenses.len(), 1);
    }

    #[test]
    fn register_title_cases_multi_word_labels() {
        let mut ledger = Ledger::new();
        let expense =
            ExpenseService::register(&mut ledger, "u1", "Ana", 80.0, "  en cena con amigos ");
        assert_eq!(expense.label, "Cena Con Amigos");
        assert_eq!(expense.general_category, Category::Comida);
    }

    #[test]
    fn register_keeps_mid_string_connector() {
        let mut ledger = Ledger::new();
        let expense = ExpenseService::register(&mut ledger, "u1", "Ana", 10.0, "pago en tienda");
        assert_eq!(expense.label, "Pago En Tienda");
    }

    #[test]
    fn register_accepts_negative_and_zero_amounts() {
        let mut ledger = Ledger::new();
        ExpenseService::register(&mut ledger, "u1", "Ana", -20.0, "reembolso");
        ExpenseService::register(&mut ledger, "u1", "Ana", 0.0, "ajuste");
        let record = ledger.record("u1").unwrap();
        assert_eq!(record.expenses[0].amount, -20.0);
        assert_eq!(record.expenses[1].amount, 0.0);
    }

    #[test]
    fn recent_returns_newest_first_up_to_limit() {
        let mut ledger = Ledger::new();
        for label in ["uno", "dos", "tres"] {
            ExpenseService::register(&mut ledger, "u1", "Ana", 1.0, label);
        }
        let recent = ExpenseService::recent(&ledger, "u1", 2).unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].label, "Tres");
        assert_eq!(recent[1].label, "Dos");
    }

    #[test]
    fn recent_clamps_non_positive_limits_to_empty() {
        let mut ledger = Ledger::new();
        ExpenseService::register(&mut ledger, "u1", "Ana", 1.0, "uno");
        assert!(ExpenseService::recent(&ledger, "u1", 0).unwrap().is_empty());
        assert!(ExpenseService::recent(&ledger, "u1", -5).unwrap().is_empty());
    }

    #[test]
    fn recent_fails_for_unknown_user() {
        let ledger = Ledger::new();
        let err = ExpenseService::recent(&ledger, "nadie", 10).unwrap_err();
        assert!(err.is_no_expenses());
    }

    #[test]
    fn purge_removes_record_and_reports_count() {
        let mut ledger = Ledger::new();
        for label in ["uno", "dos", "tres"] {
            ExpenseService::register(&mut ledger, "u1", "Ana", 1.0, label);
        }
        assert_eq!(ExpenseService::purge(&mut ledger, "u1"), 3);
        assert!(ledger.record("u1").is_none());
        assert_eq!(ExpenseService::purge(&mut ledger, "u1"), 0);
    }
}
