//! Aggregated reporting over a user's expense log.

use std::cmp::Ordering;

use crate::core::services::{ServiceError, ServiceResult};
use crate::domain::{Category, CategoryTotal, ExpenseSummary, Ledger};

pub struct SummaryService;

impl SummaryService {
    /// Groups the user's expenses by general category and ranks the buckets
    /// by descending total; ties keep first-encounter order (stable sort).
    ///
    /// Percentages are relative to the grand total, which can make individual
    /// buckets exceed 100 % or go negative when refunds are in the log. A
    /// grand total of zero reports every bucket at 0 %.
    pub fn totals(ledger: &Ledger, user_id: &str) -> ServiceResult<ExpenseSummary> {
        let record = ledger
            .record(user_id)
            .filter(|record| !record.expenses.is_empty())
            .ok_or_else(|| ServiceError::NoExpenses(user_id.to_string()))?;

        let mut buckets: Vec<(Category, f64)> = Vec::new();
        let mut grand_total = 0.0;
        for expense in &record.expenses {
            grand_total += expense.amount;
            match buckets
                .iter_mut()
                .find(|(category, _)| *category == expense.general_category)
            {
                Some((_, total)) => *total += expense.amount,
                None => buckets.push((expense.general_category, expense.amount)),
            }
        }
        buckets.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        let per_category = buckets
            .into_iter()
            .map(|(category, total)| CategoryTotal {
                category,
                total,
                percent: percent_of(total, grand_total),
            })
            .collect();

        Ok(ExpenseSummary {
            per_category,
            grand_total,
            count: record.expenses.len(),
        })
    }
}

fn percent_of(total: f64, grand_total: f64) -> f64 {
    if grand_total.abs() > f64::EPSILON {
        (total / grand_total) * 100.0
    } else {
        0.0
    }
}
