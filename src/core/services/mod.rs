pub mod expense_service;
pub mod summary_service;

pub use expense_service::ExpenseService;
pub use summary_service::SummaryService;

use crate::errors::LedgerError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("no expenses registered for `{0}`")]
    NoExpenses(String),
}

impl ServiceError {
    /// True for the recoverable "nothing registered yet" case, which the
    /// dispatcher renders as guidance rather than a failure.
    pub fn is_no_expenses(&self) -> bool {
        matches!(self, Self::NoExpenses(_))
    }
}
