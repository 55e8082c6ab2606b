pub mod json_backend;

use crate::{domain::Ledger, errors::LedgerError};

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Abstraction over persistence backends holding the full expense ledger.
pub trait StorageBackend: Send + Sync {
    /// Loads the complete ledger. A missing document yields an empty ledger;
    /// a present but unreadable one is an error.
    fn load(&self) -> Result<Ledger>;

    /// Serializes the complete ledger, replacing the previous document.
    fn save(&self, ledger: &Ledger) -> Result<()>;
}

pub use json_backend::JsonStorage;
