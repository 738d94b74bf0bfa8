/// In-memory ledger with manual group-by.
pub mod memory;
/// SQLite-backed ledger.
pub mod sqlite;

use crate::types::{CategoryTotal, EmissionDraft, EmissionRecord, RecordId};

/// Storage-level failure.
#[derive(Debug)]
pub enum LedgerError {
    /// SQLite open, read or write failure.
    Sqlite(rusqlite::Error),
    /// Filesystem failure around the database file.
    Io(std::io::Error),
    /// A draft carried a NaN or infinite value in the named field.
    NonFinite(&'static str),
    /// Any other storage failure.
    Message(String),
}

impl From<rusqlite::Error> for LedgerError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl std::fmt::Display for LedgerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LedgerError::Sqlite(e) => write!(f, "sqlite error: {e}"),
            LedgerError::Io(e) => write!(f, "io error: {e}"),
            LedgerError::NonFinite(field) => write!(f, "{field} must be a finite number"),
            LedgerError::Message(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for LedgerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LedgerError::Sqlite(e) => Some(e),
            LedgerError::Io(e) => Some(e),
            LedgerError::NonFinite(_) | LedgerError::Message(_) => None,
        }
    }
}

/// Result alias for ledger operations.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Append-only emission store with a grouped-sum query.
pub trait EmissionLedger {
    /// Ensures the backing table exists. Idempotent; never drops data.
    fn initialize(&mut self) -> LedgerResult<()>;

    /// Writes one immutable record and returns its assigned id.
    /// Drafts with a non-finite amount or emission are rejected.
    fn append(&mut self, draft: &EmissionDraft) -> LedgerResult<RecordId>;

    /// Sums emission per category. Order is unspecified.
    fn totals_by_category(&self) -> LedgerResult<Vec<CategoryTotal>>;

    /// All records in id order.
    fn records(&self) -> LedgerResult<Vec<EmissionRecord>>;

    /// Sum over every category, `0.0` when empty.
    fn grand_total(&self) -> LedgerResult<f64> {
        Ok(self.totals_by_category()?.iter().map(|t| t.total).sum())
    }
}

pub(crate) fn check_finite(draft: &EmissionDraft) -> LedgerResult<()> {
    if !draft.amount.is_finite() {
        return Err(LedgerError::NonFinite("amount"));
    }
    if !draft.emission.is_finite() {
        return Err(LedgerError::NonFinite("emission"));
    }
    Ok(())
}
