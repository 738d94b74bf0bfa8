//! Calculate-then-log sequence shared by every front end.

use crate::{
    factors::{CalcError, FactorTable},
    ledger::{EmissionLedger, LedgerError},
    types::{CategoryTotal, EmissionDraft, EmissionRecord, RecordId},
};

/// Failure of a tracker operation.
#[derive(Debug)]
pub enum TrackerError {
    /// Unknown category or activity; nothing was written.
    Calc(CalcError),
    /// The ledger could not be read or written.
    Ledger(LedgerError),
}

impl From<CalcError> for TrackerError {
    fn from(value: CalcError) -> Self {
        Self::Calc(value)
    }
}

impl From<LedgerError> for TrackerError {
    fn from(value: LedgerError) -> Self {
        Self::Ledger(value)
    }
}

impl std::fmt::Display for TrackerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrackerError::Calc(e) => write!(f, "calculation failed: {e}"),
            TrackerError::Ledger(e) => write!(f, "ledger failed: {e}"),
        }
    }
}

impl std::error::Error for TrackerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TrackerError::Calc(e) => Some(e),
            TrackerError::Ledger(e) => Some(e),
        }
    }
}

/// Outcome of a successful [`Tracker::calculate_and_log`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoggedEmission {
    /// Id assigned by the ledger.
    pub id: RecordId,
    /// Computed emission in kg CO2.
    pub emission: f64,
}

/// Couples a factor table with a ledger.
pub struct Tracker<L: EmissionLedger> {
    factors: &'static FactorTable,
    ledger: L,
}

impl<L: EmissionLedger> Tracker<L> {
    /// Initializes `ledger` and wraps it with the built-in factor table.
    pub fn new(ledger: L) -> Result<Self, TrackerError> {
        Self::with_factors(FactorTable::standard(), ledger)
    }

    /// Initializes `ledger` and wraps it with `factors`.
    pub fn with_factors(
        factors: &'static FactorTable,
        mut ledger: L,
    ) -> Result<Self, TrackerError> {
        ledger.initialize()?;
        Ok(Self { factors, ledger })
    }

    /// Factor table used for calculations.
    pub fn factors(&self) -> &'static FactorTable {
        self.factors
    }

    /// Read access to the underlying ledger.
    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Computes the emission and appends it. Unknown pairs write nothing.
    ///
    /// `amount` must be finite; NaN or infinity fails with
    /// [`LedgerError::NonFinite`] on every ledger and nothing is written.
    pub fn calculate_and_log(
        &mut self,
        category: &str,
        activity: &str,
        amount: f64,
    ) -> Result<LoggedEmission, TrackerError> {
        let emission = self.factors.compute(category, activity, amount)?;
        let id = self
            .ledger
            .append(&EmissionDraft::new(category, activity, amount, emission))?;
        Ok(LoggedEmission { id, emission })
    }

    /// Per-category sums from the ledger.
    pub fn totals(&self) -> Result<Vec<CategoryTotal>, TrackerError> {
        Ok(self.ledger.totals_by_category()?)
    }

    /// Every logged record in id order.
    pub fn history(&self) -> Result<Vec<EmissionRecord>, TrackerError> {
        Ok(self.ledger.records()?)
    }

    /// Sum of all logged emissions.
    pub fn grand_total(&self) -> Result<f64, TrackerError> {
        Ok(self.ledger.grand_total()?)
    }

    /// Releases the ledger.
    pub fn into_ledger(self) -> L {
        self.ledger
    }
}
