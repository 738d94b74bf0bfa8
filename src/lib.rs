//! Activity-to-CO2 emission calculation with an append-only SQLite ledger.
//!
//! # Examples
//!
//! Calculating against the built-in factor table:
//! ```
//! use carbonlog::factors::{compute, CalcError};
//!
//! assert_eq!(compute("transport", "Car", 100.0), Ok(21.0));
//! assert!(matches!(
//!     compute("transport", "Bicycle", 5.0),
//!     Err(CalcError::NotFound { .. })
//! ));
//! ```
//!
//! Logging calculations and reading totals:
//! ```no_run
//! use carbonlog::{ledger::sqlite::SqliteLedger, tracker::Tracker};
//!
//! let mut tracker = Tracker::new(SqliteLedger::new("carbon_emissions.db")).expect("open ledger");
//! let logged = tracker.calculate_and_log("food", "Beef", 2.0).expect("log");
//! assert_eq!(logged.emission, 54.0);
//! for total in tracker.totals().expect("totals") {
//!     println!("{}: {:.2}", total.category, total.total);
//! }
//! ```
#![deny(missing_docs)]

/// Environment-driven settings.
pub mod config;
/// Emission factor table and calculation.
pub mod factors;
/// Form validation and display text.
pub mod form;
/// Ledger abstraction with SQLite and in-memory stores.
pub mod ledger;
/// Calculate-then-log coordinator.
pub mod tracker;
/// Shared identifiers and record types.
pub mod types;
