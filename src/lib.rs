//! # Split Ledger Core
//!
//! The domain core of a shared-expense ("split bills") application:
//! an in-memory ledger per group that validates expenses and settlements,
//! keeps an exact expense total, and derives per-member balances, monthly
//! views, and settle-up suggestions.
//!
//! ## Features
//!
//! - **Exact arithmetic**: all money is integer minor units (cents); equal
//!   shares distribute division remainders so sums always reconcile
//! - **Validated mutations**: typed errors for every rejected draft, with
//!   no partial state changes on failure
//! - **Derived views**: per-member net balances, descending month buckets,
//!   and greedy settlement suggestions
//! - **Storage abstraction**: the engine is synchronous and pure; the
//!   [`GroupStore`] trait marks the async persistence boundary
//!
//! ## Quick Start
//!
//! ```rust
//! use splitledger_core::{Group, LedgerEngine, RecordDraft};
//!
//! let group = Group::new(
//!     "Road trip".to_string(),
//!     vec!["ana".to_string(), "bo".to_string()],
//! )
//! .unwrap();
//! let mut engine = LedgerEngine::new(group, Vec::new()).unwrap();
//!
//! engine
//!     .add_record(RecordDraft::expense(
//!         "Fuel".to_string(),
//!         4200,
//!         "ana".to_string(),
//!         vec!["ana".to_string(), "bo".to_string()],
//!     ))
//!     .unwrap();
//!
//! assert_eq!(engine.total_expenses(), 4200);
//! let balances = engine.compute_balances();
//! assert_eq!(balances["bo"], -2100);
//! ```

pub mod ledger;
pub mod money;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use ledger::*;
pub use money::MinorUnits;
pub use traits::*;
pub use types::*;
