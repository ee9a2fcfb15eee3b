//! Ledger module containing the engine and its derived views

pub mod balance;
pub mod core;
pub mod monthly;

pub use self::balance::*;
pub use self::core::*;
pub use self::monthly::*;
