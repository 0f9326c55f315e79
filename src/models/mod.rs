//! This module defines the domain data types.

pub use balance::Balance;
pub use transaction::{Transaction, TransactionBuilder, TransactionData};

mod balance;
mod transaction;

/// Alias for the integer type used for mapping to database IDs.
pub type TransactionId = i64;
