//! Implements a struct that holds the state of the REST server.

use std::marker::{Send, Sync};

use crate::{services::TransactionService, stores::TransactionStore};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState<T>
where
    T: TransactionStore + Send + Sync,
{
    /// The service that applies the ledger's rules to transactions.
    pub transaction_service: TransactionService<T>,
}

impl<T> AppState<T>
where
    T: TransactionStore + Send + Sync,
{
    /// Create a new [AppState].
    pub fn new(transaction_service: TransactionService<T>) -> Self {
        Self {
            transaction_service,
        }
    }
}
