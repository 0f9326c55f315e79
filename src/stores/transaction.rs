//! Defines the transaction store trait.

use crate::{
    Error,
    models::{Transaction, TransactionBuilder, TransactionId},
};

/// Handles the persistence of transactions.
pub trait TransactionStore {
    /// Write `builder` to the store.
    ///
    /// Inserts a new row when `builder` has no ID, otherwise overwrites the
    /// row with that ID in full, inserting it if it does not exist.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if there is an unexpected SQL error.
    fn save(&mut self, builder: TransactionBuilder) -> Result<Transaction, Error>;

    /// Retrieve the transaction with `id`, or `None` if there is no such
    /// transaction.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if there is an unexpected SQL error.
    fn find_by_id(&self, id: TransactionId) -> Result<Option<Transaction>, Error>;

    /// Report whether a transaction with `id` exists in the store.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if there is an unexpected SQL error.
    fn exists_by_id(&self, id: TransactionId) -> Result<bool, Error>;

    /// Remove the transaction with `id` from the store.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::NotFound] if `id` does not refer to a stored transaction,
    /// - or [Error::SqlError] if there is some other SQL error.
    fn delete_by_id(&mut self, id: TransactionId) -> Result<(), Error>;

    /// Retrieve every transaction, most recently recorded first.
    ///
    /// Transactions recorded at the same instant are ordered newest ID first
    /// so the order is stable.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if there is an unexpected SQL error.
    fn find_all_by_created_at_desc(&self) -> Result<Vec<Transaction>, Error>;

    /// Sum the amounts of every transaction in the store.
    ///
    /// Returns `None` when the store holds no transactions.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if there is an unexpected SQL error.
    fn sum_of_amounts(&self) -> Result<Option<f64>, Error>;
}
