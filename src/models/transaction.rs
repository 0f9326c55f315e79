//! This file defines the type `Transaction`, the core type of the ledger, and
//! the types used to create one.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::models::TransactionId;

/// An event where money was either paid into or out of the ledger.
///
/// To create a new `Transaction`, use [Transaction::build].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// The ID of the transaction, assigned by the store.
    pub id: TransactionId,
    /// When the server recorded the transaction.
    ///
    /// Refreshed on every write, including updates.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// The amount of money paid in (positive) or out (negative).
    pub amount: f64,
    /// A text description of what the transaction was for.
    pub description: String,
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// Shortcut for [TransactionBuilder] for discoverability.
    pub fn build(amount: f64, description: &str) -> TransactionBuilder {
        TransactionBuilder {
            id: None,
            created_at: OffsetDateTime::now_utc(),
            amount,
            description: description.to_owned(),
        }
    }
}

/// A builder for creating [Transaction] instances ready to be saved.
#[derive(Debug, PartialEq, Clone)]
pub struct TransactionBuilder {
    /// The ID of the stored transaction to overwrite.
    ///
    /// `None` inserts a new row and lets the store assign the ID.
    pub id: Option<TransactionId>,

    /// When the server recorded the transaction.
    ///
    /// Defaults to the current server time in UTC.
    pub created_at: OffsetDateTime,

    /// The amount of money paid in (positive) or out (negative).
    pub amount: f64,

    /// A text description of what the transaction was for.
    pub description: String,
}

impl TransactionBuilder {
    /// Set the ID of the stored transaction to overwrite.
    pub fn id(mut self, id: Option<TransactionId>) -> Self {
        self.id = id;
        self
    }

    /// Set when the transaction was recorded.
    pub fn created_at(mut self, created_at: OffsetDateTime) -> Self {
        self.created_at = created_at;
        self
    }
}

/// A transaction as submitted by a client.
///
/// `id` must be empty when creating a transaction and set when updating one.
/// A missing `description` is treated the same as a blank one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionData {
    /// The ID of the transaction to update. Must be empty for creation.
    #[serde(default)]
    pub id: Option<TransactionId>,
    /// The amount of money paid in (positive) or out (negative).
    #[serde(default)]
    pub amount: f64,
    /// A text description of what the transaction was for.
    #[serde(default)]
    pub description: Option<String>,
}
