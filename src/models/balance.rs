//! Defines the model for the ledger balance.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// The sum of all transaction amounts at a point in time.
///
/// Derived from the stored transactions on demand, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Balance {
    /// When the balance was computed.
    #[serde(with = "time::serde::rfc3339")]
    pub date_time: OffsetDateTime,
    /// The balance. Zero for an empty ledger.
    pub balance: f64,
}
