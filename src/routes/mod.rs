//! This module defines the REST API's route handlers.

mod transaction;

pub use transaction::{
    create_transaction, delete_transaction, get_all_transactions, get_current_balance,
    get_transaction, update_transaction,
};
