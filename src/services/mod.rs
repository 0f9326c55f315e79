//! Contains the services that apply the application's rules to the domain
//! [models](crate::models) before they reach a [store](crate::stores).

mod transaction;

pub use transaction::TransactionService;
