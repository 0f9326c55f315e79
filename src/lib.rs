//! Tallybook is a small ledger for keeping track of money paid in and out.
//!
//! This library provides a JSON REST API for recording transactions and
//! reporting the ledger's running balance.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod app_state;
mod db;
mod endpoints;
mod error;
mod models;
mod routes;
mod routing;
mod services;
mod stores;

pub use app_state::AppState;
pub use db::initialize as initialize_db;
pub use error::{Error, ErrorResponse};
pub use models::{Balance, Transaction, TransactionBuilder, TransactionData, TransactionId};
pub use routing::build_router;
pub use services::TransactionService;
pub use stores::{
    TransactionStore,
    sqlite::{SQLAppState, SQLiteTransactionStore, create_app_state},
};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
