//! This file defines the routes for the transaction type.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    AppState, Error,
    models::{Balance, Transaction, TransactionData, TransactionId},
    stores::TransactionStore,
};

/// A route handler for creating a new transaction.
pub async fn create_transaction<T>(
    State(state): State<AppState<T>>,
    Json(data): Json<TransactionData>,
) -> Result<Json<Transaction>, Error>
where
    T: TransactionStore + Send + Sync,
{
    let mut service = state.transaction_service;
    let transaction = service.create(data)?;

    Ok(Json(transaction))
}

/// A route handler for listing every transaction, most recently recorded
/// first.
pub async fn get_all_transactions<T>(
    State(state): State<AppState<T>>,
) -> Result<Json<Vec<Transaction>>, Error>
where
    T: TransactionStore + Send + Sync,
{
    let transactions = state.transaction_service.find_all()?;

    Ok(Json(transactions))
}

/// A route handler for getting a transaction by its ID.
///
/// This function will return the status code 404 if the requested resource
/// does not exist (e.g., not created yet).
pub async fn get_transaction<T>(
    State(state): State<AppState<T>>,
    Path(id): Path<String>,
) -> Result<Json<Transaction>, Error>
where
    T: TransactionStore + Send + Sync,
{
    let id = parse_transaction_id(&id)?;
    let transaction = state
        .transaction_service
        .find_by_id(id)?
        .ok_or(Error::NotFound)?;

    Ok(Json(transaction))
}

/// A route handler for overwriting an existing transaction.
///
/// The ID of the transaction to overwrite is taken from the request body, not
/// the path.
pub async fn update_transaction<T>(
    State(state): State<AppState<T>>,
    Json(data): Json<TransactionData>,
) -> Result<Json<Transaction>, Error>
where
    T: TransactionStore + Send + Sync,
{
    let mut service = state.transaction_service;
    let transaction = service.update(data)?;

    Ok(Json(transaction))
}

/// A route handler for deleting a transaction by its ID.
///
/// Responds with an empty 200 on success.
pub async fn delete_transaction<T>(
    State(state): State<AppState<T>>,
    Path(id): Path<String>,
) -> Result<StatusCode, Error>
where
    T: TransactionStore + Send + Sync,
{
    let id = parse_transaction_id(&id)?;
    let mut service = state.transaction_service;
    service.delete_by_id(id)?;

    Ok(StatusCode::OK)
}

/// A route handler for the ledger's current balance.
pub async fn get_current_balance<T>(
    State(state): State<AppState<T>>,
) -> Result<Json<Balance>, Error>
where
    T: TransactionStore + Send + Sync,
{
    let balance = state.transaction_service.current_balance()?;

    Ok(Json(balance))
}

/// Parse `text` as a transaction ID, reporting failure as a client error.
fn parse_transaction_id(text: &str) -> Result<TransactionId, Error> {
    text.parse()
        .map_err(|_| Error::InvalidTransactionId(text.to_owned()))
}
