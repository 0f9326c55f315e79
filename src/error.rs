//! Defines the app level error type and the conversion to JSON error responses.
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::models::TransactionId;

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A transaction submitted for creation already had an ID.
    ///
    /// IDs are assigned by the store, so the client must not choose one.
    #[error("the transaction id must not be set")]
    IdNotAllowed,

    /// A transaction submitted for update was missing its ID.
    #[error("the transaction id is required")]
    IdRequired,

    /// A transaction was submitted with an empty or whitespace-only
    /// description.
    #[error("the transaction description must not be blank")]
    BlankDescription,

    /// The transaction ID used for an update or delete does not exist in the
    /// store.
    #[error("the transaction id does not exist: {0}")]
    NoSuchTransaction(TransactionId),

    /// A path parameter could not be parsed as a transaction ID.
    #[error("the transaction id is not valid: {0}")]
    InvalidTransactionId(String),

    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the parameters
    /// (e.g., ID) are correct and that the resource has been created.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {error}");
                Error::SqlError(error)
            }
        }
    }
}

/// The JSON body returned for requests that fail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// When the error response was created.
    #[serde(with = "time::serde::rfc3339")]
    pub date_time: OffsetDateTime,
    /// The reason phrase of the HTTP status code, e.g. "Bad Request".
    pub http_status: String,
    /// A description of what was wrong with the request.
    pub message: String,
}

impl ErrorResponse {
    fn new(status: StatusCode, message: String) -> Self {
        Self {
            date_time: OffsetDateTime::now_utc(),
            http_status: status.canonical_reason().unwrap_or_default().to_owned(),
            message,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => StatusCode::NOT_FOUND.into_response(),
            Error::SqlError(_) => {
                let status = StatusCode::INTERNAL_SERVER_ERROR;
                let body = ErrorResponse::new(
                    status,
                    "an unexpected error occurred, check the server logs for details".to_owned(),
                );

                (status, Json(body)).into_response()
            }
            error => {
                let status = StatusCode::BAD_REQUEST;
                let body = ErrorResponse::new(status, error.to_string());

                (status, Json(body)).into_response()
            }
        }
    }
}
