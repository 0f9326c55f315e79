//! Implements a SQLite backed transaction store.
use std::sync::{Arc, Mutex};

use rusqlite::{Connection, OptionalExtension, Row};

use crate::{
    Error,
    models::{Transaction, TransactionBuilder, TransactionId},
    stores::TransactionStore,
};

/// Stores transactions in a SQLite database.
#[derive(Debug, Clone)]
pub struct SQLiteTransactionStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteTransactionStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl TransactionStore for SQLiteTransactionStore {
    /// Write `builder` to the database.
    ///
    /// Inserts a new row when `builder` has no ID, otherwise overwrites the
    /// row with that ID in full, inserting it if it does not exist.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if there is an unexpected SQL error.
    ///
    /// # Panics
    /// Panics if the lock for the database connection is already held by the
    /// same thread.
    fn save(&mut self, builder: TransactionBuilder) -> Result<Transaction, Error> {
        let connection = self.connection.lock().unwrap();

        let transaction = match builder.id {
            None => connection
                .prepare(
                    "INSERT INTO \"transaction\" (created_at, amount, description)
                     VALUES (?1, ?2, ?3)
                     RETURNING id, created_at, amount, description",
                )?
                .query_row(
                    (builder.created_at, builder.amount, builder.description),
                    map_transaction_row,
                )?,
            Some(id) => connection
                .prepare(
                    "INSERT INTO \"transaction\" (id, created_at, amount, description)
                     VALUES (?1, ?2, ?3, ?4)
                     ON CONFLICT(id) DO UPDATE SET
                        created_at = excluded.created_at,
                        amount = excluded.amount,
                        description = excluded.description
                     RETURNING id, created_at, amount, description",
                )?
                .query_row(
                    (id, builder.created_at, builder.amount, builder.description),
                    map_transaction_row,
                )?,
        };

        Ok(transaction)
    }

    /// Retrieve the transaction with `id` from the database.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if there is an unexpected SQL error.
    ///
    /// # Panics
    /// Panics if the lock for the database connection is already held by the
    /// same thread.
    fn find_by_id(&self, id: TransactionId) -> Result<Option<Transaction>, Error> {
        let transaction = self
            .connection
            .lock()
            .unwrap()
            .prepare(
                "SELECT id, created_at, amount, description FROM \"transaction\" WHERE id = :id",
            )?
            .query_row(&[(":id", &id)], map_transaction_row)
            .optional()?;

        Ok(transaction)
    }

    /// Report whether a transaction with `id` exists in the database.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if there is an unexpected SQL error.
    ///
    /// # Panics
    /// Panics if the lock for the database connection is already held by the
    /// same thread.
    fn exists_by_id(&self, id: TransactionId) -> Result<bool, Error> {
        let exists = self.connection.lock().unwrap().query_row(
            "SELECT EXISTS (SELECT 1 FROM \"transaction\" WHERE id = :id)",
            &[(":id", &id)],
            |row| row.get(0),
        )?;

        Ok(exists)
    }

    /// Remove the transaction with `id` from the database.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::NotFound] if `id` does not refer to a stored transaction,
    /// - or [Error::SqlError] if there is some other SQL error.
    ///
    /// # Panics
    /// Panics if the lock for the database connection is already held by the
    /// same thread.
    fn delete_by_id(&mut self, id: TransactionId) -> Result<(), Error> {
        let rows_deleted = self
            .connection
            .lock()
            .unwrap()
            .execute("DELETE FROM \"transaction\" WHERE id = :id", &[(":id", &id)])?;

        match rows_deleted {
            0 => Err(Error::NotFound),
            _ => Ok(()),
        }
    }

    /// Retrieve every transaction in the database, most recently recorded
    /// first.
    ///
    /// Rows are written with UTC timestamps, so the text ordering of
    /// `created_at` is chronological. Ties are broken by ID so the most
    /// recently inserted row comes first.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if there is an unexpected SQL error.
    ///
    /// # Panics
    /// Panics if the lock for the database connection is already held by the
    /// same thread.
    fn find_all_by_created_at_desc(&self) -> Result<Vec<Transaction>, Error> {
        self.connection
            .lock()
            .unwrap()
            .prepare(
                "SELECT id, created_at, amount, description FROM \"transaction\"
                 ORDER BY created_at DESC, id DESC",
            )?
            .query_map([], map_transaction_row)?
            .map(|maybe_transaction| maybe_transaction.map_err(Error::SqlError))
            .collect()
    }

    /// Sum the amounts of every transaction in the database.
    ///
    /// Returns `None` when the database holds no transactions (SQL `SUM`
    /// returns NULL for an empty set).
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if there is an unexpected SQL error.
    ///
    /// # Panics
    /// Panics if the lock for the database connection is already held by the
    /// same thread.
    fn sum_of_amounts(&self) -> Result<Option<f64>, Error> {
        let sum = self.connection.lock().unwrap().query_row(
            "SELECT SUM(amount) FROM \"transaction\"",
            [],
            |row| row.get(0),
        )?;

        Ok(sum)
    }
}

/// Create the transaction table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS \"transaction\" (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                created_at TEXT NOT NULL,
                amount REAL NOT NULL,
                description TEXT NOT NULL
                )",
        (),
    )?;

    // Ensure the sequence starts at 1
    connection.execute(
        "INSERT OR IGNORE INTO sqlite_sequence (name, seq) VALUES ('transaction', 0)",
        (),
    )?;

    // Index used by the newest-first listing.
    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_transaction_created_at ON \"transaction\"(created_at);",
        (),
    )?;

    Ok(())
}

/// Map a database row to a Transaction.
fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let id = row.get(0)?;
    let created_at = row.get(1)?;
    let amount = row.get(2)?;
    let description = row.get(3)?;

    Ok(Transaction {
        id,
        created_at,
        amount,
        description,
    })
}
