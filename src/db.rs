/*! This module implements the set-up of the application's database. */

use rusqlite::{Connection, Transaction as SqlTransaction, TransactionBehavior};

use crate::{Error, stores::sqlite::transaction::create_transaction_table};

/// Create the application's tables in the database.
///
/// Runs in an exclusive transaction so concurrent start-ups cannot interleave
/// schema creation.
///
/// # Errors
/// Returns an [Error::SqlError] if the schema could not be created.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let transaction = SqlTransaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    create_transaction_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}

#[cfg(test)]
mod db_tests {
    use rusqlite::Connection;

    use super::initialize;

    #[test]
    fn initialize_can_run_twice() {
        let connection =
            Connection::open_in_memory().expect("Could not open database in memory.");

        initialize(&connection).expect("Could not initialize database.");
        initialize(&connection).expect("Could not initialize database a second time.");
    }
}
