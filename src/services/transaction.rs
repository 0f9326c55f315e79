//! Implements the rules for recording transactions and reporting the ledger
//! balance.

use time::OffsetDateTime;

use crate::{
    Error,
    models::{Balance, Transaction, TransactionData, TransactionId},
    stores::TransactionStore,
};

/// Applies the ledger's rules to transactions before they reach the store.
#[derive(Debug, Clone)]
pub struct TransactionService<T>
where
    T: TransactionStore,
{
    store: T,
}

impl<T> TransactionService<T>
where
    T: TransactionStore,
{
    /// Create a new service that persists transactions in `store`.
    pub fn new(store: T) -> Self {
        Self { store }
    }

    /// Record a new transaction and return the stored entity.
    ///
    /// The recorded time is taken from the server clock, ignoring anything
    /// the client sent.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::IdNotAllowed] if `data` has its ID set,
    /// - [Error::BlankDescription] if `data` has a blank or missing
    ///   description,
    /// - or [Error::SqlError] if there is an unexpected SQL error.
    pub fn create(&mut self, data: TransactionData) -> Result<Transaction, Error> {
        if data.id.is_some() {
            return Err(Error::IdNotAllowed);
        }

        let description = validate_description(data.description)?;

        self.store
            .save(Transaction::build(data.amount, &description))
    }

    /// Overwrite the stored transaction with the ID set in `data`.
    ///
    /// The whole row is replaced and the recorded time is refreshed to the
    /// server clock.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::IdRequired] if `data` has no ID,
    /// - [Error::BlankDescription] if `data` has a blank or missing
    ///   description,
    /// - [Error::NoSuchTransaction] if the ID is not in the store,
    /// - or [Error::SqlError] if there is an unexpected SQL error.
    pub fn update(&mut self, data: TransactionData) -> Result<Transaction, Error> {
        let id = data.id.ok_or(Error::IdRequired)?;
        let description = validate_description(data.description)?;

        // A concurrent delete between this check and the save re-inserts the
        // row instead of failing.
        if !self.store.exists_by_id(id)? {
            return Err(Error::NoSuchTransaction(id));
        }

        self.store
            .save(Transaction::build(data.amount, &description).id(Some(id)))
    }

    /// Retrieve the transaction with `id`, or `None` if there is no such
    /// transaction.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if there is an unexpected SQL error.
    pub fn find_by_id(&self, id: TransactionId) -> Result<Option<Transaction>, Error> {
        self.store.find_by_id(id)
    }

    /// Retrieve every transaction, most recently recorded first.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if there is an unexpected SQL error.
    pub fn find_all(&self) -> Result<Vec<Transaction>, Error> {
        self.store.find_all_by_created_at_desc()
    }

    /// Delete the transaction with `id`.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::NoSuchTransaction] if `id` is not in the store,
    /// - or [Error::SqlError] if there is an unexpected SQL error.
    pub fn delete_by_id(&mut self, id: TransactionId) -> Result<(), Error> {
        if !self.store.exists_by_id(id)? {
            return Err(Error::NoSuchTransaction(id));
        }

        self.store.delete_by_id(id)
    }

    /// Compute the ledger's balance, the sum of every transaction amount.
    ///
    /// An empty ledger has a balance of zero.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if there is an unexpected SQL error.
    pub fn current_balance(&self) -> Result<Balance, Error> {
        let sum = self.store.sum_of_amounts()?;

        Ok(Balance {
            date_time: OffsetDateTime::now_utc(),
            balance: sum.unwrap_or(0.0),
        })
    }
}

/// Reject blank and missing descriptions.
fn validate_description(description: Option<String>) -> Result<String, Error> {
    match description {
        Some(description) if !description.trim().is_empty() => Ok(description),
        _ => Err(Error::BlankDescription),
    }
}

#[cfg(test)]
mod transaction_service_tests {
    use std::sync::{Arc, Mutex};

    use rusqlite::Connection;
    use time::{Duration, OffsetDateTime};

    use crate::{
        Error,
        db::initialize,
        models::TransactionData,
        stores::sqlite::SQLiteTransactionStore,
    };

    use super::TransactionService;

    fn get_test_service() -> TransactionService<SQLiteTransactionStore> {
        let connection =
            Connection::open_in_memory().expect("Could not open database in memory.");
        initialize(&connection).expect("Could not initialize database.");

        TransactionService::new(SQLiteTransactionStore::new(Arc::new(Mutex::new(connection))))
    }

    fn transaction_data(amount: f64, description: &str) -> TransactionData {
        TransactionData {
            id: None,
            amount,
            description: Some(description.to_owned()),
        }
    }

    fn assert_recent(timestamp: OffsetDateTime) {
        let age = OffsetDateTime::now_utc() - timestamp;

        assert!(
            age >= Duration::ZERO && age < Duration::minutes(1),
            "got timestamp {timestamp}, want the current server time"
        );
    }

    #[test]
    fn create_returns_stored_transaction() {
        let mut service = get_test_service();
        let amount = 12.3;

        let got = service
            .create(transaction_data(amount, "Weekly groceries"))
            .expect("Could not create transaction");

        assert_eq!(got.id, 1);
        assert_eq!(got.amount, amount);
        assert_eq!(got.description, "Weekly groceries");
    }

    #[test]
    fn create_sets_created_at_to_server_time() {
        let mut service = get_test_service();

        let got = service
            .create(transaction_data(1.0, "Coffee"))
            .expect("Could not create transaction");

        assert_recent(got.created_at);
    }

    #[test]
    fn create_fails_when_id_is_set() {
        let mut service = get_test_service();
        let data = TransactionData {
            id: Some(1),
            amount: 1.0,
            description: Some("Coffee".to_owned()),
        };

        let got = service.create(data);

        assert_eq!(got, Err(Error::IdNotAllowed));
        assert_eq!(
            service.find_all().expect("Could not retrieve transactions"),
            vec![]
        );
    }

    #[test]
    fn create_fails_on_blank_description() {
        let mut service = get_test_service();

        for description in [Some("".to_owned()), Some("   ".to_owned()), None] {
            let data = TransactionData {
                id: None,
                amount: 1.0,
                description: description.clone(),
            };

            let got = service.create(data);

            assert_eq!(
                got,
                Err(Error::BlankDescription),
                "want error for description {description:?}"
            );
        }
    }

    #[test]
    fn update_overwrites_stored_transaction() {
        let mut service = get_test_service();
        let original = service
            .create(transaction_data(12.3, "Coffee"))
            .expect("Could not create transaction");

        let updated = service
            .update(TransactionData {
                id: Some(original.id),
                amount: -99.9,
                description: Some("Refund".to_owned()),
            })
            .expect("Could not update transaction");

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.amount, -99.9);
        assert_eq!(updated.description, "Refund");

        let got = service
            .find_by_id(original.id)
            .expect("Could not retrieve transaction");
        assert_eq!(got, Some(updated));

        let all = service.find_all().expect("Could not retrieve transactions");
        assert_eq!(all.len(), 1);
    }

    #[test]
    fn update_refreshes_created_at() {
        let mut service = get_test_service();
        let original = service
            .create(transaction_data(12.3, "Coffee"))
            .expect("Could not create transaction");

        let updated = service
            .update(TransactionData {
                id: Some(original.id),
                amount: 12.3,
                description: Some("Coffee".to_owned()),
            })
            .expect("Could not update transaction");

        assert!(updated.created_at >= original.created_at);
        assert_recent(updated.created_at);
    }

    #[test]
    fn update_fails_without_id() {
        let mut service = get_test_service();

        let got = service.update(transaction_data(1.0, "Coffee"));

        assert_eq!(got, Err(Error::IdRequired));
    }

    #[test]
    fn update_fails_on_blank_description() {
        let mut service = get_test_service();
        let original = service
            .create(transaction_data(12.3, "Coffee"))
            .expect("Could not create transaction");

        let got = service.update(TransactionData {
            id: Some(original.id),
            amount: 1.0,
            description: Some("   ".to_owned()),
        });

        assert_eq!(got, Err(Error::BlankDescription));
    }

    #[test]
    fn update_fails_on_blank_description_before_unused_id() {
        let mut service = get_test_service();

        let got = service.update(TransactionData {
            id: Some(999),
            amount: 1.0,
            description: Some("   ".to_owned()),
        });

        assert_eq!(got, Err(Error::BlankDescription));
    }

    #[test]
    fn update_fails_on_unused_id() {
        let mut service = get_test_service();

        let got = service.update(TransactionData {
            id: Some(999),
            amount: 1.0,
            description: Some("Coffee".to_owned()),
        });

        assert_eq!(got, Err(Error::NoSuchTransaction(999)));
    }

    #[test]
    fn find_by_id_returns_none_for_unused_id() {
        let service = get_test_service();

        let got = service
            .find_by_id(999)
            .expect("Could not query transaction");

        assert_eq!(got, None);
    }

    #[test]
    fn find_all_returns_newest_first() {
        let mut service = get_test_service();
        for (amount, description) in [(1.0, "First"), (2.0, "Second"), (3.0, "Third")] {
            service
                .create(transaction_data(amount, description))
                .expect("Could not create transaction");
        }

        let got = service.find_all().expect("Could not retrieve transactions");

        let ids: Vec<_> = got.iter().map(|transaction| transaction.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn delete_removes_transaction() {
        let mut service = get_test_service();
        let transaction = service
            .create(transaction_data(12.3, "Coffee"))
            .expect("Could not create transaction");

        service
            .delete_by_id(transaction.id)
            .expect("Could not delete transaction");

        let got = service
            .find_by_id(transaction.id)
            .expect("Could not query transaction");
        assert_eq!(got, None);
    }

    #[test]
    fn delete_fails_on_unused_id() {
        let mut service = get_test_service();

        let got = service.delete_by_id(42);

        assert_eq!(got, Err(Error::NoSuchTransaction(42)));
    }

    #[test]
    fn balance_is_zero_for_empty_ledger() {
        let service = get_test_service();

        let got = service
            .current_balance()
            .expect("Could not compute balance");

        assert_eq!(got.balance, 0.0);
        assert_recent(got.date_time);
    }

    #[test]
    fn balance_sums_every_transaction() {
        let mut service = get_test_service();
        service
            .create(transaction_data(20.50, "Deposit"))
            .expect("Could not create transaction");
        service
            .create(transaction_data(30.50, "Deposit"))
            .expect("Could not create transaction");

        let got = service
            .current_balance()
            .expect("Could not compute balance");

        assert_eq!(got.balance, 51.00);
    }
}
