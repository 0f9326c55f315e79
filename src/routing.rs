//! Application router configuration.

use axum::{Router, routing::get};

use crate::{
    AppState, endpoints,
    routes::{
        create_transaction, delete_transaction, get_all_transactions, get_current_balance,
        get_transaction, update_transaction,
    },
    stores::TransactionStore,
};

/// Return a router with all the app's routes.
pub fn build_router<T>(state: AppState<T>) -> Router
where
    T: TransactionStore + Clone + Send + Sync + 'static,
{
    Router::new()
        .route(
            endpoints::TRANSACTION,
            get(get_all_transactions)
                .post(create_transaction)
                .put(update_transaction),
        )
        .route(endpoints::CURRENT_BALANCE, get(get_current_balance))
        .route(
            endpoints::TRANSACTION_BY_ID,
            get(get_transaction).delete(delete_transaction),
        )
        .with_state(state)
}

#[cfg(test)]
mod routing_tests {
    use axum_test::TestServer;
    use rusqlite::Connection;

    use crate::stores::sqlite::create_app_state;

    use super::build_router;

    fn get_test_server() -> TestServer {
        let connection =
            Connection::open_in_memory().expect("Could not open database in memory.");
        let state = create_app_state(connection).expect("Could not create app state.");

        TestServer::try_new(build_router(state)).expect("Could not create test server.")
    }

    #[tokio::test]
    async fn unknown_route_returns_not_found() {
        let server = get_test_server();

        let response = server.get("/api/unknown").await;

        response.assert_status_not_found();
    }

    #[tokio::test]
    async fn balance_route_is_not_captured_by_id_route() {
        let server = get_test_server();

        let response = server.get("/api/transaction/current-balance").await;

        response.assert_status_ok();
    }
}
