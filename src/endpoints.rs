//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/api/transaction/{id}', tests
//! substitute the parameter with `format_endpoint`.

/// The route to list, create and update transactions.
pub const TRANSACTION: &str = "/api/transaction";
/// The route to the ledger's current balance.
pub const CURRENT_BALANCE: &str = "/api/transaction/current-balance";
/// The route to access a single transaction.
pub const TRANSACTION_BY_ID: &str = "/api/transaction/{id}";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/api/transaction/{id}', '{id}' is the
/// parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
#[cfg(test)]
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let mut param_start = None;
    let mut param_end = None;

    for (i, c) in endpoint_path.chars().enumerate() {
        if c == '{' {
            param_start = Some(i);
        } else if param_start.is_some() && c == '}' {
            param_end = Some(i + 1);
            break;
        }
    }

    let param_start = match param_start {
        Some(start) => start,
        None => return endpoint_path.to_string(),
    };

    let param_end = param_end.unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
