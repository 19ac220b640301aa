//! Defines the endpoint for getting a single transaction.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{Error, app_state::lock_store};

use super::{core::Transaction, list_endpoint::TransactionState};

/// A route handler for getting a transaction by its ID.
///
/// Responds with 404 if the transaction does not exist.
pub async fn get_transaction_endpoint(
    State(state): State<TransactionState>,
    Path(transaction_id): Path<String>,
) -> Result<Json<Transaction>, Error> {
    lock_store(&state.transactions)?
        .get(&transaction_id)
        .map(Json)
}
