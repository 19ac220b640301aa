//! Defines the endpoint for creating a new transaction.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::{Error, app_state::lock_store};

use super::{
    core::{Transaction, TransactionBuilder, TransactionInput},
    list_endpoint::TransactionState,
};

/// A route handler for creating a new transaction, responds with the stored transaction.
pub async fn create_transaction_endpoint(
    State(state): State<TransactionState>,
    payload: Result<Json<TransactionInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Transaction>), Error> {
    let Json(input) =
        payload.map_err(|rejection| Error::InvalidRequestBody(rejection.body_text()))?;
    let builder = TransactionBuilder::try_from(input)?;

    let transaction = lock_store(&state.transactions)?.create(builder)?;
    tracing::info!(
        "created {:?} transaction {} for {}",
        transaction.kind,
        transaction.id,
        transaction.amount
    );

    Ok((StatusCode::CREATED, Json(transaction)))
}
