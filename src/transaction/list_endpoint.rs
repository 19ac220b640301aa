//! Defines the endpoints for listing and summarizing the ledger.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, Query, State, rejection::QueryRejection},
};

use crate::{AppState, Error, app_state::lock_store};

use super::{
    core::{Transaction, TransactionStore},
    query::{TransactionFilterParams, TransactionQuery, query},
    summary::Summary,
};

/// The state needed to get or create transactions.
#[derive(Debug, Clone)]
pub struct TransactionState {
    /// The store holding the ledger.
    pub transactions: Arc<Mutex<TransactionStore>>,
}

impl FromRef<AppState> for TransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            transactions: state.transactions.clone(),
        }
    }
}

fn parse_filter(
    params: Result<Query<TransactionFilterParams>, QueryRejection>,
) -> Result<TransactionQuery, Error> {
    let Query(params) = params.map_err(|rejection| Error::InvalidQuery(rejection.body_text()))?;

    TransactionQuery::try_from(params)
}

/// A route handler for listing the transactions that match the query string filters,
/// most recent first.
pub async fn get_transactions_endpoint(
    State(state): State<TransactionState>,
    params: Result<Query<TransactionFilterParams>, QueryRejection>,
) -> Result<Json<Vec<Transaction>>, Error> {
    let filter = parse_filter(params)?;
    let store = lock_store(&state.transactions)?;

    let transactions = query(store.iter(), &filter);
    tracing::debug!("{} transactions match {filter:?}", transactions.len());

    Ok(Json(transactions))
}

/// A route handler for the income, expense and balance totals of the
/// transactions that match the query string filters.
pub async fn get_transaction_summary_endpoint(
    State(state): State<TransactionState>,
    params: Result<Query<TransactionFilterParams>, QueryRejection>,
) -> Result<Json<Summary>, Error> {
    let filter = parse_filter(params)?;
    let store = lock_store(&state.transactions)?;

    let summary = Summary::from_transactions(store.iter().filter(|t| filter.matches(t)));

    Ok(Json(summary))
}
