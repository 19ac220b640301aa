//! Defines the endpoint for checking out a cart.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::{AppState, CheckoutPolicy, Error, app_state::lock_store, product::Catalog};

use super::{
    checkout::{CheckoutRequest, checkout},
    core::{Purchase, PurchaseStore},
};

/// The state needed to check out a cart.
#[derive(Debug, Clone)]
pub struct CheckoutState {
    /// The products that can be bought.
    pub catalog: Arc<Catalog>,
    /// The history new purchases are added to.
    pub purchases: Arc<Mutex<PurchaseStore>>,
    /// Whether to trust the client's total.
    pub policy: CheckoutPolicy,
}

impl FromRef<AppState> for CheckoutState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            catalog: state.catalog.clone(),
            purchases: state.purchases.clone(),
            policy: state.config.checkout_policy,
        }
    }
}

/// A route handler for checking out a cart, responds with the recorded purchase.
pub async fn checkout_endpoint(
    State(state): State<CheckoutState>,
    payload: Result<Json<CheckoutRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Purchase>), Error> {
    let Json(request) =
        payload.map_err(|rejection| Error::InvalidRequestBody(rejection.body_text()))?;

    let mut purchases = lock_store(&state.purchases)?;
    let purchase = checkout(request, &state.catalog, &mut purchases, state.policy)?;
    tracing::info!(
        "recorded purchase {} of {} items for {}",
        purchase.id,
        purchase.items.len(),
        purchase.total
    );

    Ok((StatusCode::CREATED, Json(purchase)))
}
