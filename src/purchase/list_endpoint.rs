//! Defines the endpoints for reading the purchase history.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, Path, State},
};

use crate::{AppState, Error, app_state::lock_store};

use super::core::{Purchase, PurchaseStore};

/// The state needed to read the purchase history.
#[derive(Debug, Clone)]
pub struct PurchaseState {
    /// The purchase history.
    pub purchases: Arc<Mutex<PurchaseStore>>,
}

impl FromRef<AppState> for PurchaseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            purchases: state.purchases.clone(),
        }
    }
}

/// A route handler for listing all purchases, most recent first.
pub async fn get_purchases_endpoint(
    State(state): State<PurchaseState>,
) -> Result<Json<Vec<Purchase>>, Error> {
    Ok(Json(lock_store(&state.purchases)?.history()))
}

/// A route handler for getting a purchase by its ID.
///
/// Responds with 404 if the purchase does not exist.
pub async fn get_purchase_endpoint(
    State(state): State<PurchaseState>,
    Path(purchase_id): Path<String>,
) -> Result<Json<Purchase>, Error> {
    lock_store(&state.purchases)?.get(&purchase_id).map(Json)
}
