//! Application router configuration.

use axum::{Json, Router, middleware, routing::get, routing::post};
use serde::Serialize;
use tower_http::cors::CorsLayer;

use crate::{
    AppState,
    category::get_categories_endpoint,
    chat::chat_endpoint,
    endpoints::{self, ENDPOINT_DOCS, EndpointDoc},
    latency::simulate_latency,
    not_found::get_404_not_found,
    product::get_products_endpoint,
    purchase::{checkout_endpoint, get_purchase_endpoint, get_purchases_endpoint},
    transaction::{
        create_transaction_endpoint, get_transaction_endpoint, get_transaction_summary_endpoint,
        get_transactions_endpoint,
    },
};

/// Return a router with all the app's routes.
///
/// Every route is delayed by [crate::AppConfig::simulated_latency], and
/// cross-origin requests are allowed if [crate::AppConfig::allow_cors] is set.
pub fn build_router(state: AppState) -> Router {
    let router = Router::new()
        .route(endpoints::ROOT, get(get_api_index))
        .route(endpoints::PRODUCTS, get(get_products_endpoint))
        .route(endpoints::CATEGORIES, get(get_categories_endpoint))
        .route(
            endpoints::TRANSACTIONS,
            get(get_transactions_endpoint).post(create_transaction_endpoint),
        )
        .route(
            endpoints::TRANSACTION_SUMMARY,
            get(get_transaction_summary_endpoint),
        )
        .route(endpoints::TRANSACTION, get(get_transaction_endpoint))
        .route(endpoints::PURCHASES, get(get_purchases_endpoint))
        .route(endpoints::PURCHASE, get(get_purchase_endpoint))
        .route(endpoints::CHECKOUT, post(checkout_endpoint))
        .route(endpoints::CHAT, post(chat_endpoint))
        .fallback(get_404_not_found)
        .layer(middleware::from_fn_with_state(
            state.config.simulated_latency,
            simulate_latency,
        ));

    let allow_cors = state.config.allow_cors;
    let router = router.with_state(state);

    if allow_cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

/// The description of the API served at the root route.
#[derive(Debug, Serialize)]
struct ApiIndex {
    name: &'static str,
    version: &'static str,
    endpoints: &'static [EndpointDoc],
}

/// The root path '/' lists the available endpoints.
async fn get_api_index() -> Json<ApiIndex> {
    Json(ApiIndex {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        endpoints: ENDPOINT_DOCS,
    })
}
