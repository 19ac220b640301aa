//! Ledger Shop is a small web service for tracking personal finances and
//! running a mock shop.
//!
//! This library provides a JSON REST API over an in-memory transaction ledger,
//! a static product catalog and a purchase history. Nothing is persisted: all
//! state lives for the lifetime of the process.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde_json::json;
use tokio::signal;

mod app_state;
mod category;
mod chat;
mod config;
pub mod endpoints;
mod id;
mod latency;
mod logging;
mod not_found;
mod product;
mod purchase;
mod routing;
mod timestamp;
mod transaction;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use config::{AppConfig, CheckoutPolicy};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use product::{Catalog, Product};
pub use purchase::{CartItem, PURCHASE_LIMIT, Purchase, PurchaseStore};
pub use routing::build_router;
pub use transaction::{
    Summary, Transaction, TransactionBuilder, TransactionQuery, TransactionStore, TransactionType,
};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The data used to create a transaction failed validation.
    ///
    /// The string describes which field was rejected and why.
    #[error("invalid transaction: {0}")]
    InvalidTransaction(String),

    /// A query parameter used to filter transactions could not be understood.
    #[error("invalid value for the filter \"{name}\": {reason}")]
    InvalidFilter {
        /// The name of the query parameter, e.g. "minAmount".
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// The query string could not be parsed at all.
    #[error("invalid query string: {0}")]
    InvalidQuery(String),

    /// A string was neither a calendar date (YYYY-MM-DD) nor an RFC 3339 timestamp.
    #[error("\"{0}\" is not a valid date or ISO-8601 timestamp")]
    InvalidDate(String),

    /// The request body was missing, was not JSON, or did not have the expected shape.
    #[error("invalid request body: {0}")]
    InvalidRequestBody(String),

    /// The checkout request was structurally valid JSON but is missing data
    /// or contains values that cannot be purchased.
    #[error("invalid purchase data: {0}")]
    InvalidPurchase(String),

    /// The total of a purchase is over the spending ceiling.
    #[error("the purchase total {total} exceeds the limit of {limit}")]
    TotalExceedsLimit {
        /// The total claimed by the client.
        total: f64,
        /// The ceiling, see [PURCHASE_LIMIT].
        limit: f64,
    },

    /// The client's total disagrees with the total computed from catalog prices.
    ///
    /// Only raised under [CheckoutPolicy::Verify].
    #[error("the purchase total {claimed} does not match the cart total {computed}")]
    TotalMismatch {
        /// The total claimed by the client.
        claimed: f64,
        /// The total computed from the catalog.
        computed: f64,
    },

    /// A chat message was empty or missing.
    #[error("the message cannot be blank")]
    EmptyMessage,

    /// The requested resource was not found.
    ///
    /// The string names the kind of resource, e.g. "transaction".
    #[error("the requested {0} could not be found")]
    NotFound(&'static str),

    /// A store mutex was poisoned by a panicking thread.
    #[error("could not acquire the store lock")]
    StoreLockError,

    /// An unexpected error that should not be shown to the client.
    ///
    /// The error string should only be logged for debugging on the server.
    #[error("an unexpected error occurred: {0}")]
    Internal(String),
}

impl Error {
    /// The HTTP status code that best describes the error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::StoreLockError | Error::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = if status.is_server_error() {
            // Internal errors are not intended to be shown to the client.
            tracing::error!("An unexpected error occurred: {}", self);
            "An unexpected error occurred, check the server logs for more details.".to_owned()
        } else {
            self.to_string()
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}
