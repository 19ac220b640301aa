//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/transactions/{transaction_id}', use [format_endpoint].

use serde::Serialize;

/// The root route which describes the API.
pub const ROOT: &str = "/";
/// The route for the product catalog.
pub const PRODUCTS: &str = "/products";
/// The route for the suggested transaction categories.
pub const CATEGORIES: &str = "/categories";
/// The route to list and create transactions.
pub const TRANSACTIONS: &str = "/transactions";
/// The route for the totals of the (filtered) transactions.
pub const TRANSACTION_SUMMARY: &str = "/transactions/summary";
/// The route to access a single transaction.
pub const TRANSACTION: &str = "/transactions/{transaction_id}";
/// The route to list purchases.
pub const PURCHASES: &str = "/purchases";
/// The route to access a single purchase.
pub const PURCHASE: &str = "/purchases/{purchase_id}";
/// The route to check out a cart.
pub const CHECKOUT: &str = "/checkout";
/// The route to send a message to the chat assistant.
pub const CHAT: &str = "/chat";

/// A description of a route for the API index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EndpointDoc {
    /// The HTTP method.
    pub method: &'static str,
    /// The route, see the constants in this module.
    pub path: &'static str,
    /// What the route does.
    pub description: &'static str,
}

/// Every route served by the API.
pub const ENDPOINT_DOCS: &[EndpointDoc] = &[
    EndpointDoc {
        method: "GET",
        path: ROOT,
        description: "Describe the API.",
    },
    EndpointDoc {
        method: "GET",
        path: PRODUCTS,
        description: "List the product catalog.",
    },
    EndpointDoc {
        method: "GET",
        path: CATEGORIES,
        description: "List the suggested income and expense categories.",
    },
    EndpointDoc {
        method: "GET",
        path: TRANSACTIONS,
        description: "List transactions, most recent first. Optional filters: type, category, \
            startDate, endDate, minAmount, maxAmount.",
    },
    EndpointDoc {
        method: "POST",
        path: TRANSACTIONS,
        description: "Create a transaction from {description, amount, type, category, date}.",
    },
    EndpointDoc {
        method: "GET",
        path: TRANSACTION_SUMMARY,
        description: "Total income, expenses, balance and savings rate. Accepts the same \
            filters as the transaction list.",
    },
    EndpointDoc {
        method: "GET",
        path: TRANSACTION,
        description: "Get a single transaction.",
    },
    EndpointDoc {
        method: "GET",
        path: PURCHASES,
        description: "List purchases, most recent first.",
    },
    EndpointDoc {
        method: "GET",
        path: PURCHASE,
        description: "Get a single purchase.",
    },
    EndpointDoc {
        method: "POST",
        path: CHECKOUT,
        description: "Buy the products in {cart: [{productId, quantity}], total}.",
    },
    EndpointDoc {
        method: "POST",
        path: CHAT,
        description: "Send {message} to the chat assistant.",
    },
];

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/purchases/{purchase_id}', '{purchase_id}' is the parameter.
///
/// This function assumes that an endpoint path contains at most one parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns
/// `endpoint_path` unchanged.
pub fn format_endpoint(endpoint_path: &str, id: &str) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_string();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|end| param_start + end + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}

// Every documented path, with its parameter filled in, must parse as a `Uri`.
#[cfg(test)]
mod endpoints_tests {
    use axum::http::Uri;

    use crate::endpoints::{self, ENDPOINT_DOCS};

    use super::format_endpoint;

    fn assert_endpoint_is_valid_uri(uri: &str) {
        assert!(uri.parse::<Uri>().is_ok(), "{uri} is not a valid URI");
    }

    #[test]
    fn endpoints_are_valid_uris() {
        for doc in ENDPOINT_DOCS {
            assert_endpoint_is_valid_uri(&format_endpoint(doc.path, "1"));
        }
    }

    #[test]
    fn format_endpoint_replaces_parameter() {
        assert_eq!(
            format_endpoint(endpoints::TRANSACTION, "42"),
            "/transactions/42"
        );
        assert_eq!(format_endpoint(endpoints::PURCHASE, "7"), "/purchases/7");
    }

    #[test]
    fn format_endpoint_without_parameter_is_unchanged() {
        assert_eq!(format_endpoint(endpoints::PRODUCTS, "42"), "/products");
    }

    #[test]
    fn format_endpoint_keeps_trailing_path() {
        assert_eq!(
            format_endpoint("/purchases/{purchase_id}/items", "3"),
            "/purchases/3/items"
        );
    }
}
