//! Validation of carts and recording of purchases.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{
    CheckoutPolicy, Error,
    product::{Catalog, ProductId, deserialize_product_id},
};

use super::core::{CartItem, Purchase, PurchaseStore};

/// The maximum total of a single purchase.
pub const PURCHASE_LIMIT: f64 = 20_000.0;

/// The name recorded for cart lines whose product is not in the catalog.
pub const UNKNOWN_PRODUCT_NAME: &str = "unknown product";

/// The largest difference between claimed and computed totals that is
/// treated as rounding rather than a mismatch.
const TOTAL_TOLERANCE: f64 = 0.005;

/// A product and quantity in the cart sent by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// The ID of the product. May be sent as a JSON string or integer.
    #[serde(deserialize_with = "deserialize_product_id")]
    pub product_id: ProductId,
    /// How many units to buy.
    pub quantity: u32,
}

/// The JSON body for a checkout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    /// The products to buy.
    pub cart: Option<Vec<CartLine>>,
    /// The total the client expects to pay.
    pub total: Option<f64>,
}

/// Validate `request` and record it in `history` as a purchase made now.
///
/// Lines referring to products missing from `catalog` are kept with the name
/// [UNKNOWN_PRODUCT_NAME] and a price of zero. The recorded total is the one
/// claimed by the client; whether it must agree with the catalog is decided
/// by `policy`.
///
/// # Errors
/// Returns
/// - [Error::InvalidPurchase] if the cart or total is missing, the total is not
///   a finite number, or a line has a quantity of zero,
/// - [Error::TotalExceedsLimit] if the total is more than [PURCHASE_LIMIT],
/// - [Error::TotalMismatch] if `policy` is [CheckoutPolicy::Verify] and the
///   total differs from the catalog prices.
///
/// Nothing is recorded when an error is returned.
pub fn checkout(
    request: CheckoutRequest,
    catalog: &Catalog,
    history: &mut PurchaseStore,
    policy: CheckoutPolicy,
) -> Result<Purchase, Error> {
    let (cart, total) = match (request.cart, request.total) {
        (Some(cart), Some(total)) => (cart, total),
        _ => {
            return Err(Error::InvalidPurchase(
                "both the cart and the total are required".to_owned(),
            ));
        }
    };

    if !total.is_finite() {
        return Err(Error::InvalidPurchase(
            "the total must be a number".to_owned(),
        ));
    }

    if total > PURCHASE_LIMIT {
        return Err(Error::TotalExceedsLimit {
            total,
            limit: PURCHASE_LIMIT,
        });
    }

    if let Some(line) = cart.iter().find(|line| line.quantity == 0) {
        return Err(Error::InvalidPurchase(format!(
            "the quantity for product {} must be at least 1",
            line.product_id
        )));
    }

    let items: Vec<CartItem> = cart
        .into_iter()
        .map(|line| resolve_line(line, catalog))
        .collect();

    let computed: f64 = items.iter().map(CartItem::subtotal).sum();
    if (computed - total).abs() > TOTAL_TOLERANCE {
        match policy {
            CheckoutPolicy::TrustClient => tracing::warn!(
                "accepting client total {total} that differs from the catalog total {computed}"
            ),
            CheckoutPolicy::Verify => {
                return Err(Error::TotalMismatch {
                    claimed: total,
                    computed,
                });
            }
        }
    }

    Ok(history.record(OffsetDateTime::now_utc(), total, items))
}

fn resolve_line(line: CartLine, catalog: &Catalog) -> CartItem {
    match catalog.find(&line.product_id) {
        Some(product) => CartItem {
            name: product.name.clone(),
            price: product.price,
            product_id: line.product_id,
            quantity: line.quantity,
        },
        None => {
            tracing::warn!("cart references unknown product {}", line.product_id);
            CartItem {
                name: UNKNOWN_PRODUCT_NAME.to_owned(),
                price: 0.0,
                product_id: line.product_id,
                quantity: line.quantity,
            }
        }
    }
}
