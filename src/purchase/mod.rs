//! Checkout and purchase history for the shop.
//!
//! This module contains:
//! - The `Purchase` and `CartItem` models and the in-memory `PurchaseStore`
//! - The checkout validator that turns a cart into a purchase
//! - Route handlers for the checkout and purchase endpoints

mod checkout;
mod checkout_endpoint;
mod core;
mod list_endpoint;

pub use checkout::PURCHASE_LIMIT;
pub use checkout_endpoint::checkout_endpoint;
pub use core::{CartItem, Purchase, PurchaseStore};
pub use list_endpoint::{get_purchase_endpoint, get_purchases_endpoint};
