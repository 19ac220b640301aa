//! Defines the purchase models and the in-memory purchase history.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{Error, id::IdSequence, product::ProductId};

/// The ID of a purchase.
pub type PurchaseId = String;

/// One line of a purchase: a snapshot of a product at the time it was bought.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// The ID of the product that was bought.
    pub product_id: ProductId,
    /// How many units were bought. Always at least one.
    pub quantity: u32,
    /// The product name at the time of purchase.
    pub name: String,
    /// The unit price at the time of purchase.
    pub price: f64,
}

impl CartItem {
    /// The price of the line, i.e. unit price times quantity.
    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// A completed checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Purchase {
    /// The ID of the purchase.
    pub id: PurchaseId,
    /// When the purchase was made.
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    /// The total charged for the purchase.
    pub total: f64,
    /// What was bought.
    pub items: Vec<CartItem>,
}

/// Holds the purchase history in memory, most recent first.
#[derive(Debug, Clone, Default)]
pub struct PurchaseStore {
    purchases: VecDeque<Purchase>,
    ids: IdSequence,
}

impl PurchaseStore {
    /// Create an empty purchase history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new purchase made at `date` and return it.
    pub fn record(&mut self, date: OffsetDateTime, total: f64, items: Vec<CartItem>) -> Purchase {
        let purchase = Purchase {
            id: self.ids.next_id(),
            date,
            total,
            items,
        };
        self.purchases.push_front(purchase.clone());

        purchase
    }

    /// Retrieve a purchase by its `id`.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if `id` does not refer to a recorded purchase.
    pub fn get(&self, id: &str) -> Result<Purchase, Error> {
        self.purchases
            .iter()
            .find(|purchase| purchase.id == id)
            .cloned()
            .ok_or(Error::NotFound("purchase"))
    }

    /// All purchases, most recent first.
    ///
    /// Purchases made at the same instant are ordered most recently recorded first.
    pub fn history(&self) -> Vec<Purchase> {
        let mut purchases: Vec<Purchase> = self.purchases.iter().cloned().collect();
        purchases.sort_by(|a, b| b.date.cmp(&a.date));

        purchases
    }

    /// The number of recorded purchases.
    pub fn len(&self) -> usize {
        self.purchases.len()
    }

    /// Whether no purchases have been recorded.
    pub fn is_empty(&self) -> bool {
        self.purchases.is_empty()
    }
}
