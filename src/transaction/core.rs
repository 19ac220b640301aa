//! Defines the core data models and the in-memory store for transactions.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{
    Error,
    id::IdSequence,
    timestamp::{parse_timestamp, to_utc},
};

// ============================================================================
// MODELS
// ============================================================================

/// The ID of a transaction.
pub type TransactionId = String;

/// Whether money was earned or spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money coming in, e.g. a salary.
    Income,
    /// Money going out, e.g. rent.
    Expense,
}

impl TransactionType {
    /// Parse the lowercase name used by the API.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "income" => Some(Self::Income),
            "expense" => Some(Self::Expense),
            _ => None,
        }
    }
}

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// To create a new `Transaction`, use [Transaction::build] and [TransactionStore::create].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// When the transaction happened.
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    /// A text description of what the transaction was for.
    pub description: String,
    /// The amount of money spent or earned. Always positive, see [Transaction::kind].
    pub amount: f64,
    /// Whether the amount was earned or spent.
    #[serde(rename = "type")]
    pub kind: TransactionType,
    /// The category of the transaction, e.g. "Food", "Housing".
    pub category: String,
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// Shortcut for [TransactionBuilder] for discoverability.
    pub fn build(
        kind: TransactionType,
        amount: f64,
        date: OffsetDateTime,
        description: &str,
    ) -> TransactionBuilder {
        TransactionBuilder {
            kind,
            amount,
            date,
            description: description.to_owned(),
            category: DEFAULT_CATEGORY.to_owned(),
        }
    }
}

/// The category given to transactions built without one.
pub const DEFAULT_CATEGORY: &str = "Other";

/// The minimum number of characters in a transaction description.
pub const MIN_DESCRIPTION_LENGTH: usize = 2;

/// A builder for creating [Transaction] instances.
///
/// The builder holds everything but the ID, which is assigned by the store.
#[derive(Debug, PartialEq, Clone)]
pub struct TransactionBuilder {
    /// Whether the amount was earned or spent.
    pub kind: TransactionType,
    /// The positive monetary amount of the transaction.
    pub amount: f64,
    /// When the transaction occurred.
    pub date: OffsetDateTime,
    /// A human-readable description of the transaction.
    pub description: String,
    /// The category of the transaction. Defaults to [DEFAULT_CATEGORY].
    pub category: String,
}

impl TransactionBuilder {
    /// Set the category for the transaction.
    pub fn category(mut self, category: &str) -> Self {
        self.category = category.to_owned();
        self
    }

    /// Move the date to UTC.
    ///
    /// # Errors
    /// Returns [Error::InvalidDate] if the date cannot be represented in UTC.
    fn into_utc(mut self) -> Result<Self, Error> {
        let date = self.date;
        self.date = to_utc(date).ok_or_else(|| Error::InvalidDate(date.to_string()))?;

        Ok(self)
    }

    /// The date must already be in UTC, see [TransactionBuilder::into_utc].
    fn finalize(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            date: self.date,
            description: self.description,
            amount: self.amount,
            kind: self.kind,
            category: self.category,
        }
    }
}

/// The JSON body for creating a transaction.
///
/// Every field is optional here so that missing fields can be reported with
/// a useful message instead of a deserialization error.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct TransactionInput {
    /// Text detailing the transaction.
    pub description: Option<String>,
    /// The positive value of the transaction.
    pub amount: Option<f64>,
    /// Either "income" or "expense".
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// The category of the transaction.
    pub category: Option<String>,
    /// A calendar date or an RFC 3339 timestamp.
    pub date: Option<String>,
}

impl TryFrom<TransactionInput> for TransactionBuilder {
    type Error = Error;

    /// Validate user input.
    ///
    /// # Errors
    /// Returns [Error::InvalidTransaction] naming the first invalid field, or
    /// [Error::InvalidDate] if the date cannot be parsed or is outside the
    /// years 0 to 9999 once converted to UTC.
    fn try_from(input: TransactionInput) -> Result<Self, Self::Error> {
        let description = input.description.unwrap_or_default().trim().to_owned();
        if description.chars().count() < MIN_DESCRIPTION_LENGTH {
            return Err(Error::InvalidTransaction(format!(
                "the description must have at least {MIN_DESCRIPTION_LENGTH} characters"
            )));
        }

        let amount = match input.amount {
            Some(amount) if amount.is_finite() && amount > 0.0 => amount,
            Some(_) => {
                return Err(Error::InvalidTransaction(
                    "the amount must be a positive number".to_owned(),
                ));
            }
            None => {
                return Err(Error::InvalidTransaction(
                    "the amount is required".to_owned(),
                ));
            }
        };

        let kind = input
            .kind
            .as_deref()
            .and_then(TransactionType::from_name)
            .ok_or_else(|| {
                Error::InvalidTransaction(
                    "the type must be either \"income\" or \"expense\"".to_owned(),
                )
            })?;

        let category = input.category.unwrap_or_default().trim().to_owned();
        if category.is_empty() {
            return Err(Error::InvalidTransaction(
                "a category is required".to_owned(),
            ));
        }

        let date = match input.date {
            Some(text) => to_utc(parse_timestamp(&text)?)
                .ok_or_else(|| Error::InvalidDate(text.trim().to_owned()))?,
            None => {
                return Err(Error::InvalidTransaction(
                    "the transaction date is required".to_owned(),
                ));
            }
        };

        Ok(Transaction::build(kind, amount, date, &description).category(&category))
    }
}

// ============================================================================
// STORE
// ============================================================================

/// Holds the ledger in memory, most recently created first.
#[derive(Debug, Clone, Default)]
pub struct TransactionStore {
    transactions: VecDeque<Transaction>,
    ids: IdSequence,
}

impl TransactionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `transactions`, kept in the given order.
    ///
    /// New IDs continue after the largest numeric ID in `transactions`.
    pub fn with_transactions(transactions: Vec<Transaction>) -> Self {
        let ids = IdSequence::after(transactions.iter().map(|t| t.id.as_str()));

        Self {
            transactions: transactions.into(),
            ids,
        }
    }

    /// Add a new transaction to the front of the ledger and return it.
    ///
    /// The date is normalized to UTC.
    ///
    /// # Errors
    /// Returns [Error::InvalidDate] if the date falls outside the years 0 to
    /// 9999 in UTC. The ledger is left unchanged and no ID is used up.
    pub fn create(&mut self, builder: TransactionBuilder) -> Result<Transaction, Error> {
        let transaction = builder.into_utc()?.finalize(self.ids.next_id());
        tracing::debug!("created transaction {}", transaction.id);
        self.transactions.push_front(transaction.clone());

        Ok(transaction)
    }

    /// Retrieve a transaction by its `id`.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if `id` does not refer to a stored transaction.
    pub fn get(&self, id: &str) -> Result<Transaction, Error> {
        self.transactions
            .iter()
            .find(|transaction| transaction.id == id)
            .cloned()
            .ok_or(Error::NotFound("transaction"))
    }

    /// Iterate over the ledger in storage order.
    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter()
    }

    /// The number of stored transactions.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Whether the ledger is empty.
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

// ============================================================================
// TESTS
// ============================================================================


#[cfg(test)]
mod store_tests {
    use time::macros::datetime;

    use crate::{
        Error,
        transaction::{Transaction, TransactionStore, TransactionType},
    };

    #[test]
    fn create_assigns_increasing_ids() {
        let mut store = TransactionStore::new();
        let date = datetime!(2024-07-15 10:00:00 UTC);

        let first = store
            .create(Transaction::build(TransactionType::Income, 1.0, date, "one"))
            .unwrap();
        let second = store
            .create(Transaction::build(TransactionType::Income, 2.0, date, "two"))
            .unwrap();

        assert_eq!(first.id, "1");
        assert_eq!(second.id, "2");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn create_prepends() {
        let mut store = TransactionStore::new();
        let date = datetime!(2024-07-15 10:00:00 UTC);
        store
            .create(Transaction::build(TransactionType::Income, 1.0, date, "one"))
            .unwrap();

        let second = store
            .create(Transaction::build(TransactionType::Income, 2.0, date, "two"))
            .unwrap();

        assert_eq!(store.iter().next(), Some(&second));
    }

    #[test]
    fn create_normalizes_date_to_utc() {
        let mut store = TransactionStore::new();

        let transaction = store
            .create(Transaction::build(
                TransactionType::Expense,
                10.0,
                datetime!(2024-07-16 08:00:00 +12:00),
                "lunch",
            ))
            .unwrap();

        assert_eq!(transaction.date, datetime!(2024-07-15 20:00:00 UTC));
        assert!(transaction.date.offset().is_utc());
    }

    #[test]
    fn create_rejects_date_outside_utc_years_without_storing() {
        let mut store = TransactionStore::new();
        let date = datetime!(9999-12-31 23:00:00 -05:00);

        let result = store.create(Transaction::build(
            TransactionType::Expense,
            10.0,
            date,
            "far future",
        ));

        assert_eq!(result, Err(Error::InvalidDate(date.to_string())));
        assert!(store.is_empty());

        let next = store
            .create(Transaction::build(
                TransactionType::Expense,
                10.0,
                datetime!(2024-07-15 10:00:00 UTC),
                "lunch",
            ))
            .unwrap();
        assert_eq!(next.id, "1");
    }

    #[test]
    fn ids_continue_after_existing_transactions() {
        let date = datetime!(2024-07-15 10:00:00 UTC);
        let existing = Transaction {
            id: "41".to_owned(),
            date,
            description: "existing".to_owned(),
            amount: 1.0,
            kind: TransactionType::Income,
            category: "Other".to_owned(),
        };
        let mut store = TransactionStore::with_transactions(vec![existing]);

        let created = store
            .create(Transaction::build(TransactionType::Income, 1.0, date, "new"))
            .unwrap();

        assert_eq!(created.id, "42");
    }

    #[test]
    fn get_returns_stored_transaction() {
        let mut store = TransactionStore::new();
        let created = store
            .create(
                Transaction::build(
                    TransactionType::Expense,
                    99.9,
                    datetime!(2024-07-20 11:00:00 UTC),
                    "Internet bill",
                )
                .category("Bills"),
            )
            .unwrap();

        assert_eq!(store.get(&created.id), Ok(created));
    }

    #[test]
    fn get_unknown_id_is_not_found() {
        let store = TransactionStore::new();

        assert_eq!(store.get("7"), Err(Error::NotFound("transaction")));
    }
}
