//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::{
    AppConfig, Error,
    product::Catalog,
    purchase::PurchaseStore,
    transaction::{TransactionStore, sample_transactions},
};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The settings the server was started with.
    pub config: AppConfig,

    /// The products that can be bought.
    pub catalog: Arc<Catalog>,

    /// The income and expense ledger.
    pub transactions: Arc<Mutex<TransactionStore>>,

    /// The completed checkouts.
    pub purchases: Arc<Mutex<PurchaseStore>>,
}

impl AppState {
    /// Create a new [AppState] with the default catalog and an empty purchase history.
    ///
    /// The ledger starts with the sample transactions if
    /// [AppConfig::seed_transactions] is set, otherwise it starts empty.
    pub fn new(config: AppConfig) -> Self {
        let transactions = if config.seed_transactions {
            TransactionStore::with_transactions(sample_transactions())
        } else {
            TransactionStore::new()
        };

        Self::with_stores(config, Catalog::default(), transactions, PurchaseStore::new())
    }

    /// Create a new [AppState] from existing stores.
    pub fn with_stores(
        config: AppConfig,
        catalog: Catalog,
        transactions: TransactionStore,
        purchases: PurchaseStore,
    ) -> Self {
        Self {
            config,
            catalog: Arc::new(catalog),
            transactions: Arc::new(Mutex::new(transactions)),
            purchases: Arc::new(Mutex::new(purchases)),
        }
    }
}

/// Acquire the lock for a store.
///
/// # Errors
/// Returns [Error::StoreLockError] if the mutex was poisoned.
pub(crate) fn lock_store<T>(store: &Mutex<T>) -> Result<MutexGuard<'_, T>, Error> {
    store.lock().map_err(|error| {
        tracing::error!("could not acquire store lock: {error}");
        Error::StoreLockError
    })
}
