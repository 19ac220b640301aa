//! Transaction management for the ledger.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and `TransactionBuilder` for creating transactions
//! - The in-memory `TransactionStore`
//! - Filtering, sorting and summarizing of the ledger
//! - Route handlers for the transaction endpoints

mod core;
mod create_endpoint;
mod get_endpoint;
mod list_endpoint;
mod query;
mod seed;
mod summary;

pub use core::{Transaction, TransactionBuilder, TransactionStore, TransactionType};
pub use create_endpoint::create_transaction_endpoint;
pub use get_endpoint::get_transaction_endpoint;
pub use list_endpoint::{get_transaction_summary_endpoint, get_transactions_endpoint};
pub use query::TransactionQuery;
pub use seed::sample_transactions;
pub use summary::Summary;
