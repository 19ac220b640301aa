//! Runtime configuration for the application.

use std::time::Duration;

/// How the checkout endpoint treats the total claimed by the client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum CheckoutPolicy {
    /// Record the client's total as-is, only logging a warning when it differs
    /// from the total computed from catalog prices.
    #[default]
    TrustClient,
    /// Reject purchases whose claimed total differs from the total computed
    /// from catalog prices.
    Verify,
}

/// Settings that control the behaviour of the API.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// An artificial delay added before every request is handled.
    ///
    /// Useful for exercising loading states in a front end. Zero disables it.
    pub simulated_latency: Duration,

    /// See [CheckoutPolicy].
    pub checkout_policy: CheckoutPolicy,

    /// Whether to start the ledger with the sample transactions.
    pub seed_transactions: bool,

    /// Whether to allow cross-origin requests, e.g. when a front end is
    /// pointed at this server from a different origin.
    pub allow_cors: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            simulated_latency: Duration::ZERO,
            checkout_policy: CheckoutPolicy::default(),
            seed_transactions: true,
            allow_cors: false,
        }
    }
}
