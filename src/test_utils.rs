#![allow(missing_docs)]

use axum_test::{TestResponse, TestServer};
use serde_json::Value;

use crate::{AppConfig, AppState, build_router};

/// State with an empty ledger and default settings.
pub(crate) fn test_state() -> AppState {
    AppState::new(AppConfig {
        seed_transactions: false,
        ..Default::default()
    })
}

/// State with the sample ledger and default settings.
pub(crate) fn seeded_state() -> AppState {
    AppState::new(AppConfig::default())
}

pub(crate) fn test_server(state: AppState) -> TestServer {
    TestServer::try_new(build_router(state)).expect("Could not create test server.")
}

#[track_caller]
pub(crate) fn assert_error_message(response: &TestResponse, want: &str) {
    let body = response.json::<Value>();
    assert_eq!(
        body["message"], want,
        "got error body {body}, want message {want:?}"
    );
}

#[track_caller]
pub(crate) fn assert_approx_eq(got: f64, want: f64) {
    assert!((got - want).abs() < 1e-9, "got {got}, want {want}");
}
