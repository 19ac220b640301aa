use std::{
    fs::OpenOptions,
    net::{IpAddr, SocketAddr},
    path::{Path, PathBuf},
    sync::Arc,
    time::Duration,
};

use axum::{
    Router,
    extract::{MatchedPath, Request},
    middleware,
};
use axum_server::Handle;
use clap::Parser;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, Layer, filter, layer::SubscriberExt, util::SubscriberInitExt};

use ledger_shop::{
    AppConfig, AppState, CheckoutPolicy, build_router, graceful_shutdown, logging_middleware,
};

/// The REST API server for ledger_shop.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The address to serve the API from.
    #[arg(long, env = "LEDGER_SHOP_HOST", default_value = "127.0.0.1")]
    host: IpAddr,

    /// The port to serve the API from.
    #[arg(short, long, env = "LEDGER_SHOP_PORT", default_value_t = 3000)]
    port: u16,

    /// Milliseconds to wait before handling each request.
    #[arg(long, env = "LEDGER_SHOP_LATENCY_MS", default_value_t = 0)]
    latency_ms: u64,

    /// Whether checkout trusts the total sent by the client or checks it against the catalog.
    #[arg(long, value_enum, default_value_t = CheckoutPolicy::TrustClient)]
    checkout_policy: CheckoutPolicy,

    /// Start with an empty ledger instead of the sample transactions.
    #[arg(long)]
    no_seed: bool,

    /// Allow cross-origin requests, e.g. from a front end served elsewhere.
    #[arg(long)]
    allow_cors: bool,

    /// File path to write debug logs to.
    #[arg(long, default_value = "debug.log")]
    log_path: PathBuf,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    setup_logging(&args.log_path);

    let addr = SocketAddr::new(args.host, args.port);

    let state = AppState::new(AppConfig {
        simulated_latency: Duration::from_millis(args.latency_ms),
        checkout_policy: args.checkout_policy,
        seed_transactions: !args.no_seed,
        allow_cors: args.allow_cors,
    });
    tracing::debug!("Starting with {:?}", state.config);

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let router = add_tracing_layer(
        build_router(state).layer(middleware::from_fn(logging_middleware)),
    );

    tracing::info!("HTTP server listening on {}", addr);
    if let Err(error) = axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
    {
        tracing::error!("The server stopped unexpectedly: {error}");
    }
}

fn setup_logging(log_path: &Path) {
    let stdout_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")));

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .expect("Could not create log file");

    let debug_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_writer(Arc::new(log_file))
        .with_filter(filter::LevelFilter::DEBUG);

    tracing_subscriber::registry()
        .with(stdout_log)
        .with(debug_log)
        .init();
}

fn add_tracing_layer(router: Router) -> Router {
    let tracing_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request| {
            let method = req.method();
            let uri = req.uri();

            let matched_path = req
                .extensions()
                .get::<MatchedPath>()
                .map(|matched_path| matched_path.as_str());

            tracing::debug_span!("request", %method, %uri, matched_path)
        })
        // By default, `TraceLayer` will log 5xx responses but errors are
        // already logged where they are converted into responses.
        .on_failure(());

    router.layer(tracing_layer)
}
