use cluster_lifecycle::{dispatcher, Config, SimulatedCluster};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();

    // env vars do not change for the lifetime of the lambda instance,
    // so the config and the backend are built once and shared by all invocations
    let config = Config::from_env();
    let backend = SimulatedCluster;
    debug!("{:?}", config);

    let config = &config;
    let backend = &backend;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        dispatcher::handler(event, config, backend).await
    }))
    .await
}

/// Initializes the tracing from RUST_LOG env var if present or sets minimal logging:
/// - INFO for this lambda
/// - ERROR for everything else
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(concat!(
            "error,cluster_lifecycle=info,",
            env!("CARGO_CRATE_NAME"),
            "=info"
        ))
    });

    // CloudWatch adds its own timestamps and does not render colour codes
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .compact()
        .init();
}
