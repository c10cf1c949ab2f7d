//! phone-intake server binary.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> phone_intake::Result<()> {
    // Load .env before building the filter so RUST_LOG can live there too
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = phone_intake::Config::from_env().inspect_err(|e| {
        tracing::error!(error = %e, "Invalid configuration");
    })?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        address = %config.api.bind_address,
        "Starting phone-intake"
    );

    phone_intake::run(config).await
}
