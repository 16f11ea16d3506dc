//! Threatboard server
//!
//! Run with: `DATA_PATH=Global_Cybersecurity_Threats_2015-2024.csv cargo run`

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use threatboard::{config::Config, dataset::Dataset, create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    // Initialize logging
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "threatboard=debug,tower_http=debug".into());
    if config.is_production() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("Threatboard starting ({})", config.environment);
    tracing::info!("Dataset: {}", config.data_path.display());

    // Nothing to serve without data
    let dataset = Dataset::load(&config.data_path)
        .with_context(|| format!("failed to load dataset {}", config.data_path.display()))?;

    match (dataset.years().last(), dataset.latest_year()) {
        (Some(first), Some(last)) => tracing::info!(
            "Loaded {} incidents covering {}-{}",
            dataset.len(), first, last
        ),
        _ => tracing::info!("Loaded {} incidents", dataset.len()),
    }

    let addr = config.bind_addr();
    let state = AppState::new(dataset, config).context("failed to compile templates")?;
    let app = create_router(state);

    // Start server
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
