use anyhow::Context;
use reelmatch::{
    api::{create_router, AppState, RecommendLimits},
    config::Config,
    services::{Dataset, Recommender},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reelmatch=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    tracing::info!(path = %config.movies_csv, "Loading movie dataset and preprocessing");
    let dataset = Dataset::from_path(&config.movies_csv)
        .with_context(|| format!("Failed to load dataset from {}", config.movies_csv))?;
    let recommender = Recommender::new(dataset, config.max_features);

    let state = AppState::new(recommender, RecommendLimits::from(&config));
    let app = create_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!(addr = %addr, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
