use cinematch::{
    api::{create_router, AppState},
    catalog::SeedCatalog,
    config::Config,
    error::AppError,
    services::Recommender,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    // Index and graph construction is CPU-bound; finish it before serving.
    let recommender = tokio::task::spawn_blocking(|| Recommender::from_source(&SeedCatalog))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
        .map_err(AppError::from)?;

    let address = config.bind_address();
    let state = AppState::new(recommender, config);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(address = %address, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
