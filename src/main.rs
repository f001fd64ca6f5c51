use std::time::Duration;

use impostor::{
    core::CLEANUP_INTERVAL_SECONDS, routes, settings::Settings, state::AppState,
    storage::ConfigStore,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let settings = Settings::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| settings.log_filter().into()),
        )
        .init();

    tracing::info!("Impostor game server starting...");

    let state = AppState::new(
        settings.build_word_provider(),
        ConfigStore::new(settings.config_path.clone()),
    );
    tracing::info!(
        "Saving game configuration to {}",
        state.config_store.path().display()
    );

    // Evict abandoned games in the background
    let game_manager = state.game_manager.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(CLEANUP_INTERVAL_SECONDS));
        loop {
            interval.tick().await;
            let cleaned = game_manager.write().await.cleanup_stale_games();
            if cleaned > 0 {
                tracing::info!("Cleaned up {} stale games", cleaned);
            }
        }
    });

    let app = routes::app(state);

    let addr = format!("0.0.0.0:{}", settings.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    tracing::info!("Shutting down game server...");
    Ok(())
}
