use axum_helpers::server::{create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment);

    info!("Connecting to MongoDB at {}", config.mongodb.redacted_url());

    let mongo_client =
        database::mongodb::connect_from_config_with_retry(&config.mongodb, None).await?;
    let db = mongo_client.database(config.mongodb.database());

    info!(
        database = config.mongodb.database(),
        collection = %config.events.collection,
        store_timeout = ?config.events.store_timeout,
        "Connected to MongoDB"
    );

    let state = AppState {
        config,
        mongo_client,
        db,
    };

    let api_routes = api::routes(&state);
    let router = create_router::<openapi::ApiDoc>(api_routes)?;
    let app = router.merge(health_router(state.config.app));

    info!(
        "Starting events API (shutdown timeout {:?})",
        state.config.server.shutdown_timeout
    );

    let server = state.config.server.clone();
    create_production_app(app, &server, async move {
        info!("Shutting down: closing MongoDB connections");
        state.mongo_client.shutdown().await;
        info!("MongoDB connections closed");
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Events API shutdown complete");
    Ok(())
}
