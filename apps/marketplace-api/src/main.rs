use axum_helpers::{create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::mongodb::{Client, connect_from_config_with_retry};
use domain_catalog::{CatalogService, MongoCatalogRepository};
use std::time::Duration;
use tracing::{error, info, warn};

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config.environment);

    let (mongo_client, catalog) = connect_catalog(&config).await;

    let state = AppState {
        catalog,
        database_env: config.database_env,
    };

    // Catalog and readiness under /api; root, status and liveness at the top level
    let root_routes = api::root_routes(&state).merge(health_router(config.app));
    let router = create_router::<openapi::ApiDoc>(api::routes(&state), root_routes, &config.cors);

    info!("Starting Multivendor Ecommerce API with graceful shutdown (30s timeout)");

    create_production_app(
        router,
        &config.server,
        Duration::from_secs(30),
        async move {
            if let Some(client) = mongo_client {
                info!("Shutting down: closing MongoDB connections");
                // MongoDB client closes automatically on drop
                drop(client);
                info!("MongoDB connection closed successfully");
            }
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Multivendor Ecommerce API shutdown complete");
    Ok(())
}

/// Connect to MongoDB when configured.
///
/// Any failure leaves the API running without a store; the catalog
/// endpoints then answer with empty results.
async fn connect_catalog(
    config: &Config,
) -> (Option<Client>, CatalogService<MongoCatalogRepository>) {
    let Some(mongo) = config.mongodb.as_ref() else {
        warn!("DATABASE_URL or DATABASE_NAME not set, running without a database");
        return (None, CatalogService::unavailable());
    };

    let client = match connect_from_config_with_retry(mongo, None).await {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "MongoDB unreachable, running without a database");
            return (None, CatalogService::unavailable());
        }
    };

    let db = client.database(mongo.database());
    info!(database = mongo.database(), "Connected to MongoDB");

    let repository = MongoCatalogRepository::new(&db);
    if let Err(e) = repository.init_indexes().await {
        warn!(error = %e, "Failed to create catalog indexes");
    }

    (Some(client), CatalogService::new(repository))
}
