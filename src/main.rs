use briefing_desk::{
    config::{self, database},
    core::store::{BriefingStore, DatabaseStore, FixtureStore},
    errors::Result,
    web::{AppState, create_router},
};
use dotenvy::dotenv;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (non-fatal, env vars can be set externally)
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load the application configuration
    let app_config = config::load_app_configuration()
        .inspect_err(|e| error!("Critical error loading application configuration: {}", e))?;
    info!("Successfully processed application configuration.");

    // 4. Pick the briefing store
    let store: Arc<dyn BriefingStore> = match database::get_database_url() {
        Some(url) => {
            let db = database::create_connection(&url)
                .await
                .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
            if app_config.database.create_schema {
                database::create_tables(&db).await?;
            }
            Arc::new(DatabaseStore::new(db))
        }
        None => {
            warn!("DATABASE_URL not set, serving fixture briefings.");
            Arc::new(FixtureStore::new())
        }
    };

    // 5. Serve
    let bind_addr = app_config.server.bind_addr.clone();
    let app = create_router(AppState::new(store, app_config));

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .inspect_err(|e| error!("Failed to bind {}: {}", bind_addr, e))?;
    info!("Dashboard listening on http://{}", bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
