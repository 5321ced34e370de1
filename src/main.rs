use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;

use photo_gallery::config::Configuration;
use photo_gallery::controllers::{AppState, register_controllers};
use photo_gallery::entities::photo::Photo;
use photo_gallery::entities::photo_group::PhotoGroup;
use photo_gallery::extension::{ExtensionClient, MemoryExtensionStore, SchemeManager};
use photo_gallery::plugin::PhotoPlugin;
use photo_gallery::services::SettingService;

type Stores = (
    Arc<dyn ExtensionClient<Photo>>,
    Arc<dyn ExtensionClient<PhotoGroup>>,
);

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    log::info!("Loading configuration...");
    let settings = SettingService::new(Configuration::load()?);

    let schemes = Arc::new(SchemeManager::new());
    let mut plugin = PhotoPlugin::new(schemes.clone());
    plugin.start();

    let (photos, groups) = build_stores(&settings).await?;
    let state = AppState::new(schemes, photos, groups, settings.clone());
    let app = register_controllers(state);

    let address = settings.server_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {}", address))?;
    log::info!("Listening on {}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    plugin.stop();
    Ok(())
}

#[cfg(feature = "postgres")]
async fn build_stores(settings: &SettingService) -> Result<Stores> {
    use photo_gallery::extension::postgres_store::PostgresExtensionStore;
    use sqlx::postgres::PgPoolOptions;

    let Some(url) = settings.database_url() else {
        return Ok(memory_stores());
    };

    log::info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&url)
        .await
        .context("failed to connect to database")?;
    PostgresExtensionStore::<Photo>::ensure_schema(&pool).await?;

    Ok((
        Arc::new(PostgresExtensionStore::<Photo>::new(pool.clone())),
        Arc::new(PostgresExtensionStore::<PhotoGroup>::new(pool)),
    ))
}

#[cfg(not(feature = "postgres"))]
async fn build_stores(settings: &SettingService) -> Result<Stores> {
    if settings.database_url().is_some() {
        log::warn!("database.url is set but the postgres feature is disabled");
    }
    Ok(memory_stores())
}

fn memory_stores() -> Stores {
    log::info!("Using in-memory extension store");
    (
        Arc::new(MemoryExtensionStore::<Photo>::new()),
        Arc::new(MemoryExtensionStore::<PhotoGroup>::new()),
    )
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
    }
}

fn init_logging() {
    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(log::LevelFilter::Debug);
    let _ = builder.try_init();
}
