use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use libras_admin::bootstrap::ensure_superuser;
use libras_admin::config::Config;
use libras_admin::db::{AdminStorage, connect};
use libras_admin::router::{AppState, app_router};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = Config::from_env()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        database_url = %cfg.database_url,
        upload_folder = %cfg.upload_folder.display(),
        listen_addr = %cfg.listen_addr,
        loglevel = %cfg.loglevel
    );

    std::fs::create_dir_all(&cfg.upload_folder)?;

    let storage = AdminStorage::new(connect(&cfg.database_url).await?);
    storage.init_schema().await?;
    info!("database schema ready");

    ensure_superuser(&storage, cfg.bootstrap_admin()).await?;

    let state = AppState::new(storage, cfg.cookie_key()?);
    let app = app_router(state);

    let listener = TcpListener::bind(&cfg.listen_addr).await?;
    info!("HTTP server listening on {}", cfg.listen_addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown signal received");
    }
}
