use anyhow::{Context, Result};
use sqlx::sqlite::SqlitePool;
use tracing::info;

use momentum::api;
use momentum::config::Settings;
use momentum::db;
use momentum::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::from_env()?;

    let subscriber = get_subscriber("momentum", &settings.log_filter, std::io::stdout);
    init_subscriber(subscriber)?;

    let pool = db::setup_pool(&settings.database_url)
        .await
        .context("Error connecting to the database")?;
    db::setup_db(&pool)
        .await
        .context("Error creating the database schema")?;

    run(pool.clone(), settings).await?;

    // Close the pool only after the server stops handing out connections.
    pool.close().await;
    info!("Database pool closed");

    Ok(())
}

async fn run(pool: SqlitePool, settings: Settings) -> Result<()> {
    let routes = api::routes(pool, settings.static_dir.clone());

    let (addr, server) = warp::serve(routes)
        .try_bind_with_graceful_shutdown(settings.address(), async {
            tokio::signal::ctrl_c().await.ok();
            info!("Shutdown signal received");
        })
        .with_context(|| format!("Error binding {}", settings.address()))?;

    info!(%addr, static_dir = %settings.static_dir.display(), "Starting server");
    server.await;

    Ok(())
}
