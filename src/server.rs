use anyhow::Context;
use roamstay_kernel::settings::Settings;
use roamstay_kernel::{InitCtx, ModuleRegistry};
use sqlx::SqlitePool;

use crate::modules;

/// Connect to the configured database and apply pending migrations.
pub async fn open_database(
    settings: &Settings,
    registry: &ModuleRegistry,
) -> anyhow::Result<SqlitePool> {
    let pool = roamstay_db::connect(&settings.database.url, settings.database.max_connections)
        .await?;

    let applied = registry.run_migrations(&pool).await?;
    tracing::info!(applied, "database schema up to date");

    Ok(pool)
}

/// Run the HTTP server until Ctrl-C, driving the module lifecycle around it.
pub async fn run(settings: &Settings) -> anyhow::Result<()> {
    let registry = modules::registry();
    let pool = open_database(settings, &registry).await?;

    let ctx = InitCtx {
        settings,
        db: &pool,
    };
    registry.init_modules(&ctx).await?;
    registry.start_modules(&ctx).await?;

    let served = roamstay_http::start_server(&registry, settings, shutdown_signal()).await;

    registry
        .stop_modules()
        .await
        .context("failed to stop modules")?;
    pool.close().await;

    served
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
