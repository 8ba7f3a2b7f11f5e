//! HRIS API Server
//!
//! Main entry point for the HRIS backend service.

use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hris_api::{AppState, create_router};
use hris_db::{BackupRepository, connect_with};
use hris_shared::{AppConfig, JwtService};

/// Recorded as `triggeredBy` on scheduled backups.
const SCHEDULER: &str = "scheduler";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hris=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;

    let db = connect_with(&config.database).await?;
    info!(
        max_connections = config.database.max_connections,
        "Connected to database"
    );

    let jwt_service = JwtService::new(&config.jwt);

    if config.backup.is_enabled() {
        spawn_backup_scheduler(
            BackupRepository::new(db.clone()),
            Duration::from_secs(config.backup.interval_secs),
        );
        info!(
            interval_secs = config.backup.interval_secs,
            "Scheduled configuration backups enabled"
        );
    }

    let app = create_router(AppState::new(db, jwt_service));

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Takes a configuration backup every `period`, starting one period from now.
fn spawn_backup_scheduler(repo: BackupRepository, period: Duration) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        ticker.tick().await;

        loop {
            ticker.tick().await;
            match repo.run(Some(SCHEDULER.to_string())).await {
                Ok(backup) => info!(
                    backup_id = %backup.id,
                    item_count = backup.item_count,
                    "Scheduled backup completed"
                ),
                Err(e) => error!(error = %e, "Scheduled backup failed"),
            }
        }
    });
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
