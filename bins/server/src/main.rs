//! Approvals API server.
//!
//! Serves budget and purchase order approvals over the legacy ERP database,
//! plus the PDF attachment store.

use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use aprobaciones_api::{AppState, create_router};
use aprobaciones_core::approval::AuditClock;
use aprobaciones_db::connect;
use aprobaciones_shared::{AppConfig, JwtService, TokenConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aprobaciones=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");
    let tz = config.legacy.tz()?;

    // Connect to both databases
    let legacy_db = connect(&config.database).await?;
    info!("Connected to legacy ERP database");

    let attachments_db = connect(&config.attachments.database()).await?;
    info!("Connected to attachment store");

    if config.attachments.api_key.as_deref().is_none_or(str::is_empty) {
        warn!("No attachment API key configured; attachment endpoints will reject every request");
    }

    let jwt_service = JwtService::new(TokenConfig::from_settings(&config.jwt));

    let state = AppState::new(
        legacy_db,
        attachments_db,
        jwt_service,
        config.attachments.api_key.clone(),
        AuditClock::in_zone(tz),
    );

    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!(timezone = %tz, "Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
