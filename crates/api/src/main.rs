//! FleetInfo API server binary entrypoint.

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use fleetinfo_common::config::{AppConfig, LogFormat};
use fleetinfo_common::properties::Properties;
use fleetinfo_environment::{CodeUnit, extract_application_info, resolve_fleet};

use fleetinfo_api::routes::create_router;
use fleetinfo_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = AppConfig::from_env()?;

    // Initialize tracing
    init_tracing(config.log_format);

    tracing::info!("Starting FleetInfo API server...");

    // Resolve the fleet once, before anything reads it
    let mut props = Properties::from_args(std::env::args().skip(1));
    let fleet = resolve_fleet(&mut props);

    // Extract application info from the packaged artifact
    let unit = CodeUnit::new(env!("CARGO_PKG_NAME"), config.code_unit_location.clone())?;
    let info = extract_application_info(&unit, &props);
    if info.is_unknown() {
        tracing::warn!(code_unit = %unit, "No packaged metadata found, info will report unknown");
    } else {
        tracing::info!(fleet = %fleet, app = %info, "Application info loaded");
    }

    // Build application state
    let state = AppState::new(info);

    // Build router
    let app = create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Start server
    tracing::info!("API server listening on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("fleetinfo_api=debug,fleetinfo_environment=debug,tower_http=debug")
    });

    match format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}
