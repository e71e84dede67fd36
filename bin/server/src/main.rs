use actix_web::{web, App, HttpServer};
use mochi_server::config::ServerConfig;
use mochi_server::state::AppState;
use registry::Registry;
use std::fs;
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize tracing with env filter
    // Filter out actix-server worker shutdown messages
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("info")
                    .add_directive("actix_server::worker=warn".parse().unwrap())
                    .add_directive("actix_server::accept=warn".parse().unwrap())
            }),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(
        "Starting mochi-server {} (PID: {})",
        env!("CARGO_PKG_VERSION"),
        std::process::id()
    );

    let config = ServerConfig::load()?;

    if !config.data_dir.exists() {
        fs::create_dir_all(&config.data_dir)?;
    }
    info!("Package storage root: {:?}", config.data_dir);

    let registry = Registry::new(&config.config_path, &config.data_dir);

    // First load creates the configuration file with defaults if absent;
    // the port is fixed here, everything else is re-read per request.
    let settings = registry.settings().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
    })?;
    info!("Configuration file: {:?}", config.config_path);
    if settings.auth_enabled() {
        info!("Bearer-token authentication enabled");
    } else {
        info!("No token configured, package endpoints are unauthenticated");
    }

    let state = web::Data::new(AppState::new(registry));
    let bind_address = config.bind_address(settings.port);

    info!("Starting server on http://{}", bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(mochi_server::configure)
    })
    .bind(&bind_address)
    .map_err(|e| {
        error!("Failed to bind to {}: {}", bind_address, e);
        e
    })?
    .run()
    .await
}
