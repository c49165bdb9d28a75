use actix_web::{web, App, HttpServer, middleware};
use bc_package_generator::api::{ApiState, configure_routes};
use bc_package_generator::api::routes::json_config;
use bc_package_generator::api::state::AppConfig;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;
use std::env;
use std::path::PathBuf;
use anyhow::Result;

#[actix_web::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .init();

    tracing::info!("Starting BC Package Generator API");

    // Load configuration
    let config = load_config()?;
    if config.template_url.is_none() {
        tracing::warn!("BC_TEMPLATE_URL not set; requests must carry an inline template");
    }
    let max_payload_bytes = config.max_payload_bytes;

    // Initialize application state
    let state = web::Data::new(ApiState::new(config));

    // Get server settings
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse::<u16>()?;

    tracing::info!("Starting server on {}:{}", host, port);

    // Start HTTP server
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(json_config(max_payload_bytes))
            .wrap(TracingLogger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_routes)
    })
    .bind((host.as_str(), port))?
    .run()
    .await?;

    Ok(())
}

fn load_config() -> Result<AppConfig> {
    let defaults = AppConfig::default();

    let config = AppConfig {
        template_url: env::var("BC_TEMPLATE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty()),
        scratch_dir: env::var("BC_SCRATCH_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.scratch_dir),
        max_payload_bytes: env::var("MAX_PAYLOAD_BYTES")
            .unwrap_or_else(|_| "20971520".to_string())
            .parse()?,
        template_fetch_timeout_secs: env::var("TEMPLATE_FETCH_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()?,
    };

    Ok(config)
}
