// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Initialize config, clients and analyzer, then start the HTTP server

use accessible_cms::config::Config;
use accessible_cms::handlers;
use accessible_cms::services::{start_cleanup_task, ContentApiClient, ProfileCache, UiAccessibilityAnalyzer};
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::io;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Initialize logging before config so malformed values are reported
    if std::env::var("RUST_LOG").is_err() {
        let log_level = std::env::var("LOG_LEVEL")
            .ok()
            .filter(|level| !level.trim().is_empty())
            .unwrap_or_else(|| "info,actix_web=info".to_string());
        std::env::set_var("RUST_LOG", log_level);
    }
    env_logger::init();

    // 3. Load configuration
    let config = Config::from_env();

    if let Err(e) = config.validate() {
        log::error!("Configuration error: {}", e);
        std::process::exit(1);
    }

    log::info!("Starting accessible-cms...");
    log::info!("Environment: {} (log level: {})", config.environment, config.log_level);
    log::info!(
        "Server Address: {}:{}",
        config.server_address,
        config.server_port
    );

    // 4. Content backend client
    let content_client = match ContentApiClient::new(&config.content_api_url, config.content_api_timeout) {
        Ok(client) => client,
        Err(e) => {
            log::error!("Failed to create content API client: {}", e);
            std::process::exit(1);
        }
    };
    log::info!(
        "Content API: {} (sample data fallback: {})",
        config.content_api_url,
        config.mock_fallback
    );

    // 5. Profile cache and analyzer
    let cache = Arc::new(ProfileCache::new(config.analysis_cache_ttl));
    start_cleanup_task(cache.clone(), 300);
    log::info!(
        "Initialized profile cache (TTL: {}s), cleanup every 5 minutes",
        config.analysis_cache_ttl
    );

    let analyzer = match UiAccessibilityAnalyzer::from_config(&config, cache) {
        Ok(analyzer) => web::Data::new(analyzer),
        Err(e) => {
            log::error!("Failed to initialize analyzer: {}", e);
            std::process::exit(1);
        }
    };

    // 6. Start HTTP server
    let server_addr = format!("{}:{}", config.server_address, config.server_port);
    let config_data = web::Data::new(config);
    let client_data = web::Data::new(content_client);

    HttpServer::new(move || {
        App::new()
            // Application state
            .app_data(config_data.clone())
            .app_data(client_data.clone())
            .app_data(analyzer.clone())
            // Middleware
            .wrap(Logger::default())
            .wrap(actix_web::middleware::Compress::default())
            // Routes
            .configure(handlers::health_config)
            .configure(handlers::content_config)
            .configure(handlers::accessibility_config)
    })
    .bind(&server_addr)?
    .run()
    .await
}
