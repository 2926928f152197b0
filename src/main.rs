mod config;
mod db;
mod docs;
mod handlers;
mod models;
mod routes;

use axum::Router;
use config::Config;
use db::DbItems;
use docs::ApiDoc;
use routes::create_api_routes;
use std::panic;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() {
    // Set panic hook for better error messages
    panic::set_hook(Box::new(|info| {
        eprintln!("PANIC: {info}");
    }));

    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "items_api=debug,tower_http=debug,axum::rejection=trace,info".into()
        }))
        .init();

    info!("Starting server...");

    // Load configuration
    let config = Config::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        warn!("Using default configuration");
        Config::default()
    });

    // Initialize database connection
    let db_url = config.db_url.clone().unwrap_or_else(|| {
        error!("DB_URL is not configured");
        std::process::exit(1);
    });
    let db = Arc::new(
        DbItems::new(&db_url)
            .unwrap_or_else(|e| panic!("Failed to create database pool: {e}")),
    );

    // Ensure the schema exists; a failure here is not fatal, the table may
    // already exist and queries surface store errors per request anyway.
    match db.ensure_schema().await {
        Ok(_) => info!("Database initialized successfully"),
        Err(e) => {
            error!("Failed to initialize schema: {}", e);
            warn!("Continuing; store operations may fail until the database is reachable");
        }
    }

    // Create API routes
    let api_routes = create_api_routes(db);

    // Combine all routes
    let app_routes = Router::new()
        // Mount API routes
        .nest("/api", api_routes)
        // Mount Swagger UI
        .merge(SwaggerUi::new("/swagger").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // The frontend is served from a different origin
        .layer(CorsLayer::permissive())
        // Add tracing layer
        .layer(TraceLayer::new_for_http());

    // Start the HTTP/API server
    let listener = tokio::net::TcpListener::bind(config.server_address())
        .await
        .unwrap_or_else(|_| panic!("Failed to bind to {}", config.server_address()));

    info!("Server running on http://{}", config.server_address());
    info!(
        "Swagger UI available at http://{}/swagger",
        config.server_address()
    );

    axum::serve(listener, app_routes)
        .await
        .expect("Server failed to start");
}
