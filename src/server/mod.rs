use crate::catalog::{MediaResolver, MovieStore, SqliteMovieStore, TmdbImageResolver};
use crate::config::Config;
use anyhow::{Context, Result};
use axum::{
    http::{header, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use streamflix_db::pool::DbPool;
use tokio::signal;
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

pub mod error;
pub mod openapi;
pub mod routes_catalog;

/// Shared application context
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<Config>,
    /// Movie store the catalog reads from
    pub store: Arc<dyn MovieStore>,
    /// Artwork URL resolution
    pub images: Arc<dyn MediaResolver>,
}

impl AppContext {
    pub fn new(config: Config, store: Arc<dyn MovieStore>) -> Self {
        let images = Arc::new(TmdbImageResolver::from_config(&config.media));
        Self {
            config: Arc::new(config),
            store,
            images,
        }
    }
}

/// Create the Axum router with all routes
pub fn create_router(ctx: AppContext, static_dir: Option<PathBuf>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE]);

    let mut app = Router::new()
        // Health check
        .route("/health", get(health_check))
        .nest("/api", routes_catalog::catalog_routes())
        // OpenAPI documentation (Swagger UI at /api/docs)
        .nest("/api", openapi::openapi_routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(ctx);

    // SPA fallback: serves index.html for any route that doesn't match a file
    if let Some(dir) = static_dir {
        if dir.exists() {
            tracing::info!("Serving static files from {:?}", dir);
            let index_path = dir.join("index.html");
            app = app.fallback_service(
                ServeDir::new(&dir)
                    .append_index_html_on_directories(true)
                    .not_found_service(ServeFile::new(index_path)),
            );
        }
    }

    app
}

async fn health_check() -> impl IntoResponse {
    StatusCode::OK
}

/// Start the HTTP server over the SQLite store
pub async fn start_server(config: Config, db_pool: DbPool) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("Invalid server address")?;

    let static_dir = config.server.static_dir.clone();
    let ctx = AppContext::new(config, Arc::new(SqliteMovieStore::new(db_pool)));
    let app = create_router(ctx, static_dir);

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => {}
            Err(e) => {
                tracing::error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
