use crate::config::Config;
use crate::metadata::SimilarProvider;
use crate::similar::QueryResolver;
use anyhow::{Context, Result};
use axum::{
    http::{header, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod auth;
pub mod error;
pub mod locale;
pub mod params;
pub mod routes_similar;

use auth::{Authenticator, ConfigAuthenticator};
use locale::{LocaleResolver, NegotiatingLocaleResolver};

/// Shared application context
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<Config>,
    /// Similar-titles query resolver
    pub resolver: QueryResolver,
    /// Gate for page routes
    pub authenticator: Arc<dyn Authenticator>,
    /// Per-request language lookup
    pub locales: Arc<dyn LocaleResolver>,
}

impl AppContext {
    /// Build a context with the config-driven authenticator and locale
    /// resolver.
    pub fn new(config: Config, provider: Arc<dyn SimilarProvider>) -> Self {
        let authenticator = Arc::new(ConfigAuthenticator::new(config.server.auth.clone()));
        let locales = Arc::new(NegotiatingLocaleResolver::new(&config.i18n));
        Self {
            resolver: QueryResolver::new(provider),
            authenticator,
            locales,
            config: Arc::new(config),
        }
    }
}

/// Create the Axum router with all routes
pub fn create_router(ctx: AppContext) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers([header::AUTHORIZATION, header::ACCEPT_LANGUAGE]);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        .merge(routes_similar::similar_routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}

async fn health_check() -> impl IntoResponse {
    StatusCode::OK
}

/// Start the HTTP server
pub async fn start_server(config: Config, provider: Arc<dyn SimilarProvider>) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("Invalid server address")?;

    if !provider.is_available() {
        tracing::warn!(
            provider = provider.name(),
            "Metadata provider is not configured; similar pages will fail"
        );
    }

    let app = create_router(AppContext::new(config, provider));

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
