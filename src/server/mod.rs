//! Stub Backend API
//!
//! A fixture-backed stand-in for the GuardianOS backend, built with Axum.
//! It serves exactly the reads the dashboard polls so the console can run
//! without the real service.
//!
//! # Endpoints
//!
//! - `GET /complaints/stats` - `{ total_complaints, today_complaints }`
//! - `GET /complaints/recent` - newest complaints, `?limit=N` (default 5)
//! - `GET /sos/stats` - `{ total_alerts, today_alerts }`
//! - `GET /health/live` - Liveness probe
//! - `GET /health` - Status with record counts

pub mod error;
pub mod routes;
pub mod state;
pub mod store;

pub use error::{ServerError, ServerResult};
pub use state::AppState;
pub use store::{ComplaintRecord, SosRecord, StubStore, DEFAULT_RECENT_LIMIT};

use axum::{http::Uri, routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::ServerConfig;

/// Build the stub router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/", get(routes::health::full_health));

    Router::new()
        .route("/complaints/stats", get(routes::complaints::stats))
        .route("/complaints/recent", get(routes::complaints::recent))
        .route("/sos/stats", get(routes::sos::stats))
        .nest("/health", health_routes)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(state))
}

async fn not_found(uri: Uri) -> ServerError {
    ServerError::NotFound(uri.path().to_string())
}

/// Start the stub server and run until Ctrl+C / SIGTERM
pub async fn serve(state: AppState, config: &ServerConfig) -> Result<(), ServerError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("GuardianOS stub API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Internal(e.to_string()))?;

    tracing::info!("GuardianOS stub API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
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

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
