//! Backend REST API Client
//!
//! HTTP client for the GuardianOS complaint and SOS endpoints.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;

use super::DashboardSource;
use crate::model::{ComplaintStats, RecentComplaint, SosStats};

/// GuardianOS backend client
pub struct BackendClient {
    client: Client,
    config: BackendConfig,
}

/// Configuration for the backend client
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Base URL for the backend API (e.g., "http://localhost:8000")
    pub base_url: String,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            request_timeout_ms: 10_000,
        }
    }
}

impl BackendClient {
    /// Create a new backend client with the given configuration
    pub fn new(config: BackendConfig) -> Result<Self, BackendError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(BackendError::Request)?;

        let config = BackendConfig {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            ..config
        };

        Ok(Self { client, config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// Issue a GET and decode the JSON body
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, BackendError> {
        let url = self.url(path);

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                BackendError::Timeout
            } else if e.is_connect() {
                BackendError::Unavailable
            } else {
                BackendError::Request(e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await.map_err(BackendError::Request)?;
        serde_json::from_slice(&bytes).map_err(|e| BackendError::Decode(format!("{}: {}", path, e)))
    }
}

#[async_trait]
impl DashboardSource for BackendClient {
    fn name(&self) -> &str {
        &self.config.base_url
    }

    async fn complaint_stats(&self) -> Result<ComplaintStats, BackendError> {
        self.get_json("/complaints/stats").await
    }

    async fn sos_stats(&self) -> Result<SosStats, BackendError> {
        self.get_json("/sos/stats").await
    }

    async fn recent_complaints(&self) -> Result<Vec<RecentComplaint>, BackendError> {
        self.get_json("/complaints/recent").await
    }
}

/// Errors that can occur when reading from the backend
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Backend unavailable")]
    Unavailable,

    #[error("Request timeout")]
    Timeout,

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed response: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::{build_router, AppState, StubStore};

    async fn spawn_stub(store: StubStore) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let router = build_router(AppState::new(store));
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn client_for(base_url: String) -> BackendClient {
        BackendClient::new(BackendConfig {
            base_url,
            request_timeout_ms: 2_000,
        })
        .unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = BackendConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.request_timeout_ms, 10_000);
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = client_for("http://localhost:8000/".to_string());
        assert_eq!(client.url("/sos/stats"), "http://localhost:8000/sos/stats");
    }

    #[tokio::test]
    async fn test_reads_from_stub_backend() {
        let store = StubStore::seeded(chrono::Utc::now());
        let expected = store.complaint_stats_at(chrono::Utc::now());
        let client = client_for(spawn_stub(store).await);

        let complaints = client.complaint_stats().await.unwrap();
        assert_eq!(complaints, expected);

        let sos = client.sos_stats().await.unwrap();
        assert!(sos.today_alerts <= sos.total_alerts);

        let recent = client.recent_complaints().await.unwrap();
        assert!(!recent.is_empty());
        assert!(recent.len() <= 5);
    }

    #[tokio::test]
    async fn test_missing_route_is_status_error() {
        let client = client_for(spawn_stub(StubStore::default()).await);
        let result: Result<serde_json::Value, _> = client.get_json("/nope").await;
        assert!(matches!(result, Err(BackendError::Status { status: 404, .. })));
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let client = client_for(spawn_stub(StubStore::default()).await);
        // Liveness returns an empty body, which is not a stats object
        let result: Result<ComplaintStats, _> = client.get_json("/health/live").await;
        assert!(matches!(result, Err(BackendError::Decode(_))));
    }

    #[tokio::test]
    async fn test_cycle_applies_stats_with_null_recent_columns() {
        use axum::{routing::get, Json, Router};
        use serde_json::json;

        let router = Router::new()
            .route(
                "/complaints/stats",
                get(|| async { Json(json!({"total_complaints": 12, "today_complaints": 4})) }),
            )
            .route(
                "/sos/stats",
                get(|| async { Json(json!({"total_alerts": 3, "today_alerts": 1})) }),
            )
            .route(
                "/complaints/recent",
                get(|| async {
                    Json(json!([{
                        "id": 7,
                        "title": "Graffiti on bus stop",
                        "crime_type": null,
                        "status": null,
                        "created_at": "2024-06-01T08:00:00"
                    }]))
                }),
            );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        let client = client_for(format!("http://{}", addr));
        let state = tokio::sync::RwLock::new(crate::sync::DashboardState::default());
        crate::sync::run_cycle(&client, &state).await;

        let state = state.read().await;
        assert!(state.last_error.is_none(), "{:?}", state.last_error);
        let stats = state.stats.unwrap();
        assert_eq!(stats.total_reports, 12);
        assert_eq!(stats.sos_alerts, 1);
        assert_eq!(state.recent.len(), 1);
        assert_eq!(state.recent[0].crime_type, None);
        assert_eq!(state.recent[0].title_text(), "Graffiti on bus stop");
    }

    #[tokio::test]
    async fn test_connection_refused_is_unavailable() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = client_for(format!("http://{}", addr));
        let result = client.sos_stats().await;
        assert!(matches!(result, Err(BackendError::Unavailable)));
    }
}
