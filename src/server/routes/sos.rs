//! SOS Routes
//!
//! - GET /sos/stats - Total and last-24h alert counts

use axum::{extract::State, Json};
use chrono::Utc;
use std::sync::Arc;

use crate::model::SosStats;
use crate::server::state::AppState;

/// GET /sos/stats
pub async fn stats(State(state): State<Arc<AppState>>) -> Json<SosStats> {
    Json(state.store.sos_stats_at(Utc::now()))
}
