//! Complaint Routes
//!
//! - GET /complaints/stats - Total and last-24h complaint counts
//! - GET /complaints/recent - Newest complaints (`?limit=N`, default 5)

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use std::sync::Arc;

use crate::model::{ComplaintStats, RecentComplaint};
use crate::server::error::{ServerError, ServerResult};
use crate::server::state::AppState;
use crate::server::store::DEFAULT_RECENT_LIMIT;

const MAX_RECENT_LIMIT: usize = 100;

/// Query parameters for `/complaints/recent`
#[derive(Debug, Deserialize)]
pub struct RecentParams {
    pub limit: Option<usize>,
}

/// GET /complaints/stats
pub async fn stats(State(state): State<Arc<AppState>>) -> Json<ComplaintStats> {
    Json(state.store.complaint_stats_at(Utc::now()))
}

/// GET /complaints/recent
pub async fn recent(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RecentParams>,
) -> ServerResult<Json<Vec<RecentComplaint>>> {
    let limit = params.limit.unwrap_or(DEFAULT_RECENT_LIMIT);
    if limit == 0 || limit > MAX_RECENT_LIMIT {
        return Err(ServerError::Validation(format!(
            "limit must be between 1 and {}",
            MAX_RECENT_LIMIT
        )));
    }

    Ok(Json(state.store.recent(limit)))
}
