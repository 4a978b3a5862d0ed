//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{extract::State, response::Json};

use super::{
    responses::{HealthResponse, StatusResponse},
    StatusState,
};

/// Handle GET /status - Return the latest timer snapshot
pub async fn status_handler(State(state): State<Arc<StatusState>>) -> Json<StatusResponse> {
    let timer = state.snapshots.borrow().clone();

    Json(StatusResponse {
        timer,
        uptime: state.get_uptime(),
    })
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
