//! HTTP API module
//!
//! Optional read-only status endpoints. Handlers only read the latest
//! published [`TimerSnapshot`](crate::state::TimerSnapshot); they never
//! touch the controller.

pub mod handlers;
pub mod responses;

use std::{sync::Arc, time::Instant};
use axum::{
    routing::get,
    Router,
};
use tokio::sync::watch;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::TimerSnapshot;
use handlers::*;

/// Shared state handed to every handler
#[derive(Debug)]
pub struct StatusState {
    pub snapshots: watch::Receiver<TimerSnapshot>,
    pub start_time: Instant,
}

impl StatusState {
    pub fn new(snapshots: watch::Receiver<TimerSnapshot>) -> Self {
        Self {
            snapshots,
            start_time: Instant::now(),
        }
    }

    /// Calculate uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        format_uptime(self.start_time.elapsed().as_secs())
    }
}

fn format_uptime(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<StatusState>) -> Router {
    Router::new()
        .route("/status", get(status_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::{Request, StatusCode}};
    use tower::ServiceExt;

    use crate::{
        config::TimerSettings,
        state::{Phase, ProgressionState, TimerState},
    };

    fn snapshot() -> TimerSnapshot {
        let settings = TimerSettings::default();
        TimerSnapshot::capture(
            "Pomodoro",
            &TimerState::new(Phase::ShortBreak, &settings),
            &ProgressionState::new(4, 1),
            true,
        )
    }

    async fn get_json(router: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn status_returns_latest_snapshot() {
        let (tx, rx) = watch::channel(snapshot());
        let router = create_router(Arc::new(StatusState::new(rx)));

        let (status, body) = get_json(router.clone(), "/status").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["timer"]["phase"], "short_break");
        assert_eq!(body["timer"]["display"], "05:00");
        assert_eq!(body["timer"]["flashing"], true);
        assert_eq!(body["uptime"], "0s");

        let mut next = snapshot();
        next.display = "04:59".to_string();
        tx.send_replace(next);
        let (_, body) = get_json(router, "/status").await;
        assert_eq!(body["timer"]["display"], "04:59");
    }

    #[tokio::test]
    async fn health_is_ok() {
        let (_tx, rx) = watch::channel(snapshot());
        let router = create_router(Arc::new(StatusState::new(rx)));
        let (status, body) = get_json(router, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["version"], "1.0.0");
    }

    #[test]
    fn uptime_formatting() {
        assert_eq!(format_uptime(5), "5s");
        assert_eq!(format_uptime(125), "2m 5s");
        assert_eq!(format_uptime(3725), "1h 2m 5s");
    }
}
