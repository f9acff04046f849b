//! HTTP surface: health endpoints, Prometheus metrics, and the two
//! evaluation routes. The router is state-generic so integration tests
//! can drive it without binding a socket.

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::json;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::engine::domain::StudentProfile;
use crate::engine::{evaluate_profile, MatchEngine, MatchReport, ProfileInsight};

#[derive(Clone)]
pub struct AppState {
    pub readiness: Arc<AtomicBool>,
    pub metrics: PrometheusHandle,
    pub engine: Arc<MatchEngine>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/profile/insights", post(profile_insights_endpoint))
        .route("/api/v1/match", post(match_endpoint))
        .with_state(state)
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

async fn profile_insights_endpoint(
    Json(profile): Json<StudentProfile>,
) -> Json<ProfileInsight> {
    Json(evaluate_profile(&profile))
}

async fn match_endpoint(
    State(state): State<AppState>,
    Json(profile): Json<StudentProfile>,
) -> Json<MatchReport> {
    Json(state.engine.match_institutions(&profile))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::catalog::seed_catalog;
    use crate::engine::domain::ProfileId;

    fn sample_profile() -> StudentProfile {
        StudentProfile {
            profile_id: ProfileId("api-sample".to_string()),
            name: "Sample Applicant".to_string(),
            grade: 12,
            academic: Default::default(),
            activities: Vec::new(),
            character: Default::default(),
            milestones: Vec::new(),
        }
    }

    #[tokio::test]
    async fn insights_endpoint_scores_a_profile() {
        let Json(body) = profile_insights_endpoint(Json(sample_profile())).await;
        assert_eq!(body.profile_id, ProfileId("api-sample".to_string()));
        assert!(body.strength_score <= 100);
    }

    #[tokio::test]
    async fn match_endpoint_covers_the_whole_catalog() {
        let catalog = seed_catalog().expect("seed catalog is valid");
        let expected = catalog.len();
        let state = AppState {
            readiness: Arc::new(AtomicBool::new(true)),
            metrics: axum_prometheus::PrometheusMetricLayer::pair().1,
            engine: Arc::new(MatchEngine::new(catalog)),
        };

        let Json(body) = match_endpoint(State(state), Json(sample_profile())).await;
        assert_eq!(body.summary.total_matches, expected);
    }
}
