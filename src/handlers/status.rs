//! Unauthenticated liveness and counter endpoints.
//! Used by: server.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;
use crate::telemetry::MetricsSnapshot;

#[derive(Serialize)]
pub struct Health {
    pub status: &'static str,
    pub algorithm: &'static str,
}

pub async fn health(State(state): State<AppState>) -> Json<Health> {
    Json(Health {
        status: "ok",
        algorithm: state.codec.algorithm().as_str(),
    })
}

pub async fn metrics(State(state): State<AppState>) -> Json<MetricsSnapshot> {
    Json(state.metrics.snapshot())
}
