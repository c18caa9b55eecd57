use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::app::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub paths: usize,
    pub schemas: usize,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        paths: state.paths,
        schemas: state.schemas,
    })
}
