use axum::{Json, extract::State, response::IntoResponse};
use tracing::warn;

use crate::{AppState, error::ApiError, models::ClassEvent};

#[utoipa::path(get, path = "/", tag = "classes")]
pub async fn root() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "Class Schedule API",
        "endpoints": {
            "/api/classes": "List scheduled classes as JSON"
        }
    }))
}

#[utoipa::path(get, path = "/healthz/live", tag = "classes")]
pub async fn healthz_live() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}

#[utoipa::path(
    get,
    path = "/healthz/ready",
    responses(
        (status = 200, description = "Database reachable"),
        (status = 503, description = "Database unreachable")
    ),
    tag = "classes"
)]
pub async fn healthz_ready(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    state.store.ping().await.map_err(|err| {
        warn!(error = %err, "readiness check failed");
        ApiError::ServiceUnavailable("Service unavailable".into())
    })?;
    Ok(Json(serde_json::json!({"status": "ok"})))
}

#[utoipa::path(
    get,
    path = "/api/classes",
    responses(
        (status = 200, description = "List of classes", body = [ClassEvent]),
        (status = 500, description = "Internal server error")
    ),
    tag = "classes"
)]
pub async fn list_classes(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let classes: Vec<ClassEvent> = state.store.list_classes().await?;
    Ok(Json(classes))
}
