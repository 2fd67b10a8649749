//! Axum route handlers for the Applications API.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::applications::service::{
    apply, list_applications, review_application, ApplicationFilter, ApplyRequest, ReviewAction,
};
use crate::errors::AppError;
use crate::models::application::Application;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ReviewRequest {
    pub action: ReviewAction,
}

/// POST /api/v1/applications
pub async fn handle_apply(
    State(state): State<AppState>,
    Json(req): Json<ApplyRequest>,
) -> Result<(StatusCode, Json<Application>), AppError> {
    let application = apply(&state.store, req).await?;
    Ok((StatusCode::CREATED, Json(application)))
}

/// GET /api/v1/applications
pub async fn handle_list_applications(
    State(state): State<AppState>,
    Query(filter): Query<ApplicationFilter>,
) -> Json<Vec<Application>> {
    Json(list_applications(&state.store, &filter).await)
}

/// POST /api/v1/applications/:id/review
pub async fn handle_review_application(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ReviewRequest>,
) -> Result<Json<Application>, AppError> {
    Ok(Json(review_application(&state.store, id, req.action).await?))
}
