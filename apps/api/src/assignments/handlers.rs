//! Axum route handlers for the Assignments and Milestones API.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::assignments::service::{
    create_assignment, list_assignments, review_milestone, submit_milestone, AssignmentFilter,
    CreateAssignmentRequest, MilestoneAction, MilestoneReviewOutcome,
};
use crate::errors::AppError;
use crate::models::assignment::{Assignment, Milestone};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct MilestoneReviewRequest {
    pub action: MilestoneAction,
    #[serde(default)]
    pub feedback: Option<String>,
}

/// POST /api/v1/assignments
pub async fn handle_create_assignment(
    State(state): State<AppState>,
    Json(req): Json<CreateAssignmentRequest>,
) -> Result<(StatusCode, Json<Assignment>), AppError> {
    let assignment = create_assignment(&state.store, req).await?;
    Ok((StatusCode::CREATED, Json(assignment)))
}

/// GET /api/v1/assignments
pub async fn handle_list_assignments(
    State(state): State<AppState>,
    Query(filter): Query<AssignmentFilter>,
) -> Json<Vec<Assignment>> {
    Json(list_assignments(&state.store, &filter).await)
}

/// POST /api/v1/milestones/:id/submit
pub async fn handle_submit_milestone(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SubmitRequest>,
) -> Result<Json<Milestone>, AppError> {
    Ok(Json(submit_milestone(&state.store, id, &req.content).await?))
}

/// POST /api/v1/milestones/:id/review
///
/// Approving the final milestone completes the assignment; the issued
/// certificate is returned in the same response.
pub async fn handle_review_milestone(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<MilestoneReviewRequest>,
) -> Result<Json<MilestoneReviewOutcome>, AppError> {
    let outcome = review_milestone(&state.store, id, req.action, req.feedback).await?;
    Ok(Json(outcome))
}
