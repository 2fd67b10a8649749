//! Axum route handlers for the Certification API.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::certification::Certification;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct StudentQuery {
    pub student_id: Uuid,
}

/// GET /api/v1/certifications
pub async fn handle_list_certifications(
    State(state): State<AppState>,
    Query(params): Query<StudentQuery>,
) -> Json<Vec<Certification>> {
    let certs = state
        .store
        .read()
        .await
        .certifications
        .iter()
        .filter(|c| c.student_id == params.student_id)
        .cloned()
        .collect();
    Json(certs)
}

/// GET /api/v1/certifications/verify/:hash
pub async fn handle_verify_certification(
    State(state): State<AppState>,
    Path(hash): Path<String>,
) -> Result<Json<Certification>, AppError> {
    let data = state.store.read().await;
    data.certification_by_hash(&hash)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound("No certificate matches this verification hash".into()))
}
