//! Axum route handlers for the Users API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::user::User;
use crate::state::AppState;
use crate::users::service::{get_user, register_user, update_skills, RegisterRequest};

#[derive(Debug, Deserialize)]
pub struct SkillsUpdate {
    pub skills: Vec<String>,
}

/// POST /api/v1/users
pub async fn handle_register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<User>), AppError> {
    let user = register_user(&state.store, req).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /api/v1/users/:id
pub async fn handle_get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<User>, AppError> {
    Ok(Json(get_user(&state.store, id).await?))
}

/// PUT /api/v1/users/:id/skills
pub async fn handle_update_skills(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SkillsUpdate>,
) -> Result<Json<User>, AppError> {
    Ok(Json(update_skills(&state.store, id, &req.skills).await?))
}
