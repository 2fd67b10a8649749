//! Axum route handlers for the Matching API.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::scorer::{Match, MatchScorer};
use crate::models::project::Project;
use crate::state::AppState;
use crate::store::Store;

#[derive(Debug, Deserialize)]
pub struct MatchQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct MatchListResponse {
    pub student_id: Uuid,
    pub scorer_backend: String,
    pub matches: Vec<Match>,
    /// Matched projects, in the same order as `matches`.
    pub projects: Vec<Project>,
}

/// Ranks the open projects for one student.
///
/// Returns the matches alongside the matched project records. A student with
/// no skills, or with no overlapping project, gets an empty list.
pub async fn generate_matches(
    store: &Store,
    scorer: &dyn MatchScorer,
    student_id: Uuid,
    limit: usize,
) -> Result<(Vec<Match>, Vec<Project>), AppError> {
    let (student, open_projects) = {
        let data = store.read().await;
        let student = data
            .user(student_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("User {student_id} not found")))?;
        (student, data.open_projects())
    };

    if !student.is_student() {
        return Err(AppError::Validation(format!(
            "User {student_id} is not a student"
        )));
    }

    let mut matches = scorer.score(&student, &open_projects).await?;
    matches.truncate(limit);

    let projects = matches
        .iter()
        .filter_map(|m| open_projects.iter().find(|p| p.id == m.project_id).cloned())
        .collect();

    debug!(
        %student_id,
        candidates = open_projects.len(),
        matched = matches.len(),
        "Generated matches"
    );

    Ok((matches, projects))
}

/// GET /api/v1/students/:id/matches
pub async fn handle_get_matches(
    State(state): State<AppState>,
    Path(student_id): Path<Uuid>,
    Query(query): Query<MatchQuery>,
) -> Result<Json<MatchListResponse>, AppError> {
    let limit = query.limit.unwrap_or(state.config.match_limit);
    let (matches, projects) = generate_matches(
        &state.store,
        state.match_scorer.as_ref(),
        student_id,
        limit,
    )
    .await?;

    Ok(Json(MatchListResponse {
        student_id,
        scorer_backend: state.match_scorer.backend().to_string(),
        matches,
        projects,
    }))
}
