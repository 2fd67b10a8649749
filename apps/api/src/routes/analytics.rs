use axum::{extract::State, Json};

use crate::state::AppState;
use crate::store::analytics::{compute_analytics, Analytics};

/// GET /api/v1/analytics
pub async fn analytics_handler(State(state): State<AppState>) -> Json<Analytics> {
    let data = state.store.read().await;
    Json(compute_analytics(&data))
}
