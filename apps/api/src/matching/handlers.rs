//! Axum route handlers for scholarship matching and the saved profile.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use tracing::warn;

use crate::errors::{AppError, AppJson};
use crate::matching::finder::find_scholarships;
use crate::matching::validation::{validate_profile, ProfileForm};
use crate::matching::view::ResultsView;
use crate::models::profile::StudentProfile;
use crate::models::scholarship::ScholarshipRecord;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub profile: StudentProfile,
    pub results: ResultsView,
}

/// GET /api/v1/scholarships
pub async fn handle_list_scholarships(
    State(state): State<AppState>,
) -> Json<Vec<ScholarshipRecord>> {
    Json(state.catalog.scholarships().to_vec())
}

/// GET /api/v1/scholarships/:id
pub async fn handle_get_scholarship(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<ScholarshipRecord>, AppError> {
    state
        .catalog
        .get(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Scholarship {id} not found")))
}

/// POST /api/v1/scholarships/match
///
/// Validate → persist profile → search (remote with local fallback).
/// A failed save is logged and does not block the results.
pub async fn handle_match(
    State(state): State<AppState>,
    AppJson(form): AppJson<ProfileForm>,
) -> Result<Json<MatchResponse>, AppError> {
    let profile = validate_profile(&form).map_err(AppError::InvalidForm)?;

    if let Err(e) = state.profiles.save(&profile).await {
        warn!("Failed to save profile: {e}");
    }

    let results =
        find_scholarships(&profile, &state.catalog, state.recommender.as_deref()).await;

    Ok(Json(MatchResponse { profile, results }))
}

/// GET /api/v1/profile
///
/// The last successfully submitted profile, used to prefill the form.
pub async fn handle_get_profile(
    State(state): State<AppState>,
) -> Result<Json<StudentProfile>, AppError> {
    state
        .profiles
        .load()
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("No saved profile".to_string()))
}
