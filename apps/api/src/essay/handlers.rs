//! Axum route handlers for the essay tools.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppJson};
use crate::essay::quality::{score_essay, FeedbackItem, Rating, SubScores};
use crate::essay::text::{essay_stats, EssayStats};
use crate::essay::tone::{classify_tone, ToneAnalysis};

#[derive(Debug, Deserialize)]
pub struct EssayRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct QualityResponse {
    pub percentage: u32,
    pub rating: Rating,
    pub rating_label: &'static str,
    pub rating_class: &'static str,
    pub sub_scores: SubScores,
    pub feedback: Vec<FeedbackItem>,
}

/// POST /api/v1/essays/stats
pub async fn handle_stats(AppJson(request): AppJson<EssayRequest>) -> Json<EssayStats> {
    Json(essay_stats(&request.text))
}

/// POST /api/v1/essays/tone
pub async fn handle_tone(AppJson(request): AppJson<EssayRequest>) -> Json<ToneAnalysis> {
    Json(classify_tone(&request.text))
}

/// POST /api/v1/essays/quality
///
/// Rejects essays under the minimum length with 422; nothing is scored then.
pub async fn handle_quality(
    AppJson(request): AppJson<EssayRequest>,
) -> Result<Json<QualityResponse>, AppError> {
    let analysis = score_essay(&request.text)?;
    let rating = analysis.rating();

    Ok(Json(QualityResponse {
        percentage: analysis.percentage(),
        rating,
        rating_label: rating.label(),
        rating_class: rating.css_class(),
        sub_scores: analysis.sub_scores,
        feedback: analysis.feedback,
    }))
}
