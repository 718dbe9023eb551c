pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::essay::handlers as essay;
use crate::matching::handlers as matching;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Scholarship matching
        .route(
            "/api/v1/scholarships",
            get(matching::handle_list_scholarships),
        )
        .route(
            "/api/v1/scholarships/match",
            post(matching::handle_match),
        )
        .route(
            "/api/v1/scholarships/:id",
            get(matching::handle_get_scholarship),
        )
        .route("/api/v1/profile", get(matching::handle_get_profile))
        // Essay library
        .route("/api/v1/essays/stats", post(essay::handle_stats))
        .route("/api/v1/essays/tone", post(essay::handle_tone))
        .route("/api/v1/essays/quality", post(essay::handle_quality))
        .with_state(state)
}
