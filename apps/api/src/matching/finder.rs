//! Scholarship search orchestration: remote recommendations first when an
//! endpoint is configured, local catalog evaluation otherwise.
//!
//! At most one remote attempt per search. Any remote failure degrades to the
//! local evaluator with a non-blocking notice; it is never surfaced as an error.

use tracing::{info, warn};

use crate::matching::catalog::Catalog;
use crate::matching::eligibility::find_all;
use crate::matching::view::{ResultCard, ResultSource, ResultsView};
use crate::models::profile::StudentProfile;
use crate::recommender::Recommender;

pub const OFFLINE_NOTICE: &str = "Using offline data. AI features may be limited.";

pub async fn find_scholarships(
    profile: &StudentProfile,
    catalog: &Catalog,
    recommender: Option<&dyn Recommender>,
) -> ResultsView {
    let Some(recommender) = recommender else {
        return local_results(profile, catalog, None);
    };

    match recommender.recommend(profile).await {
        Ok(recommendations) => {
            info!(
                "Using {} remote recommendations",
                recommendations.len()
            );
            let cards = recommendations
                .into_iter()
                .map(|rec| ResultCard::from_remote(rec, catalog, profile))
                .collect();
            ResultsView::build(cards, ResultSource::Remote, None)
        }
        Err(e) => {
            warn!("Recommendation endpoint failed, falling back to local catalog: {e}");
            local_results(profile, catalog, Some(OFFLINE_NOTICE.to_string()))
        }
    }
}

pub fn local_results(
    profile: &StudentProfile,
    catalog: &Catalog,
    notice: Option<String>,
) -> ResultsView {
    let cards = find_all(profile, catalog)
        .iter()
        .map(|result| ResultCard::from_eligibility(result, profile))
        .collect();
    ResultsView::build(cards, ResultSource::Local, notice)
}
