//! Result view models: what the page renders after a profile submission.

use chrono::NaiveDate;
use serde::Serialize;

use crate::matching::catalog::Catalog;
use crate::matching::eligibility::EligibilityResult;
use crate::matching::match_score::{match_score, MatchBadge};
use crate::models::profile::StudentProfile;
use crate::recommender::RemoteRecommendation;

const ELIGIBLE_LABEL: &str = "✓ Eligible";
const NOT_ELIGIBLE_LABEL: &str = "✗ Not Eligible";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultSource {
    Remote,
    Local,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchBadgeView {
    pub score: u32,
    pub badge: MatchBadge,
    pub label: &'static str,
    pub css_class: &'static str,
}

impl MatchBadgeView {
    pub fn new(score: u32) -> Self {
        let badge = MatchBadge::for_score(score);
        Self {
            score,
            badge,
            label: badge.label(),
            css_class: badge.css_class(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ResultCard {
    pub name: String,
    pub description: String,
    pub is_eligible: bool,
    pub status_label: &'static str,
    /// Absent for remote recommendations that do not name a catalog scholarship.
    pub match_score: Option<MatchBadgeView>,
    pub reasons: Vec<String>,
    pub amount: String,
    pub deadline: String,
    pub deadline_display: String,
}

impl ResultCard {
    pub fn from_eligibility(result: &EligibilityResult<'_>, profile: &StudentProfile) -> Self {
        let scholarship = result.scholarship;
        Self {
            name: scholarship.name.clone(),
            description: scholarship.description.clone(),
            is_eligible: result.is_eligible,
            status_label: status_label(result.is_eligible),
            match_score: Some(MatchBadgeView::new(match_score(profile, scholarship))),
            reasons: result.reasons.clone(),
            amount: scholarship.amount.clone(),
            deadline_display: format_deadline(&scholarship.deadline),
            deadline: scholarship.deadline.clone(),
        }
    }

    /// Remote entries keep their own eligibility and reasons. The match score is
    /// computed locally when the name resolves to a catalog scholarship.
    pub fn from_remote(
        rec: RemoteRecommendation,
        catalog: &Catalog,
        profile: &StudentProfile,
    ) -> Self {
        let match_score = catalog
            .find_by_name(&rec.name)
            .map(|scholarship| MatchBadgeView::new(match_score(profile, scholarship)));

        Self {
            status_label: status_label(rec.is_eligible),
            deadline_display: format_deadline(&rec.deadline),
            name: rec.name,
            description: rec.description,
            is_eligible: rec.is_eligible,
            match_score,
            reasons: rec.reasons,
            amount: rec.amount,
            deadline: rec.deadline,
        }
    }
}

fn status_label(is_eligible: bool) -> &'static str {
    if is_eligible {
        ELIGIBLE_LABEL
    } else {
        NOT_ELIGIBLE_LABEL
    }
}

/// `2026-03-15` → `March 15, 2026`. Unparseable input is shown as given.
pub fn format_deadline(deadline: &str) -> String {
    NaiveDate::parse_from_str(deadline.trim(), "%Y-%m-%d")
        .map(|date| date.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|_| deadline.to_string())
}

#[derive(Debug, Clone, Serialize)]
pub struct ResultsView {
    pub source: ResultSource,
    /// Non-blocking notice, e.g. when remote results were unavailable.
    pub notice: Option<String>,
    pub summary: String,
    pub eligible_heading: Option<String>,
    pub not_eligible_heading: Option<String>,
    pub eligible: Vec<ResultCard>,
    pub not_eligible: Vec<ResultCard>,
    /// Screen-reader announcement.
    pub announcement: String,
}

impl ResultsView {
    /// Splits cards into eligible / not-eligible groups, keeping their order.
    pub fn build(cards: Vec<ResultCard>, source: ResultSource, notice: Option<String>) -> Self {
        let (eligible, not_eligible): (Vec<_>, Vec<_>) =
            cards.into_iter().partition(|card| card.is_eligible);

        let eligible_heading = (!eligible.is_empty()).then(|| {
            format!(
                "You qualify for {} scholarship{}!",
                eligible.len(),
                if eligible.len() > 1 { "s" } else { "" }
            )
        });
        let not_eligible_heading = (!not_eligible.is_empty())
            .then(|| "Scholarships you don't qualify for yet:".to_string());

        Self {
            source,
            notice,
            summary: format!("Found {} scholarships you qualify for!", eligible.len()),
            announcement: format!(
                "Found {} scholarships you qualify for and {} you don't qualify for yet.",
                eligible.len(),
                not_eligible.len()
            ),
            eligible_heading,
            not_eligible_heading,
            eligible,
            not_eligible,
        }
    }
}
