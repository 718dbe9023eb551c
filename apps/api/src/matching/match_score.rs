//! Match score: a continuous 0–100 estimate of fit, independent of the
//! eligibility gate. A profile can be ineligible and still score well.
//!
//! Components:
//! - GPA (max 40): `min(40, 30 + 10 × excess)` at or above the minimum,
//!   `max(0, 30 − 15 × deficit)` below it. Both branches meet at 30.
//! - Income (max 20): all or nothing.
//! - Course (max 25): all or nothing; the open-to-all sentinel always scores.
//! - Activities (max 15): 15 without a requirement or on a match, 5 otherwise.

use serde::Serialize;

use crate::models::profile::StudentProfile;
use crate::models::scholarship::ScholarshipRecord;

pub const GPA_MAX: f64 = 40.0;
pub const INCOME_MAX: u32 = 20;
pub const COURSE_MAX: u32 = 25;
pub const ACTIVITIES_MAX: u32 = 15;
const ACTIVITIES_PARTIAL: u32 = 5;

const GPA_BASE: f64 = 30.0;
const GPA_EXCESS_SLOPE: f64 = 10.0;
const GPA_DEFICIT_SLOPE: f64 = 15.0;

const MAX_TOTAL: f64 = GPA_MAX + (INCOME_MAX + COURSE_MAX + ACTIVITIES_MAX) as f64;

/// Per-component points. Only the GPA component is fractional.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatchBreakdown {
    pub gpa: f64,
    pub income: u32,
    pub course: u32,
    pub activities: u32,
}

impl MatchBreakdown {
    pub fn total(&self) -> f64 {
        self.gpa + (self.income + self.course + self.activities) as f64
    }

    /// Percentage of the maximum, rounded half away from zero.
    pub fn score(&self) -> u32 {
        ((self.total() / MAX_TOTAL) * 100.0).round() as u32
    }
}

pub fn breakdown(profile: &StudentProfile, scholarship: &ScholarshipRecord) -> MatchBreakdown {
    let req = &scholarship.requirements;

    let gpa = if profile.gpa >= req.min_gpa {
        let excess = profile.gpa - req.min_gpa;
        GPA_MAX.min(GPA_BASE + excess * GPA_EXCESS_SLOPE)
    } else {
        let deficit = req.min_gpa - profile.gpa;
        (GPA_BASE - deficit * GPA_DEFICIT_SLOPE).max(0.0)
    };

    let income = if req.accepts_income(profile.income) {
        INCOME_MAX
    } else {
        0
    };

    let course = if req.courses.accepts(&profile.course) {
        COURSE_MAX
    } else {
        0
    };

    let activities = if req.accepts_activities(&profile.activities) {
        ACTIVITIES_MAX
    } else {
        ACTIVITIES_PARTIAL
    };

    MatchBreakdown {
        gpa,
        income,
        course,
        activities,
    }
}

pub fn match_score(profile: &StudentProfile, scholarship: &ScholarshipRecord) -> u32 {
    breakdown(profile, scholarship).score()
}

/// Colour-coded match label shown next to a scholarship name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchBadge {
    Excellent,
    Good,
    Low,
}

impl MatchBadge {
    /// Bands are inclusive at their lower bound.
    pub fn for_score(score: u32) -> Self {
        if score >= 80 {
            MatchBadge::Excellent
        } else if score >= 60 {
            MatchBadge::Good
        } else {
            MatchBadge::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MatchBadge::Excellent => "Excellent Match",
            MatchBadge::Good => "Good Match",
            MatchBadge::Low => "Low Match",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            MatchBadge::Excellent => "high",
            MatchBadge::Good => "medium",
            MatchBadge::Low => "low",
        }
    }
}
