//! Eligibility: the hard boolean gate of a profile against a scholarship.
//!
//! Every criterion is checked and produces exactly one reason, even after an
//! earlier failure. A failed criterion can flip `is_eligible` to false but
//! nothing flips it back.

use serde::Serialize;

use crate::matching::catalog::Catalog;
use crate::models::profile::StudentProfile;
use crate::models::scholarship::{CourseRequirement, ScholarshipRecord};

#[derive(Debug, Clone, Serialize)]
pub struct EligibilityResult<'a> {
    pub scholarship: &'a ScholarshipRecord,
    pub is_eligible: bool,
    /// One entry per criterion: GPA, income, course, then activities when required.
    pub reasons: Vec<String>,
}

pub fn evaluate<'a>(
    profile: &StudentProfile,
    scholarship: &'a ScholarshipRecord,
) -> EligibilityResult<'a> {
    let req = &scholarship.requirements;
    let mut reasons = Vec::with_capacity(4);
    let mut is_eligible = true;

    if profile.gpa < req.min_gpa {
        is_eligible = false;
        reasons.push(format!(
            "GPA must be at least {} (you have {})",
            req.min_gpa, profile.gpa
        ));
    } else {
        reasons.push(format!(
            "✓ Your GPA of {} meets the requirement",
            profile.gpa
        ));
    }

    if req.accepts_income(profile.income) {
        reasons.push("✓ Income level matches requirements".to_string());
    } else {
        is_eligible = false;
        reasons.push("Income level does not match requirements".to_string());
    }

    match &req.courses {
        CourseRequirement::All => reasons.push("✓ Open to all fields of study".to_string()),
        CourseRequirement::Keywords(keywords) => {
            if req.courses.accepts(&profile.course) {
                reasons.push("✓ Your field of study matches requirements".to_string());
            } else {
                is_eligible = false;
                reasons.push(format!(
                    "Field of study must be one of: {}",
                    keywords.join(", ")
                ));
            }
        }
    }

    if req.has_activity_requirement() {
        if req.accepts_activities(&profile.activities) {
            reasons.push("✓ Your activities match requirements".to_string());
        } else {
            is_eligible = false;
            reasons.push(format!(
                "Activities must include: {}",
                req.activities.join(", ")
            ));
        }
    }

    EligibilityResult {
        scholarship,
        is_eligible,
        reasons,
    }
}

/// Evaluates the profile against every catalog entry, preserving catalog order.
pub fn find_all<'a>(profile: &StudentProfile, catalog: &'a Catalog) -> Vec<EligibilityResult<'a>> {
    catalog
        .scholarships()
        .iter()
        .map(|scholarship| evaluate(profile, scholarship))
        .collect()
}
