//! The built-in scholarship catalog. Constructed once at startup and shared
//! read-only through `AppState`.

use crate::models::profile::IncomeBracket::{self, High, Low, Medium};
use crate::models::scholarship::{CourseRequirement, Requirements, ScholarshipRecord};

#[derive(Debug, Clone)]
pub struct Catalog {
    scholarships: Vec<ScholarshipRecord>,
}

impl Catalog {
    pub fn new(scholarships: Vec<ScholarshipRecord>) -> Self {
        Self { scholarships }
    }

    /// The six scholarships offered by the finder, in display order.
    pub fn builtin() -> Self {
        Self::new(vec![
            record(
                1,
                "Merit Excellence Scholarship",
                "For high-achieving students with outstanding academic performance",
                3.5,
                &[Low, Medium, High],
                None,
                &[],
                "$5,000",
                "2026-03-15",
            ),
            record(
                2,
                "Community Service Award",
                "For students dedicated to community service and volunteering",
                2.5,
                &[Low, Medium],
                None,
                &["community service", "volunteering", "volunteer"],
                "$3,000",
                "2026-04-01",
            ),
            record(
                3,
                "STEM Future Leaders Grant",
                "Supporting students pursuing careers in Science, Technology, Engineering, or Math",
                3.0,
                &[Low, Medium, High],
                Some(&[
                    "computer science",
                    "engineering",
                    "mathematics",
                    "physics",
                    "chemistry",
                    "biology",
                    "technology",
                ]),
                &[],
                "$7,500",
                "2026-02-28",
            ),
            record(
                4,
                "First Generation College Student Scholarship",
                "For students who are the first in their family to attend college",
                2.0,
                &[Low, Medium],
                None,
                &[],
                "$4,000",
                "2026-05-15",
            ),
            record(
                5,
                "Athletic Achievement Scholarship",
                "For student-athletes who excel in sports and academics",
                2.8,
                &[Low, Medium, High],
                None,
                &[
                    "basketball",
                    "football",
                    "soccer",
                    "track",
                    "swimming",
                    "sports",
                    "athletic",
                    "team",
                ],
                "$6,000",
                "2026-03-30",
            ),
            record(
                6,
                "Women in Business Scholarship",
                "Empowering women pursuing business and entrepreneurship",
                3.2,
                &[Low, Medium, High],
                Some(&[
                    "business",
                    "commerce",
                    "finance",
                    "accounting",
                    "entrepreneurship",
                    "marketing",
                ]),
                &[],
                "$5,500",
                "2026-04-20",
            ),
        ])
    }

    pub fn scholarships(&self) -> &[ScholarshipRecord] {
        &self.scholarships
    }

    pub fn get(&self, id: u32) -> Option<&ScholarshipRecord> {
        self.scholarships.iter().find(|s| s.id == id)
    }

    /// Case-insensitive lookup by display name, used to tie remote
    /// recommendations back to catalog entries.
    pub fn find_by_name(&self, name: &str) -> Option<&ScholarshipRecord> {
        let name = name.trim();
        self.scholarships
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
    }

    pub fn len(&self) -> usize {
        self.scholarships.len()
    }
}

#[allow(clippy::too_many_arguments)]
fn record(
    id: u32,
    name: &str,
    description: &str,
    min_gpa: f64,
    income: &[IncomeBracket],
    courses: Option<&[&str]>,
    activities: &[&str],
    amount: &str,
    deadline: &str,
) -> ScholarshipRecord {
    ScholarshipRecord {
        id,
        name: name.to_string(),
        description: description.to_string(),
        requirements: Requirements {
            min_gpa,
            income: income.to_vec(),
            courses: match courses {
                Some(keywords) => {
                    CourseRequirement::Keywords(keywords.iter().map(|k| k.to_string()).collect())
                }
                None => CourseRequirement::All,
            },
            activities: activities.iter().map(|a| a.to_string()).collect(),
        },
        amount: amount.to_string(),
        deadline: deadline.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_has_six_scholarships_in_order() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 6);
        let ids: Vec<u32> = catalog.scholarships().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_ids_are_unique() {
        let catalog = Catalog::builtin();
        let ids: HashSet<u32> = catalog.scholarships().iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_deadlines_are_iso_dates() {
        for s in Catalog::builtin().scholarships() {
            assert!(
                chrono::NaiveDate::parse_from_str(&s.deadline, "%Y-%m-%d").is_ok(),
                "bad deadline for {}: {}",
                s.name,
                s.deadline
            );
        }
    }

    #[test]
    fn test_stem_grant_requirements() {
        let catalog = Catalog::builtin();
        let stem = catalog.get(3).unwrap();
        assert_eq!(stem.name, "STEM Future Leaders Grant");
        assert_eq!(stem.requirements.min_gpa, 3.0);
        assert!(stem.requirements.courses.accepts("computer science"));
        assert!(!stem.requirements.has_activity_requirement());
    }

    #[test]
    fn test_find_by_name_ignores_case_and_padding() {
        let catalog = Catalog::builtin();
        let found = catalog.find_by_name("  community service AWARD ").unwrap();
        assert_eq!(found.id, 2);
        assert!(catalog.find_by_name("Unknown Grant").is_none());
    }
}
