use serde::Serialize;

use crate::models::profile::IncomeBracket;

/// Accepted fields of study. `All` is the "open to every field" sentinel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "keywords")]
pub enum CourseRequirement {
    All,
    Keywords(Vec<String>),
}

impl CourseRequirement {
    pub fn accepts(&self, course: &str) -> bool {
        match self {
            CourseRequirement::All => true,
            CourseRequirement::Keywords(keywords) => contains_any(course, keywords),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Requirements {
    pub min_gpa: f64,
    pub income: Vec<IncomeBracket>,
    pub courses: CourseRequirement,
    /// Empty means no activity restriction.
    pub activities: Vec<String>,
}

impl Requirements {
    pub fn accepts_income(&self, income: IncomeBracket) -> bool {
        self.income.contains(&income)
    }

    pub fn has_activity_requirement(&self) -> bool {
        !self.activities.is_empty()
    }

    /// True when there is no requirement or any keyword appears in `activities`.
    pub fn accepts_activities(&self, activities: &str) -> bool {
        !self.has_activity_requirement() || contains_any(activities, &self.activities)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScholarshipRecord {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub requirements: Requirements,
    pub amount: String,
    /// ISO date, `YYYY-MM-DD`.
    pub deadline: String,
}

/// Case-insensitive substring match of any keyword against `text`.
fn contains_any(text: &str, keywords: &[String]) -> bool {
    let text = text.to_lowercase();
    keywords
        .iter()
        .any(|keyword| text.contains(&keyword.to_lowercase()))
}
