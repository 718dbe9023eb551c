use serde::{Deserialize, Serialize};

/// Household income bracket selected on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncomeBracket {
    Low,
    Medium,
    High,
}

impl IncomeBracket {
    pub const ALL: [IncomeBracket; 3] = [Self::Low, Self::Medium, Self::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            IncomeBracket::Low => "low",
            IncomeBracket::Medium => "medium",
            IncomeBracket::High => "high",
        }
    }

    /// Parses a form value. Matching is exact on the lower-case wire names.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.as_str() == value)
    }
}

/// A validated student profile. This is also the persisted shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub gpa: f64,
    pub income: IncomeBracket,
    pub course: String,
    #[serde(default)]
    pub activities: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_income_parse_accepts_wire_names() {
        assert_eq!(IncomeBracket::parse("low"), Some(IncomeBracket::Low));
        assert_eq!(IncomeBracket::parse("medium"), Some(IncomeBracket::Medium));
        assert_eq!(IncomeBracket::parse("high"), Some(IncomeBracket::High));
    }

    #[test]
    fn test_income_parse_rejects_unknown() {
        assert_eq!(IncomeBracket::parse(""), None);
        assert_eq!(IncomeBracket::parse("very-high"), None);
    }

    #[test]
    fn test_profile_serializes_with_lowercase_income() {
        let profile = StudentProfile {
            gpa: 3.6,
            income: IncomeBracket::Medium,
            course: "Computer Science".to_string(),
            activities: "debate club".to_string(),
        };
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["income"], "medium");
        assert_eq!(json["gpa"], 3.6);
    }

    #[test]
    fn test_profile_activities_default_to_empty() {
        let json = r#"{"gpa": 3.0, "income": "low", "course": "Biology"}"#;
        let profile: StudentProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.activities, "");
    }
}
