// Prompt for the external recommendation endpoint. The endpoint is a hosted
// text-generation flow; it only sees the `question` string.

use crate::models::profile::StudentProfile;

/// Recommendation prompt template. `build_recommend_prompt` fills the `{...}` placeholders.
pub const RECOMMEND_PROMPT_TEMPLATE: &str = r#"
Student Profile:
- GPA: {gpa}
- Household Income: {income}
- Field of Study: {course}
- Activities: {activities}

Based on this student profile, please:
1. Identify scholarships they qualify for
2. Explain requirements in simple, clear English
3. List reasons why they qualify or don't qualify
4. Include scholarship amounts and deadlines if available

Please format the response as a JSON array with this structure:
[
  {
    "name": "Scholarship Name",
    "description": "Brief description",
    "isEligible": true/false,
    "reasons": ["reason 1", "reason 2"],
    "amount": "$X,XXX",
    "deadline": "YYYY-MM-DD"
  }
]
"#;

const NO_ACTIVITIES: &str = "None specified";

pub fn build_recommend_prompt(profile: &StudentProfile) -> String {
    let activities = if profile.activities.trim().is_empty() {
        NO_ACTIVITIES
    } else {
        profile.activities.as_str()
    };

    let gpa = profile.gpa.to_string();
    render(
        RECOMMEND_PROMPT_TEMPLATE,
        &[
            ("gpa", gpa.as_str()),
            ("income", profile.income.as_str()),
            ("course", profile.course.as_str()),
            ("activities", activities),
        ],
    )
}

/// Fills `{name}` placeholders in one left-to-right pass. Substituted values
/// are never rescanned, so user text containing braces is copied verbatim.
/// Braces that do not name a known field are kept as-is.
fn render(template: &str, fields: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after_brace = &rest[start + 1..];
        let placeholder = fields.iter().find_map(|(name, value)| {
            after_brace
                .strip_prefix(*name)?
                .strip_prefix('}')
                .map(|after| (*value, after))
        });
        match placeholder {
            Some((value, after)) => {
                out.push_str(value);
                rest = after;
            }
            None => {
                out.push('{');
                rest = after_brace;
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::IncomeBracket;

    #[test]
    fn test_prompt_embeds_profile_fields() {
        let profile = StudentProfile {
            gpa: 3.6,
            income: IncomeBracket::Medium,
            course: "Computer Science".to_string(),
            activities: "debate club".to_string(),
        };
        let prompt = build_recommend_prompt(&profile);
        assert!(prompt.contains("- GPA: 3.6"));
        assert!(prompt.contains("- Household Income: medium"));
        assert!(prompt.contains("- Field of Study: Computer Science"));
        assert!(prompt.contains("- Activities: debate club"));
        assert!(prompt.contains("\"isEligible\""));
    }

    #[test]
    fn test_prompt_marks_missing_activities() {
        let profile = StudentProfile {
            gpa: 2.0,
            income: IncomeBracket::Low,
            course: "Art".to_string(),
            activities: String::new(),
        };
        assert!(build_recommend_prompt(&profile).contains("- Activities: None specified"));
    }

    #[test]
    fn test_placeholder_text_in_user_fields_is_not_expanded() {
        let profile = StudentProfile {
            gpa: 3.1,
            income: IncomeBracket::High,
            course: "Notation {activities}".to_string(),
            activities: "chess {gpa}".to_string(),
        };
        let prompt = build_recommend_prompt(&profile);
        assert!(prompt.contains("- Field of Study: Notation {activities}\n"));
        assert!(prompt.contains("- Activities: chess {gpa}\n"));
        assert!(prompt.contains("- GPA: 3.1\n"));
    }

    #[test]
    fn test_render_keeps_unknown_braces() {
        let rendered = render("[\n  {\n    \"name\": {x}\n  }\n] {y}", &[("y", "Y")]);
        assert_eq!(rendered, "[\n  {\n    \"name\": {x}\n  }\n] Y");
    }
}
