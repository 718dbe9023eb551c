//! Profile form validation. Every field is checked and all errors are returned
//! together so the caller can show them inline per field.

use serde::{de::IgnoredAny, Deserialize, Deserializer, Serialize};

use crate::models::profile::{IncomeBracket, StudentProfile};

pub const GPA_MIN: f64 = 0.0;
pub const GPA_MAX: f64 = 4.0;
pub const COURSE_MIN_CHARS: usize = 2;

/// Raw form input as submitted. Everything is optional until validated.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileForm {
    #[serde(default, deserialize_with = "lenient_gpa")]
    pub gpa: Option<f64>,
    pub income: Option<String>,
    pub course: Option<String>,
    pub activities: Option<String>,
}

/// GPA as it arrives from a form: a JSON number or the text typed in the box.
#[derive(Deserialize)]
#[serde(untagged)]
enum GpaInput {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

/// Text that does not parse as a number, and any other JSON type, counts as
/// no GPA at all and is reported as missing.
fn lenient_gpa<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<GpaInput>::deserialize(deserializer)? {
        Some(GpaInput::Number(value)) => Some(value),
        Some(GpaInput::Text(text)) => text.trim().parse::<f64>().ok(),
        Some(GpaInput::Other(_)) | None => None,
    })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
        }
    }
}

// 0.0 is a valid GPA here; only an absent value is "required".
pub fn validate_gpa(gpa: Option<f64>) -> Result<f64, FieldError> {
    match gpa {
        None => Err(FieldError::new("gpa", "GPA is required")),
        Some(value) if !value.is_finite() || !(GPA_MIN..=GPA_MAX).contains(&value) => Err(
            FieldError::new("gpa", "GPA must be between 0.0 and 4.0"),
        ),
        Some(value) => Ok(value),
    }
}

pub fn validate_income(income: Option<&str>) -> Result<IncomeBracket, FieldError> {
    income
        .map(str::trim)
        .and_then(IncomeBracket::parse)
        .ok_or_else(|| FieldError::new("income", "Please select an income range"))
}

/// Returns the trimmed course on success.
pub fn validate_course(course: Option<&str>) -> Result<String, FieldError> {
    let course = course.map(str::trim).unwrap_or_default();
    if course.is_empty() {
        return Err(FieldError::new("course", "Please enter your field of study"));
    }
    if course.chars().count() < COURSE_MIN_CHARS {
        return Err(FieldError::new(
            "course",
            "Field of study must be at least 2 characters",
        ));
    }
    Ok(course.to_string())
}

/// Validates the whole form into a `StudentProfile`. Course and activities
/// are stored trimmed.
pub fn validate_profile(form: &ProfileForm) -> Result<StudentProfile, Vec<FieldError>> {
    let gpa = validate_gpa(form.gpa);
    let income = validate_income(form.income.as_deref());
    let course = validate_course(form.course.as_deref());

    match (gpa, income, course) {
        (Ok(gpa), Ok(income), Ok(course)) => Ok(StudentProfile {
            gpa,
            income,
            course,
            activities: form
                .activities
                .as_deref()
                .map(str::trim)
                .unwrap_or_default()
                .to_string(),
        }),
        (gpa, income, course) => Err([gpa.err(), income.err(), course.err()]
            .into_iter()
            .flatten()
            .collect()),
    }
}
