/// Recommendation client: the only code that talks to the external
/// text-generation endpoint.
///
/// The endpoint is an opaque collaborator: it receives `{ "question": prompt }`
/// and answers `{ "text": ... }` where the text may embed a JSON array of
/// recommendations. Exactly one attempt is made per call. Callers fall back to
/// local evaluation on any `RecommendError`.
use std::time::Duration;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::models::profile::StudentProfile;

pub mod prompts;

#[derive(Debug, Error)]
pub enum RecommendError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Recommendation endpoint returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Response has no text field")]
    MissingText,

    #[error("No JSON array found in response text")]
    NoArray,
}

#[derive(Debug, Serialize)]
struct PredictionRequest<'a> {
    question: &'a str,
}

#[derive(Debug, Deserialize)]
struct PredictionResponse {
    text: Option<String>,
}

/// A single scholarship as described by the remote endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteRecommendation {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_eligible: bool,
    #[serde(default)]
    pub reasons: Vec<String>,
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub deadline: String,
}

/// Source of remote recommendations. Carried in `AppState` as `Arc<dyn Recommender>`.
#[async_trait]
pub trait Recommender: Send + Sync {
    async fn recommend(
        &self,
        profile: &StudentProfile,
    ) -> Result<Vec<RemoteRecommendation>, RecommendError>;
}

#[derive(Clone)]
pub struct RecommendationClient {
    client: Client,
    endpoint: String,
}

impl RecommendationClient {
    pub fn new(endpoint: String, timeout: Duration) -> Result<Self, RecommendError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Recommender for RecommendationClient {
    async fn recommend(
        &self,
        profile: &StudentProfile,
    ) -> Result<Vec<RemoteRecommendation>, RecommendError> {
        let prompt = prompts::build_recommend_prompt(profile);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&PredictionRequest { question: &prompt })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(RecommendError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let prediction: PredictionResponse = serde_json::from_str(&body)?;
        let text = prediction.text.ok_or(RecommendError::MissingText)?;

        let recommendations = extract_recommendations(&text)?;
        debug!(
            "Recommendation endpoint returned {} entries",
            recommendations.len()
        );
        Ok(recommendations)
    }
}

/// Greedy match from the first `[` to the last `]`, spanning newlines.
static ARRAY_LITERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\[.*\]").expect("array literal pattern is valid"));

/// Pulls the embedded JSON array out of free-form model text and parses it.
pub fn extract_recommendations(text: &str) -> Result<Vec<RemoteRecommendation>, RecommendError> {
    let literal = ARRAY_LITERAL
        .find(text)
        .ok_or(RecommendError::NoArray)?
        .as_str();
    Ok(serde_json::from_str(literal)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::IncomeBracket;
    use axum::{http::StatusCode, routing::post, Json, Router};
    use serde_json::{json, Value};

    fn sample_profile() -> StudentProfile {
        StudentProfile {
            gpa: 3.6,
            income: IncomeBracket::Medium,
            course: "Computer Science".to_string(),
            activities: String::new(),
        }
    }

    /// Serves `router` on an ephemeral local port and returns its base URL.
    async fn spawn_stub(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}/prediction")
    }

    fn client(endpoint: String) -> RecommendationClient {
        RecommendationClient::new(endpoint, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_extract_array_surrounded_by_prose() {
        let text = "Here are your matches:\n[\n  {\"name\": \"STEM Grant\", \"isEligible\": true, \
                    \"reasons\": [\"GPA ok\"], \"amount\": \"$7,500\", \"deadline\": \"2026-02-28\"}\n]\nGood luck!";
        let recs = extract_recommendations(text).unwrap();
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].name, "STEM Grant");
        assert!(recs[0].is_eligible);
        assert_eq!(recs[0].reasons, vec!["GPA ok".to_string()]);
        assert_eq!(recs[0].description, "");
    }

    #[test]
    fn test_extract_without_array_fails() {
        assert!(matches!(
            extract_recommendations("Sorry, I cannot help with that."),
            Err(RecommendError::NoArray)
        ));
    }

    #[test]
    fn test_extract_malformed_array_fails() {
        assert!(matches!(
            extract_recommendations("[ {\"name\": } ]"),
            Err(RecommendError::Parse(_))
        ));
    }

    #[test]
    fn test_extract_spans_first_to_last_bracket() {
        // Two arrays with prose between them do not form one literal.
        let text = "[{\"name\": \"A\"}] and also [{\"name\": \"B\"}]";
        assert!(extract_recommendations(text).is_err());
    }

    #[tokio::test]
    async fn test_recommend_posts_question_and_parses_text() {
        let router = Router::new().route(
            "/prediction",
            post(|Json(body): Json<Value>| async move {
                let question = body["question"].as_str().unwrap_or_default();
                assert!(question.contains("Field of Study: Computer Science"));
                Json(json!({
                    "text": "```json\n[{\"name\": \"Merit Excellence Scholarship\", \"isEligible\": true}]\n```"
                }))
            }),
        );
        let endpoint = spawn_stub(router).await;

        let recs = client(endpoint).recommend(&sample_profile()).await.unwrap();
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].name, "Merit Excellence Scholarship");
    }

    #[tokio::test]
    async fn test_recommend_non_success_status_is_error() {
        let router = Router::new().route(
            "/prediction",
            post(|| async { (StatusCode::BAD_GATEWAY, "upstream down") }),
        );
        let endpoint = spawn_stub(router).await;

        let err = client(endpoint).recommend(&sample_profile()).await.unwrap_err();
        assert!(matches!(err, RecommendError::Status { status: 502, .. }));
    }

    #[tokio::test]
    async fn test_recommend_non_json_body_is_parse_error() {
        let router = Router::new().route("/prediction", post(|| async { "<html>oops</html>" }));
        let endpoint = spawn_stub(router).await;

        let err = client(endpoint).recommend(&sample_profile()).await.unwrap_err();
        assert!(matches!(err, RecommendError::Parse(_)));
    }

    #[tokio::test]
    async fn test_recommend_missing_text_field() {
        let router = Router::new().route(
            "/prediction",
            post(|| async { Json(json!({ "answer": "[]" })) }),
        );
        let endpoint = spawn_stub(router).await;

        let err = client(endpoint).recommend(&sample_profile()).await.unwrap_err();
        assert!(matches!(err, RecommendError::MissingText));
    }

    #[tokio::test]
    async fn test_recommend_unreachable_endpoint_is_http_error() {
        // Bind then drop to get a port with nothing listening.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client(format!("http://{addr}/prediction"))
            .recommend(&sample_profile())
            .await
            .unwrap_err();
        assert!(matches!(err, RecommendError::Http(_)));
    }
}
