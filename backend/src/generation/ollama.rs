//! Ollama-backed plan generator

use super::{build_prompt, GenerationError, PlanGenerator};
use crate::config::AiConfig;
use async_trait::async_trait;
use fitquest_shared::models::{GeneratedPlan, UserProfile};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

/// Request body for Ollama's generate endpoint
#[derive(Serialize)]
struct OllamaRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    format: &'a str,
}

/// The slice of Ollama's response we care about
#[derive(Deserialize)]
struct OllamaResponse {
    response: String,
}

/// Plan generator talking to an Ollama server's `/api/generate` endpoint
pub struct OllamaPlanGenerator {
    http: reqwest::Client,
    base_url: String,
    model: String,
}

impl OllamaPlanGenerator {
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, GenerationError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            http,
            base_url,
            model: model.into(),
        })
    }

    pub fn from_config(config: &AiConfig) -> Result<Self, GenerationError> {
        Self::new(
            &config.base_url,
            &config.model,
            Duration::from_secs(config.request_timeout_secs),
        )
    }
}

#[async_trait]
impl PlanGenerator for OllamaPlanGenerator {
    async fn generate(&self, profile: &UserProfile) -> Result<GeneratedPlan, GenerationError> {
        let prompt = build_prompt(profile);
        let url = format!("{}/api/generate", self.base_url);
        debug!(model = %self.model, "Requesting plan from Ollama");

        let response = self
            .http
            .post(&url)
            .json(&OllamaRequest {
                model: &self.model,
                prompt: &prompt,
                stream: false,
                format: "json",
            })
            .send()
            .await?
            .error_for_status()?;

        let body: OllamaResponse = response.json().await?;
        let plan = parse_plan(&body.response)?;
        info!(model = %self.model, "Plan generated");
        Ok(plan)
    }
}

/// Parse model output into a validated plan.
///
/// Models occasionally wrap the JSON in a markdown fence or chat filler even
/// when told not to, so extraction tolerates both.
fn parse_plan(text: &str) -> Result<GeneratedPlan, GenerationError> {
    let json = extract_json_object(text)?;
    let plan: GeneratedPlan = serde_json::from_str(json)
        .map_err(|err| GenerationError::Malformed(format!("invalid plan JSON: {err}")))?;
    plan.validate()?;
    Ok(plan)
}

/// Find the JSON object in the output, preferring a fenced code block
fn extract_json_object(text: &str) -> Result<&str, GenerationError> {
    let region = fenced_block(text).unwrap_or(text);
    match (region.find('{'), region.rfind('}')) {
        (Some(start), Some(end)) if end > start => Ok(&region[start..=end]),
        _ => Err(GenerationError::Malformed(
            "no JSON object found in model output".to_string(),
        )),
    }
}

/// Content of the first markdown code fence, if any
fn fenced_block(text: &str) -> Option<&str> {
    let start = text.find("```")?;
    let after = &text[start + 3..];
    // Skip the language identifier line
    let body_start = after.find('\n').map(|i| i + 1).unwrap_or(0);
    let body = &after[body_start..];
    let end = body.find("```")?;
    Some(&body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitquest_shared::models::{
        ActivityLevel, DayMeals, FitnessGoal, Gender, PlanSchemaError, Weekday,
    };
    use serde_json::json;
    use std::collections::BTreeMap;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn profile() -> UserProfile {
        UserProfile {
            age: 30,
            gender: Gender::Male,
            weight_kg: 82.0,
            height_cm: 184.0,
            activity_level: ActivityLevel::LightlyActive,
            fitness_goal: FitnessGoal::WeightLoss,
            timeframe_weeks: 12,
            target_language: "English".to_string(),
            water_intake_l: 2.0,
            preferred_foods: None,
        }
    }

    fn valid_plan() -> GeneratedPlan {
        let mut workout_plan = BTreeMap::new();
        let mut diet_plan = BTreeMap::new();
        for day in Weekday::ALL {
            workout_plan.insert(day, vec!["Burpees (3x15)".to_string()]);
            diet_plan.insert(day, DayMeals::default());
        }
        workout_plan.insert(Weekday::Sunday, vec![]);
        GeneratedPlan {
            summary: "A strong first week".to_string(),
            workout_plan,
            diet_plan,
            recommended_water_l: 3.5,
        }
    }

    fn plan_json() -> String {
        serde_json::to_string(&valid_plan()).unwrap()
    }

    fn generator_for(server: &MockServer) -> OllamaPlanGenerator {
        OllamaPlanGenerator::new(server.uri(), "llama3.2", Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_generates_and_validates_plan() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .and(body_partial_json(
                json!({"model": "llama3.2", "stream": false, "format": "json"}),
            ))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"response": plan_json()})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let generator = generator_for(&server);
        let plan = generator.generate(&profile()).await.unwrap();
        assert_eq!(plan.recommended_water_l, 3.5);
        assert!(plan.is_rest_day(Weekday::Sunday));
    }

    #[tokio::test]
    async fn test_accepts_fenced_model_output() {
        let server = MockServer::start().await;
        let fenced = format!("Here you go:\n```json\n{}\n```\nEnjoy!", plan_json());
        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": fenced})))
            .mount(&server)
            .await;

        let generator = generator_for(&server);
        assert!(generator.generate(&profile()).await.is_ok());
    }

    #[tokio::test]
    async fn test_rejects_plan_missing_a_day() {
        let server = MockServer::start().await;
        let mut plan = valid_plan();
        plan.workout_plan.remove(&Weekday::Thursday);
        let body = serde_json::to_string(&plan).unwrap();
        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": body})))
            .mount(&server)
            .await;

        let generator = generator_for(&server);
        let err = generator.generate(&profile()).await.unwrap_err();
        assert!(matches!(
            err,
            GenerationError::InvalidPlan(PlanSchemaError::MissingWorkoutDay(Weekday::Thursday))
        ));
    }

    #[tokio::test]
    async fn test_server_error_maps_to_request_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let generator = generator_for(&server);
        let err = generator.generate(&profile()).await.unwrap_err();
        assert!(matches!(err, GenerationError::Request(_)));
    }

    #[test]
    fn test_parse_plan_raw_json() {
        assert!(parse_plan(&plan_json()).is_ok());
    }

    #[test]
    fn test_parse_plan_with_chatter() {
        let text = format!("Sure! Here is the plan: {} Hope it helps.", plan_json());
        assert!(parse_plan(&text).is_ok());
    }

    #[test]
    fn test_parse_plan_without_json_fails() {
        let err = parse_plan("I cannot produce a plan right now.").unwrap_err();
        assert!(matches!(err, GenerationError::Malformed(_)));
    }
}
