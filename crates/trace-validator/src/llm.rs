//! LLM-backed validation over an OpenAI-compatible chat completions API.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use trace_config::ValidatorConfig;
use trace_core::entities::{HarvestRecord, ValidationVerdict};

use crate::error::ValidatorError;
use crate::http::check_response;
use crate::prompt::{SYSTEM_PROMPT, VERDICT_SCHEMA_NAME, render_user_prompt};
use crate::schema::{parse_verdict, verdict_schema};

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: Vec<ChatMessage>,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
    json_schema: JsonSchemaFormat,
}

#[derive(Debug, Serialize)]
struct JsonSchemaFormat {
    name: &'static str,
    strict: bool,
    schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Validation service that asks a language model for a verdict.
///
/// One request per call, bounded by the configured timeout, never retried.
pub struct LlmValidator {
    http: reqwest::Client,
    completions_url: String,
    model: String,
    api_key: String,
    temperature: f32,
}

impl LlmValidator {
    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ValidatorError::NotConfigured`] when the section is missing
    /// or invalid, and [`ValidatorError::Http`] if the HTTP client fails to
    /// build.
    pub fn from_config(config: &ValidatorConfig) -> Result<Self, ValidatorError> {
        config
            .require()
            .map_err(|e| ValidatorError::NotConfigured(e.to_string()))?;

        let http = reqwest::Client::builder()
            .user_agent(concat!("harvest-trace/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            completions_url: completions_url(&config.endpoint),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
            temperature: config.temperature,
        })
    }

    /// Model name requests are sent with.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    pub(crate) async fn request_verdict(
        &self,
        record: &HarvestRecord,
    ) -> Result<ValidationVerdict, ValidatorError> {
        let body = build_request(&self.model, self.temperature, record)?;

        tracing::debug!(model = %self.model, url = %self.completions_url, "requesting verdict");
        let resp = self
            .http
            .post(&self.completions_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;
        let resp = check_response(resp).await?;

        let data: ChatResponse = resp.json().await?;
        let content = first_content(data)?;
        let verdict = parse_verdict(&content)?;
        tracing::debug!(
            is_valid = verdict.is_valid,
            errors = verdict.validation_errors.len(),
            "verdict received"
        );
        Ok(verdict)
    }
}

fn completions_url(endpoint: &str) -> String {
    format!("{}/chat/completions", endpoint.trim_end_matches('/'))
}

fn build_request<'a>(
    model: &'a str,
    temperature: f32,
    record: &HarvestRecord,
) -> Result<ChatRequest<'a>, ValidatorError> {
    Ok(ChatRequest {
        model,
        temperature,
        messages: vec![
            ChatMessage {
                role: "system",
                content: SYSTEM_PROMPT.to_string(),
            },
            ChatMessage {
                role: "user",
                content: render_user_prompt(record),
            },
        ],
        response_format: ResponseFormat {
            kind: "json_schema",
            json_schema: JsonSchemaFormat {
                name: VERDICT_SCHEMA_NAME,
                strict: false,
                schema: verdict_schema()?,
            },
        },
    })
}

fn first_content(data: ChatResponse) -> Result<String, ValidatorError> {
    data.choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.trim().is_empty())
        .ok_or_else(|| ValidatorError::Parse("model reply has no content".into()))
}
