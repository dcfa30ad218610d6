//! OpenAI-compatible chat completions client

use super::{CompletionClient, RawCompletion};
use crate::config::GeneratorConfig;
use crate::error::{CompletionError, Result};
use crate::prompt::Prompt;
use crate::request::Credential;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info, instrument};
use url::Url;

/// Chat completions client
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    config: GeneratorConfig,
    endpoint: Url,
    http: Client,
}

impl OpenAiClient {
    /// Create a client from a validated config
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        let endpoint = config.completions_url()?;
        let http = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(CompletionError::from)?;

        Ok(Self {
            config,
            endpoint,
            http,
        })
    }

    /// Config in use
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Chat-completions endpoint
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn map_transport(&self, err: reqwest::Error) -> CompletionError {
        if err.is_timeout() {
            CompletionError::Timeout(self.config.timeout_secs)
        } else {
            CompletionError::from(err)
        }
    }
}

impl CompletionClient for OpenAiClient {
    #[instrument(skip_all, fields(model = %self.config.model))]
    async fn complete(
        &self,
        credential: &Credential,
        prompt: &Prompt,
    ) -> std::result::Result<RawCompletion, CompletionError> {
        let start = Instant::now();
        let request = ChatCompletionRequest::new(&self.config, prompt);

        let response = self
            .http
            .post(self.endpoint.clone())
            .bearer_auth(credential.expose())
            .json(&request)
            .send()
            .await
            .map_err(|e| self.map_transport(e))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(status_error(status, message));
        }

        let body = response.text().await.map_err(|e| self.map_transport(e))?;
        let completion = parse_response(&body)?;

        info!(
            elapsed_ms = start.elapsed().as_millis() as u64,
            chars = completion.as_str().len(),
            "Completion received"
        );
        Ok(completion)
    }
}

fn status_error(status: StatusCode, message: String) -> CompletionError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => CompletionError::Unauthorized {
            status: status.as_u16(),
        },
        _ => CompletionError::Http {
            status: status.as_u16(),
            message,
        },
    }
}

/// Pull the first choice's text out of a response body
pub fn parse_response(body: &str) -> std::result::Result<RawCompletion, CompletionError> {
    let response: ChatCompletionResponse = serde_json::from_str(body)
        .map_err(|e| CompletionError::MalformedResponse(e.to_string()))?;

    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| CompletionError::MalformedResponse("no choices in response".to_string()))?;

    debug!(finish_reason = ?choice.finish_reason, "Parsed completion choice");

    match choice.message.content {
        Some(text) if !text.trim().is_empty() => Ok(RawCompletion::new(text)),
        _ => Err(CompletionError::MalformedResponse(
            "empty message content".to_string(),
        )),
    }
}

/// One chat message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// `system`, `user` or `assistant`
    pub role: String,
    /// Message text
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatMessage {
    fn new(role: &str, content: &str) -> Self {
        Self {
            role: role.to_string(),
            content: Some(content.to_string()),
        }
    }
}

/// Chat completion request body
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

impl ChatCompletionRequest {
    /// Body for a system + user prompt
    pub fn new(config: &GeneratorConfig, prompt: &Prompt) -> Self {
        Self {
            model: config.model.clone(),
            messages: vec![
                ChatMessage::new("system", &prompt.system),
                ChatMessage::new("user", &prompt.user),
            ],
            temperature: config.temperature,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChatMessage,
    #[serde(default)]
    finish_reason: Option<String>,
}
