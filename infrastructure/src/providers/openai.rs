//! OpenAI-compatible chat completions gateway
//!
//! Works with any provider exposing `POST /v1/chat/completions`
//! (OpenAI, Groq, Mistral, local servers such as Ollama or vLLM).

use async_trait::async_trait;
use flows_application::{GatewayError, ModelGateway, ModelReply};
use flows_domain::ModelParameters;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::{Map, Value, json};
use std::time::Duration;
use tracing::debug;

/// Gateway speaking the OpenAI chat completions protocol.
///
/// Each `generate` call sends the prompt as a single user message. Model
/// parameters are merged into the request body, so `temperature`,
/// `max_tokens` or even `model` can be set per flow.
#[derive(Clone)]
pub struct OpenAiCompatibleGateway {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
}

impl OpenAiCompatibleGateway {
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::Other(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
            model: model.into(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url)
    }

    /// Build the JSON request body.
    ///
    /// Parameters may override `model`; `messages` is always the prompt.
    fn request_body(&self, prompt: &str, parameters: &ModelParameters) -> Value {
        let mut body = Map::new();
        body.insert("model".to_string(), Value::from(self.model.as_str()));
        for (key, value) in parameters {
            body.insert(key.clone(), value.clone());
        }
        body.insert(
            "messages".to_string(),
            json!([{ "role": "user", "content": prompt }]),
        );
        Value::Object(body)
    }

    fn status_error(status: StatusCode, body: String) -> GatewayError {
        let detail = format!("{}: {}", status, body);
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                GatewayError::AuthenticationFailed(detail)
            }
            StatusCode::NOT_FOUND => GatewayError::ModelNotAvailable(detail),
            StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => GatewayError::Timeout,
            _ => GatewayError::RequestFailed(detail),
        }
    }

    fn transport_error(error: reqwest::Error) -> GatewayError {
        if error.is_timeout() {
            GatewayError::Timeout
        } else if error.is_connect() {
            GatewayError::ConnectionError(error.to_string())
        } else {
            GatewayError::RequestFailed(error.to_string())
        }
    }

    fn into_reply(response: ChatResponse) -> Result<ModelReply, GatewayError> {
        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| GatewayError::InvalidResponse("response has no choices".to_string()))?;

        let text = choice.message.content.ok_or_else(|| {
            GatewayError::InvalidResponse("first choice has no text content".to_string())
        })?;

        let mut reply = ModelReply::new(text).with_metadata("model", response.model);
        if let Some(reason) = choice.finish_reason {
            reply = reply.with_metadata("finish_reason", reason);
        }
        if let Some(usage) = response.usage {
            reply = reply.with_metadata("usage", usage);
        }
        Ok(reply)
    }
}

#[async_trait]
impl ModelGateway for OpenAiCompatibleGateway {
    async fn generate(
        &self,
        prompt: &str,
        parameters: &ModelParameters,
    ) -> Result<ModelReply, GatewayError> {
        let body = self.request_body(prompt, parameters);
        debug!("POST {} ({} prompt chars)", self.endpoint(), prompt.len());

        let mut request = self.client.post(self.endpoint()).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await.map_err(Self::transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(Self::status_error(status, error_body));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        Self::into_reply(parsed)
    }
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    model: String,
    choices: Vec<ChatChoice>,
    #[serde(default)]
    usage: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}
