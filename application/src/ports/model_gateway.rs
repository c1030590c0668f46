//! Model Gateway port
//!
//! Defines the interface for communicating with the language-model provider.

use async_trait::async_trait;
use flows_domain::ModelParameters;
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors that can occur during model gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// Text generated by the model plus provider metadata
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelReply {
    pub text: String,
    /// Provider-specific details (model id, finish reason, token usage)
    pub metadata: BTreeMap<String, Value>,
}

impl ModelReply {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            metadata: BTreeMap::new(),
        }
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

/// Gateway for model communication
///
/// This port defines how flow processors reach the LLM provider.
/// Implementations (adapters) live in the infrastructure layer. Retries,
/// timeouts and rate limiting belong to the adapter or the caller, never to
/// the processors.
#[async_trait]
pub trait ModelGateway: Send + Sync {
    /// Generate a completion for `prompt`.
    ///
    /// `parameters` are forwarded opaquely (e.g. `temperature`).
    async fn generate(
        &self,
        prompt: &str,
        parameters: &ModelParameters,
    ) -> Result<ModelReply, GatewayError>;
}
