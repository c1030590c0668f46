//! Offline gateway that answers with the prompt it was given.

use async_trait::async_trait;
use flows_application::{GatewayError, ModelGateway, ModelReply};
use flows_domain::ModelParameters;
use tracing::debug;

/// Returns every prompt unchanged as the model reply.
///
/// Used for `--dry-run`, where the rendered stage prompts are the
/// interesting output and no provider should be contacted.
#[derive(Debug, Clone, Default)]
pub struct EchoGateway;

impl EchoGateway {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ModelGateway for EchoGateway {
    async fn generate(
        &self,
        prompt: &str,
        parameters: &ModelParameters,
    ) -> Result<ModelReply, GatewayError> {
        debug!("Echo gateway: {} chars, {} parameters", prompt.len(), parameters.len());
        Ok(ModelReply::new(prompt).with_metadata("model", "echo"))
    }
}
