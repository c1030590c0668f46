//! Test doubles shared by processor and dispatcher tests.

use crate::ports::model_gateway::{GatewayError, ModelGateway, ModelReply};
use async_trait::async_trait;
use flows_domain::ModelParameters;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Gateway returning scripted replies in order and recording every call.
pub struct ScriptedGateway {
    replies: Mutex<VecDeque<Result<String, GatewayError>>>,
    calls: Mutex<Vec<(String, ModelParameters)>>,
}

impl ScriptedGateway {
    pub fn new(replies: Vec<&str>) -> Self {
        Self::with_results(replies.into_iter().map(|r| Ok(r.to_string())).collect())
    }

    pub fn with_results(replies: Vec<Result<String, GatewayError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Prompts received so far, in call order
    pub fn prompts(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(p, _)| p.clone())
            .collect()
    }

    /// Parameters received so far, in call order
    pub fn parameters(&self) -> Vec<ModelParameters> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(_, p)| p.clone())
            .collect()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ModelGateway for ScriptedGateway {
    async fn generate(
        &self,
        prompt: &str,
        parameters: &ModelParameters,
    ) -> Result<ModelReply, GatewayError> {
        self.calls
            .lock()
            .unwrap()
            .push((prompt.to_string(), parameters.clone()));

        let next = self.replies.lock().unwrap().pop_front();
        match next {
            Some(Ok(text)) => Ok(ModelReply::new(text).with_metadata("model", "scripted")),
            Some(Err(e)) => Err(e),
            None => Err(GatewayError::Other("no scripted reply left".to_string())),
        }
    }
}
