//! Direct flow: the prompt goes to the model once, unchanged apart from
//! optional prior context.

use crate::flows::error::FlowError;
use crate::flows::processor::{FlowProcessor, require_text_overrides};
use crate::ports::model_gateway::ModelGateway;
use crate::ports::progress::FlowProgressNotifier;
use async_trait::async_trait;
use flows_domain::{
    ConfigurationError, DirectPromptTemplate, DomainError, FlowConfiguration, FlowResult,
    FlowType, Persona, ProcessingStep, PromptContext,
};
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::time::Instant;
use tracing::{info, warn};

const FLOW: FlowType = FlowType::Direct;

/// Processor for the single-call flow
pub struct DirectProcessor {
    gateway: Arc<dyn ModelGateway>,
}

impl DirectProcessor {
    pub fn new(gateway: Arc<dyn ModelGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl FlowProcessor for DirectProcessor {
    fn flow_type(&self) -> FlowType {
        FLOW
    }

    fn stage_count(&self) -> usize {
        1
    }

    fn validate_configuration(
        &self,
        configuration: &FlowConfiguration,
    ) -> Result<(), ConfigurationError> {
        require_text_overrides(configuration, &[DirectPromptTemplate::KEY])
    }

    async fn process_with_progress(
        &self,
        prompt: &str,
        configuration: &FlowConfiguration,
        context: &PromptContext,
        progress: &dyn FlowProgressNotifier,
    ) -> Result<FlowResult, FlowError> {
        if prompt.trim().is_empty() {
            return Err(DomainError::EmptyPrompt.into());
        }

        let started = Instant::now();
        let persona = Persona::Responder;
        let parameters = configuration.model_parameters(&[DirectPromptTemplate::KEY]);
        let template = configuration
            .text(DirectPromptTemplate::KEY)
            .unwrap_or(DirectPromptTemplate::default_template());
        let rendered = DirectPromptTemplate::render(template, prompt, &context.render());

        progress.on_flow_start(FLOW, 1);
        progress.on_step_start(FLOW, persona.step_name(), 1);

        let reply = match self.gateway.generate(&rendered, &parameters).await {
            Ok(reply) => {
                progress.on_step_complete(FLOW, persona.step_name(), 1, true);
                progress.on_flow_complete(FLOW, true);
                reply
            }
            Err(source) => {
                warn!("Direct call failed: {}", source);
                progress.on_step_complete(FLOW, persona.step_name(), 1, false);
                progress.on_flow_complete(FLOW, false);
                return Err(FlowError::ModelInvocation {
                    stage: persona,
                    source,
                });
            }
        };

        let processing_duration = started.elapsed();
        info!("Direct flow finished in {:?}", processing_duration);

        let text = reply.text;
        let step = ProcessingStep::new(FLOW, persona, 1, rendered.clone(), text.clone())
            .with_model_metadata(reply.metadata);

        Ok(FlowResult {
            flow_type: FLOW,
            original_prompt: prompt.to_string(),
            enhanced_prompt: rendered,
            full_response: text.clone(),
            final_response: text,
            steps: vec![step],
            processing_duration,
            response_changed: false,
            metrics: BTreeMap::from([
                ("strategy".to_string(), json!(FLOW.as_str())),
                ("persona_count".to_string(), json!(1)),
            ]),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flows::testing::ScriptedGateway;
    use flows_domain::ContextTurn;

    #[tokio::test]
    async fn test_single_step_passthrough() {
        let gateway = Arc::new(ScriptedGateway::new(vec!["Forty-two."]));
        let processor = DirectProcessor::new(gateway.clone());

        let result = processor
            .process(
                "What is the answer?",
                &FlowConfiguration::new().with("max_tokens", 64),
                &PromptContext::empty(),
            )
            .await
            .unwrap();

        assert_eq!(gateway.prompts(), vec!["What is the answer?".to_string()]);
        assert_eq!(gateway.parameters()[0]["max_tokens"], json!(64));
        assert_eq!(result.steps.len(), 1);
        assert_eq!(result.steps[0].persona, Persona::Responder);
        assert_eq!(result.final_response, "Forty-two.");
        assert_eq!(result.final_response, result.full_response);
        assert!(!result.response_changed);
        assert_eq!(result.metrics["persona_count"], json!(1));
    }

    #[tokio::test]
    async fn test_context_prefixes_prompt() {
        let gateway = Arc::new(ScriptedGateway::new(vec!["ok"]));
        let processor = DirectProcessor::new(gateway.clone());
        let context = PromptContext::new(vec![ContextTurn::new("Chair", "Opening remarks.")]);

        processor
            .process("Rebut.", &FlowConfiguration::new(), &context)
            .await
            .unwrap();

        assert_eq!(
            gateway.prompts()[0],
            "Prior discussion:\nChair: Opening remarks.\n\nRebut."
        );
    }

    #[tokio::test]
    async fn test_gateway_failure_propagates() {
        let gateway = Arc::new(ScriptedGateway::with_results(vec![Err(
            crate::ports::model_gateway::GatewayError::Timeout,
        )]));
        let processor = DirectProcessor::new(gateway);

        let err = processor
            .process("Q?", &FlowConfiguration::new(), &PromptContext::empty())
            .await
            .unwrap_err();
        assert_eq!(err.failed_stage(), Some(Persona::Responder));
    }

    #[test]
    fn test_rejects_non_text_override() {
        let processor = DirectProcessor::new(Arc::new(ScriptedGateway::new(vec![])));
        assert!(!processor.accepts_configuration(&FlowConfiguration::new().with("direct_prompt", 1)));
    }
}
