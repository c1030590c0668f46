//! Multi-Agent Red-Team flow
//!
//! An internal adversarial review in three strictly sequential stages:
//!
//! 1. **Architect** proposes a solution to the prompt
//! 2. **Skeptic** critiques the architect's solution
//! 3. **Judge** weighs both and produces the authoritative answer
//!
//! Each stage needs the previous stage's output, so the three gateway calls
//! can never overlap. A failure in any stage aborts the whole run.

use crate::flows::error::FlowError;
use crate::flows::processor::{FlowProcessor, require_text_overrides};
use crate::ports::model_gateway::ModelGateway;
use crate::ports::progress::FlowProgressNotifier;
use async_trait::async_trait;
use flows_domain::core::string::single_line_preview;
use flows_domain::{
    ConfigurationError, DomainError, FlowConfiguration, FlowResult, FlowType, ModelParameters,
    Persona, ProcessingStep, PromptContext, RedTeamPromptTemplate, extract_final_response,
    judge_agrees_with_architect,
};
use serde_json::{Value, json};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::time::Instant;
use tracing::{debug, info, warn};

const FLOW: FlowType = FlowType::MultiAgentRedTeam;
const PREVIEW_LEN: usize = 80;

/// Processor for the Architect → Skeptic → Judge flow
pub struct MultiAgentRedTeamProcessor {
    gateway: Arc<dyn ModelGateway>,
}

impl MultiAgentRedTeamProcessor {
    /// Metric value identifying this strategy
    pub const STRATEGY_TAG: &'static str = "multi_agent_red_team";

    pub fn new(gateway: Arc<dyn ModelGateway>) -> Self {
        Self { gateway }
    }

    /// Run one stage: call the gateway and record the step.
    async fn run_stage(
        &self,
        persona: Persona,
        order: u32,
        prompt: String,
        parameters: &ModelParameters,
        progress: &dyn FlowProgressNotifier,
    ) -> Result<ProcessingStep, FlowError> {
        info!("Stage {}: {}", order, persona.step_name());
        progress.on_step_start(FLOW, persona.step_name(), order);

        match self.gateway.generate(&prompt, parameters).await {
            Ok(reply) => {
                debug!(
                    "{} replied: {}",
                    persona,
                    single_line_preview(&reply.text, PREVIEW_LEN)
                );
                progress.on_step_complete(FLOW, persona.step_name(), order, true);
                Ok(ProcessingStep::new(FLOW, persona, order, prompt, reply.text)
                    .with_model_metadata(reply.metadata))
            }
            Err(source) => {
                warn!("{} stage failed: {}", persona, source);
                progress.on_step_complete(FLOW, persona.step_name(), order, false);
                Err(FlowError::ModelInvocation {
                    stage: persona,
                    source,
                })
            }
        }
    }

    /// The three stages in order; stops at the first failure.
    async fn run_pipeline(
        &self,
        prompt: &str,
        configuration: &FlowConfiguration,
        context: &PromptContext,
        progress: &dyn FlowProgressNotifier,
    ) -> Result<Vec<ProcessingStep>, FlowError> {
        let parameters = configuration.model_parameters(&RedTeamPromptTemplate::KEYS);
        let context_block = context.render();

        let architect_template = configuration
            .text(RedTeamPromptTemplate::ARCHITECT_KEY)
            .unwrap_or(RedTeamPromptTemplate::default_architect());
        let skeptic_template = configuration
            .text(RedTeamPromptTemplate::SKEPTIC_KEY)
            .unwrap_or(RedTeamPromptTemplate::default_skeptic());
        let judge_template = configuration
            .text(RedTeamPromptTemplate::JUDGE_KEY)
            .unwrap_or(RedTeamPromptTemplate::default_judge());

        let architect_prompt =
            RedTeamPromptTemplate::architect(architect_template, prompt, &context_block);
        let architect = self
            .run_stage(Persona::Architect, 1, architect_prompt, &parameters, progress)
            .await?;

        let skeptic_prompt = RedTeamPromptTemplate::skeptic(
            skeptic_template,
            prompt,
            &architect.output_text,
            &context_block,
        );
        let skeptic = self
            .run_stage(Persona::Skeptic, 2, skeptic_prompt, &parameters, progress)
            .await?;

        let judge_prompt = RedTeamPromptTemplate::judge(
            judge_template,
            prompt,
            &architect.output_text,
            &skeptic.output_text,
            &context_block,
        );
        let judge = self
            .run_stage(Persona::Judge, 3, judge_prompt, &parameters, progress)
            .await?;

        Ok(vec![architect, skeptic, judge])
    }

    fn metrics(agrees_with_architect: bool) -> BTreeMap<String, Value> {
        BTreeMap::from([
            ("strategy".to_string(), json!(Self::STRATEGY_TAG)),
            ("persona_count".to_string(), json!(Persona::RED_TEAM.len())),
            (
                "judge_agrees_with_architect".to_string(),
                json!(agrees_with_architect),
            ),
            (
                "judge_agrees_with_skeptic".to_string(),
                json!(!agrees_with_architect),
            ),
        ])
    }
}

#[async_trait]
impl FlowProcessor for MultiAgentRedTeamProcessor {
    fn flow_type(&self) -> FlowType {
        FLOW
    }

    fn stage_count(&self) -> usize {
        Persona::RED_TEAM.len()
    }

    fn validate_configuration(
        &self,
        configuration: &FlowConfiguration,
    ) -> Result<(), ConfigurationError> {
        require_text_overrides(configuration, &RedTeamPromptTemplate::KEYS)
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
        info!(
            "Starting {} flow ({} prior turns)",
            FLOW.display_name(),
            context.len()
        );
        progress.on_flow_start(FLOW, self.stage_count());

        let outcome = self
            .run_pipeline(prompt, configuration, context, progress)
            .await;
        progress.on_flow_complete(FLOW, outcome.is_ok());
        let steps = outcome?;

        let architect_solution = &steps[0].output_text;
        let skeptic_critique = &steps[1].output_text;
        let judge_decision = steps[2].output_text.clone();

        let agrees_with_architect =
            judge_agrees_with_architect(&judge_decision, architect_solution, skeptic_critique);
        let final_response = extract_final_response(&judge_decision);

        let processing_duration = started.elapsed();
        info!(
            "{} flow finished in {:?} (judge sided with {})",
            FLOW.display_name(),
            processing_duration,
            if agrees_with_architect {
                Persona::Architect
            } else {
                Persona::Skeptic
            }
        );

        Ok(FlowResult {
            flow_type: FLOW,
            original_prompt: prompt.to_string(),
            enhanced_prompt: steps[0].input_prompt.clone(),
            full_response: judge_decision,
            final_response,
            steps,
            processing_duration,
            response_changed: true,
            metrics: Self::metrics(agrees_with_architect),
        })
    }
}
