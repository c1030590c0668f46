//! Run Flow use case
//!
//! Applies deployment defaults, dispatches the request and records the
//! transcript. This is the entry point a turn-generation orchestrator calls.

use crate::config::FlowDefaults;
use crate::flows::dispatcher::{FlowDispatcher, FlowRequest};
use crate::flows::error::FlowError;
use crate::ports::flow_logger::{FlowEvent, FlowLogger, NoFlowLogger};
use crate::ports::progress::{FlowProgressNotifier, NoFlowProgress};
use flows_domain::{FlowConfiguration, FlowResult, FlowType, PromptContext};
use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn};

/// Input for the RunFlow use case
#[derive(Debug, Clone)]
pub struct RunFlowInput {
    /// The raw prompt for this turn
    pub prompt: String,
    /// Flow to run; `None` uses the configured default
    pub flow_type: Option<FlowType>,
    /// Per-request configuration, layered over the defaults
    pub configuration: FlowConfiguration,
    /// Prior turns
    pub context: PromptContext,
}

impl RunFlowInput {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            flow_type: None,
            configuration: FlowConfiguration::new(),
            context: PromptContext::empty(),
        }
    }

    pub fn with_flow_type(mut self, flow_type: FlowType) -> Self {
        self.flow_type = Some(flow_type);
        self
    }

    pub fn with_configuration(mut self, configuration: FlowConfiguration) -> Self {
        self.configuration = configuration;
        self
    }

    pub fn with_context(mut self, context: PromptContext) -> Self {
        self.context = context;
        self
    }
}

/// Use case for running a single flow
pub struct RunFlowUseCase {
    dispatcher: Arc<FlowDispatcher>,
    defaults: FlowDefaults,
    logger: Arc<dyn FlowLogger>,
}

impl RunFlowUseCase {
    pub fn new(dispatcher: Arc<FlowDispatcher>) -> Self {
        Self {
            dispatcher,
            defaults: FlowDefaults::default(),
            logger: Arc::new(NoFlowLogger),
        }
    }

    pub fn with_defaults(mut self, defaults: FlowDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn with_logger(mut self, logger: Arc<dyn FlowLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Build the dispatch request: resolve the flow type and apply defaults
    pub fn build_request(&self, input: RunFlowInput) -> FlowRequest {
        let flow_type = input.flow_type.unwrap_or(self.defaults.flow_type);
        let configuration = self.defaults.apply(flow_type, &input.configuration);

        FlowRequest::new(flow_type, input.prompt)
            .with_configuration(configuration)
            .with_context(input.context)
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: RunFlowInput) -> Result<FlowResult, FlowError> {
        self.execute_with_progress(input, &NoFlowProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: RunFlowInput,
        progress: &dyn FlowProgressNotifier,
    ) -> Result<FlowResult, FlowError> {
        let request = self.build_request(input);
        info!("Running {} flow", request.flow_type.display_name());

        self.logger.log(FlowEvent::new(
            "flow_started",
            json!({
                "flow_type": request.flow_type,
                "prompt": request.original_prompt,
                "context_turns": request.context.len(),
            }),
        ));

        match self.dispatcher.dispatch_with_progress(&request, progress).await {
            Ok(result) => {
                self.logger.log(FlowEvent::new(
                    "flow_completed",
                    json!({
                        "flow_type": result.flow_type,
                        "duration_ms": result.processing_duration_ms() as u64,
                        "steps": result.steps,
                        "final_response": result.final_response,
                        "metrics": result.metrics,
                    }),
                ));
                Ok(result)
            }
            Err(e) => {
                warn!("{} flow failed: {}", request.flow_type.display_name(), e);
                self.logger.log(FlowEvent::new(
                    "flow_failed",
                    json!({
                        "flow_type": request.flow_type,
                        "stage": e.failed_stage(),
                        "error": e.to_string(),
                    }),
                ));
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flows::testing::ScriptedGateway;
    use crate::ports::model_gateway::GatewayError;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryLogger {
        events: Mutex<Vec<(&'static str, serde_json::Value)>>,
    }

    impl FlowLogger for MemoryLogger {
        fn log(&self, event: FlowEvent) {
            self.events
                .lock()
                .unwrap()
                .push((event.event_type, event.payload));
        }
    }

    fn use_case(gateway: Arc<ScriptedGateway>, logger: Arc<MemoryLogger>) -> RunFlowUseCase {
        let dispatcher = Arc::new(FlowDispatcher::with_default_processors(gateway));
        RunFlowUseCase::new(dispatcher).with_logger(logger)
    }

    #[test]
    fn test_build_request_uses_default_flow() {
        let gateway = Arc::new(ScriptedGateway::new(vec![]));
        let use_case = RunFlowUseCase::new(Arc::new(FlowDispatcher::with_default_processors(
            gateway,
        )))
        .with_defaults(
            FlowDefaults::new(FlowType::Direct)
                .with_model_parameters(FlowConfiguration::new().with("temperature", 0.5)),
        );

        let request = use_case.build_request(RunFlowInput::new("Q?"));
        assert_eq!(request.flow_type, FlowType::Direct);
        assert_eq!(request.configuration.get_or("temperature", 0.0), 0.5);

        let request =
            use_case.build_request(RunFlowInput::new("Q?").with_flow_type(FlowType::MultiAgentRedTeam));
        assert_eq!(request.flow_type, FlowType::MultiAgentRedTeam);
    }

    #[tokio::test]
    async fn test_success_logs_start_and_completion() {
        let gateway = Arc::new(ScriptedGateway::new(vec!["a", "b", "In summary: c"]));
        let logger = Arc::new(MemoryLogger::default());

        let result = use_case(gateway, logger.clone())
            .execute(RunFlowInput::new("Q?"))
            .await
            .unwrap();
        assert_eq!(result.final_response, "In summary: c");

        let events = logger.events.lock().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].0, "flow_started");
        assert_eq!(events[0].1["flow_type"], "multi_agent_red_team");
        assert_eq!(events[1].0, "flow_completed");
        assert_eq!(events[1].1["steps"].as_array().unwrap().len(), 3);
        assert_eq!(events[1].1["final_response"], "In summary: c");
    }

    #[tokio::test]
    async fn test_failure_logs_stage_and_returns_error() {
        let gateway = Arc::new(ScriptedGateway::with_results(vec![
            Ok("a".to_string()),
            Ok("b".to_string()),
            Err(GatewayError::RequestFailed("rate limited".to_string())),
        ]));
        let logger = Arc::new(MemoryLogger::default());

        let err = use_case(gateway, logger.clone())
            .execute(RunFlowInput::new("Q?"))
            .await
            .unwrap_err();
        assert!(matches!(err, FlowError::ModelInvocation { .. }));

        let events = logger.events.lock().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].0, "flow_failed");
        assert_eq!(events[1].1["stage"], "judge");
    }
}
