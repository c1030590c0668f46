//! Flow dispatcher - read-only registry from flow type to processor.
//!
//! Built once at startup and never modified afterwards, so a shared
//! `Arc<FlowDispatcher>` can serve concurrent invocations without locking.

use crate::flows::direct::DirectProcessor;
use crate::flows::error::FlowError;
use crate::flows::processor::FlowProcessor;
use crate::flows::red_team::MultiAgentRedTeamProcessor;
use crate::ports::model_gateway::ModelGateway;
use crate::ports::progress::{FlowProgressNotifier, NoFlowProgress};
use flows_domain::{FlowConfiguration, FlowResult, FlowType, PromptContext};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// A request to run one flow
#[derive(Debug, Clone)]
pub struct FlowRequest {
    pub flow_type: FlowType,
    pub original_prompt: String,
    pub configuration: FlowConfiguration,
    pub context: PromptContext,
}

impl FlowRequest {
    pub fn new(flow_type: FlowType, original_prompt: impl Into<String>) -> Self {
        Self {
            flow_type,
            original_prompt: original_prompt.into(),
            configuration: FlowConfiguration::new(),
            context: PromptContext::empty(),
        }
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

/// Registry of flow processors keyed by flow type
pub struct FlowDispatcher {
    processors: HashMap<FlowType, Arc<dyn FlowProcessor>>,
}

impl FlowDispatcher {
    /// Build a dispatcher from the given processors.
    ///
    /// Fails if two processors claim the same flow type.
    pub fn new(processors: Vec<Arc<dyn FlowProcessor>>) -> Result<Self, FlowError> {
        let mut registry = HashMap::with_capacity(processors.len());
        for processor in processors {
            let flow_type = processor.flow_type();
            if registry.insert(flow_type, processor).is_some() {
                return Err(FlowError::DuplicateFlowType(flow_type));
            }
        }
        Ok(Self {
            processors: registry,
        })
    }

    /// Dispatcher with every built-in processor sharing one gateway
    pub fn with_default_processors(gateway: Arc<dyn ModelGateway>) -> Self {
        let red_team: Arc<dyn FlowProcessor> =
            Arc::new(MultiAgentRedTeamProcessor::new(Arc::clone(&gateway)));
        let direct: Arc<dyn FlowProcessor> = Arc::new(DirectProcessor::new(gateway));

        Self {
            processors: HashMap::from([
                (FlowType::MultiAgentRedTeam, red_team),
                (FlowType::Direct, direct),
            ]),
        }
    }

    /// Find the processor for `flow_type`
    pub fn resolve(&self, flow_type: FlowType) -> Result<&Arc<dyn FlowProcessor>, FlowError> {
        self.processors
            .get(&flow_type)
            .ok_or(FlowError::UnsupportedFlowType(flow_type))
    }

    /// Registered flow types, sorted
    pub fn flow_types(&self) -> Vec<FlowType> {
        let mut types: Vec<_> = self.processors.keys().copied().collect();
        types.sort();
        types
    }

    pub fn supports(&self, flow_type: FlowType) -> bool {
        self.processors.contains_key(&flow_type)
    }

    /// Resolve, validate, then process.
    pub async fn dispatch(&self, request: &FlowRequest) -> Result<FlowResult, FlowError> {
        self.dispatch_with_progress(request, &NoFlowProgress).await
    }

    /// Resolve, validate, then process, reporting step progress.
    ///
    /// Configuration errors are raised before any model call.
    pub async fn dispatch_with_progress(
        &self,
        request: &FlowRequest,
        progress: &dyn FlowProgressNotifier,
    ) -> Result<FlowResult, FlowError> {
        let processor = self.resolve(request.flow_type)?;
        processor.validate_configuration(&request.configuration)?;

        debug!(
            "Dispatching {} with {} configuration keys",
            request.flow_type,
            request.configuration.len()
        );

        processor
            .process_with_progress(
                &request.original_prompt,
                &request.configuration,
                &request.context,
                progress,
            )
            .await
    }
}
