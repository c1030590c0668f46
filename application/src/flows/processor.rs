//! Flow processor contract
//!
//! Every thinking style implements [`FlowProcessor`]. Processors hold no
//! per-invocation state: everything an invocation needs arrives through
//! `process` and everything it produces leaves in the returned
//! [`FlowResult`].

use crate::flows::error::FlowError;
use crate::ports::progress::{FlowProgressNotifier, NoFlowProgress};
use async_trait::async_trait;
use flows_domain::flow::configuration::value_kind;
use flows_domain::{ConfigurationError, FlowConfiguration, FlowResult, FlowType, PromptContext};

/// Trait for flow strategies
///
/// Implementations:
/// - `MultiAgentRedTeamProcessor`: Architect → Skeptic → Judge
/// - `DirectProcessor`: one plain model call
#[async_trait]
pub trait FlowProcessor: Send + Sync {
    /// Identity tag of this strategy
    fn flow_type(&self) -> FlowType;

    /// Number of steps every successful run produces
    fn stage_count(&self) -> usize;

    /// Check a configuration before any model call.
    ///
    /// Optional keys may be absent; defaults apply at execution time.
    fn validate_configuration(
        &self,
        configuration: &FlowConfiguration,
    ) -> Result<(), ConfigurationError>;

    /// Boolean form of [`validate_configuration`](Self::validate_configuration)
    fn accepts_configuration(&self, configuration: &FlowConfiguration) -> bool {
        self.validate_configuration(configuration).is_ok()
    }

    /// Run the flow, reporting step progress to `progress`.
    ///
    /// `configuration` is assumed already validated. Returns a fully
    /// populated result or the first error; never a partial result.
    async fn process_with_progress(
        &self,
        prompt: &str,
        configuration: &FlowConfiguration,
        context: &PromptContext,
        progress: &dyn FlowProgressNotifier,
    ) -> Result<FlowResult, FlowError>;

    /// Run the flow without progress reporting
    async fn process(
        &self,
        prompt: &str,
        configuration: &FlowConfiguration,
        context: &PromptContext,
    ) -> Result<FlowResult, FlowError> {
        self.process_with_progress(prompt, configuration, context, &NoFlowProgress)
            .await
    }
}

/// Reject template overrides that are present but not text.
pub fn require_text_overrides(
    configuration: &FlowConfiguration,
    keys: &[&str],
) -> Result<(), ConfigurationError> {
    for key in keys {
        if let Some(value) = configuration.get(key)
            && !value.is_string()
        {
            return Err(ConfigurationError::TemplateOverrideNotText {
                key: key.to_string(),
                found: value_kind(value),
            });
        }
    }
    Ok(())
}
