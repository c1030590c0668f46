//! Flow defaults: values applied beneath every request.
//!
//! [`FlowDefaults`] carries what a deployment configures once (default flow,
//! base model parameters, per-flow template overrides) and layers it under
//! the per-request configuration. Request values always win.

use flows_domain::{FlowConfiguration, FlowType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Deployment-wide defaults for flow invocations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlowDefaults {
    /// Flow used when the caller does not pick one.
    pub flow_type: FlowType,
    /// Generic model parameters applied to every flow.
    pub model_parameters: FlowConfiguration,
    /// Template overrides per flow type.
    pub overrides: BTreeMap<FlowType, FlowConfiguration>,
}

impl FlowDefaults {
    pub fn new(flow_type: FlowType) -> Self {
        Self {
            flow_type,
            ..Self::default()
        }
    }

    // ==================== Builder Methods ====================

    pub fn with_model_parameters(mut self, parameters: FlowConfiguration) -> Self {
        self.model_parameters = parameters;
        self
    }

    pub fn with_overrides(mut self, flow_type: FlowType, overrides: FlowConfiguration) -> Self {
        self.overrides.insert(flow_type, overrides);
        self
    }

    /// Full configuration for `flow_type`: request over flow overrides over
    /// model parameters.
    pub fn apply(&self, flow_type: FlowType, request: &FlowConfiguration) -> FlowConfiguration {
        let base = match self.overrides.get(&flow_type) {
            Some(overrides) => overrides.layered_over(&self.model_parameters),
            None => self.model_parameters.clone(),
        };
        request.layered_over(&base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_flow_is_red_team() {
        assert_eq!(FlowDefaults::default().flow_type, FlowType::MultiAgentRedTeam);
    }

    #[test]
    fn test_apply_layers_request_over_defaults() {
        let defaults = FlowDefaults::new(FlowType::MultiAgentRedTeam)
            .with_model_parameters(
                FlowConfiguration::new()
                    .with("temperature", 0.7)
                    .with("max_tokens", 800),
            )
            .with_overrides(
                FlowType::MultiAgentRedTeam,
                FlowConfiguration::new().with("judge_prompt", "Decide: {prompt}"),
            );

        let request = FlowConfiguration::new().with("temperature", 0.1);
        let merged = defaults.apply(FlowType::MultiAgentRedTeam, &request);

        assert_eq!(merged.get("temperature"), Some(&json!(0.1)));
        assert_eq!(merged.get("max_tokens"), Some(&json!(800)));
        assert_eq!(merged.text("judge_prompt"), Some("Decide: {prompt}"));
    }

    #[test]
    fn test_apply_ignores_other_flow_overrides() {
        let defaults = FlowDefaults::default().with_overrides(
            FlowType::MultiAgentRedTeam,
            FlowConfiguration::new().with("judge_prompt", "x"),
        );
        let merged = defaults.apply(FlowType::Direct, &FlowConfiguration::new());
        assert!(merged.is_empty());
    }
}
