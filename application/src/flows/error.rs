//! Flow execution errors

use crate::ports::model_gateway::GatewayError;
use flows_domain::{ConfigurationError, DomainError, FlowType, Persona};
use thiserror::Error;

/// Errors that can occur while dispatching or processing a flow
#[derive(Error, Debug)]
pub enum FlowError {
    #[error("Invalid configuration: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Model invocation failed in {stage} stage: {source}")]
    ModelInvocation {
        stage: Persona,
        #[source]
        source: GatewayError,
    },

    #[error("No processor registered for flow type '{0}'")]
    UnsupportedFlowType(FlowType),

    #[error("Flow type '{0}' registered more than once")]
    DuplicateFlowType(FlowType),
}

impl FlowError {
    /// The underlying gateway failure, if this error came from a model call
    pub fn gateway_error(&self) -> Option<&GatewayError> {
        match self {
            FlowError::ModelInvocation { source, .. } => Some(source),
            _ => None,
        }
    }

    /// The stage that failed, if this error came from a model call
    pub fn failed_stage(&self) -> Option<Persona> {
        match self {
            FlowError::ModelInvocation { stage, .. } => Some(*stage),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_model_invocation_preserves_source() {
        let error = FlowError::ModelInvocation {
            stage: Persona::Skeptic,
            source: GatewayError::Timeout,
        };
        assert_eq!(
            error.to_string(),
            "Model invocation failed in skeptic stage: Timeout"
        );
        assert!(matches!(error.gateway_error(), Some(GatewayError::Timeout)));
        assert_eq!(error.failed_stage(), Some(Persona::Skeptic));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_domain_error_is_transparent() {
        let error: FlowError = DomainError::EmptyPrompt.into();
        assert_eq!(error.to_string(), "Prompt cannot be empty");
        assert!(error.gateway_error().is_none());
    }
}
