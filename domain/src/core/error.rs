//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Prompt cannot be empty")]
    EmptyPrompt,

    #[error("Unknown flow type: {0}")]
    UnknownFlowType(String),
}

/// Errors raised while validating a [`FlowConfiguration`](crate::FlowConfiguration).
///
/// These are always produced before any model call is made.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("Template override '{key}' must be text, found {found}")]
    TemplateOverrideNotText { key: String, found: &'static str },
}

impl ConfigurationError {
    /// The configuration key the error refers to.
    pub fn key(&self) -> &str {
        match self {
            ConfigurationError::TemplateOverrideNotText { key, .. } => key,
        }
    }
}
