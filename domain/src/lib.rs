//! Domain layer for debate-flows
//!
//! This crate contains the value types, personas, prompt templates and
//! text heuristics used by the flow engine. It has no dependencies on
//! infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Flow
//!
//! A flow is a configured strategy that turns one raw prompt into a richer
//! response through one or more model calls:
//!
//! - **Multi-Agent Red-Team**: Architect proposes, Skeptic attacks, Judge decides
//! - **Direct**: a single plain model call, the baseline "thinking style"
//!
//! ## Persona
//!
//! Each stage of a flow is framed by a named role ([`Persona`]) that labels
//! the [`ProcessingStep`] it produces.

pub mod analysis;
pub mod config;
pub mod core;
pub mod flow;
pub mod prompt;

// Re-export commonly used types
pub use analysis::{
    agreement::{AgreementSignal, explicit_agreement, judge_agrees_with_architect, lexical_overlap},
    conclusion::{CONCLUSION_MARKERS, extract_final_response},
};
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::error::{ConfigurationError, DomainError};
pub use flow::{
    configuration::{FlowConfiguration, ModelParameters},
    context::{ContextTurn, PromptContext},
    flow_type::FlowType,
    persona::Persona,
    result::FlowResult,
    step::{ProcessingStep, StepMetadata},
};
pub use prompt::{DirectPromptTemplate, RedTeamPromptTemplate, render_template};
