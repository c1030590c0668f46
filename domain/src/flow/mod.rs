//! Flow value types
//!
//! These types describe one flow invocation from input to output:
//! - [`flow_type::FlowType`] - which strategy runs
//! - [`configuration::FlowConfiguration`] - named parameters for the run
//! - [`context::PromptContext`] - prior debate turns, read-only
//! - [`step::ProcessingStep`] - one recorded stage
//! - [`result::FlowResult`] - the complete outcome
//!
//! Every value here is built fresh per invocation and never mutated after
//! construction.

pub mod configuration;
pub mod context;
pub mod flow_type;
pub mod persona;
pub mod result;
pub mod step;
