//! Processing step - one recorded stage of a flow

use crate::flow::flow_type::FlowType;
use crate::flow::persona::Persona;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Display metadata for a step.
///
/// `order` is 1-based and only used for display and sorting, never for
/// control flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepMetadata {
    pub name: String,
    pub description: String,
    pub order: u32,
    /// Metadata returned by the gateway with the reply (model, usage, ...)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub model: BTreeMap<String, Value>,
}

/// One stage's prompt/response pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingStep {
    pub flow_type: FlowType,
    pub persona: Persona,
    pub input_prompt: String,
    pub output_text: String,
    pub metadata: StepMetadata,
}

impl ProcessingStep {
    /// Creates a step for `persona` using the persona's name and description.
    pub fn new(
        flow_type: FlowType,
        persona: Persona,
        order: u32,
        input_prompt: impl Into<String>,
        output_text: impl Into<String>,
    ) -> Self {
        Self {
            flow_type,
            persona,
            input_prompt: input_prompt.into(),
            output_text: output_text.into(),
            metadata: StepMetadata {
                name: persona.step_name().to_string(),
                description: persona.step_description().to_string(),
                order,
                model: BTreeMap::new(),
            },
        }
    }

    /// Attaches the gateway's reply metadata.
    pub fn with_model_metadata(mut self, model: BTreeMap<String, Value>) -> Self {
        self.metadata.model = model;
        self
    }

    /// Step tag combining flow and persona, e.g. `multi_agent_red_team.skeptic`
    pub fn tag(&self) -> String {
        format!("{}.{}", self.flow_type, self.persona)
    }

    pub fn order(&self) -> u32 {
        self.metadata.order
    }
}
