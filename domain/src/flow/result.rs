//! Flow result - the complete outcome of one flow invocation

use crate::flow::flow_type::FlowType;
use crate::flow::persona::Persona;
use crate::flow::step::ProcessingStep;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::time::Duration;

/// Complete result of a flow invocation
///
/// Built once by a processor after every stage succeeded; there is no
/// partially populated form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowResult {
    /// The strategy that produced this result
    pub flow_type: FlowType,
    /// The raw prompt as received
    pub original_prompt: String,
    /// First transformation of the raw prompt (kept for display/logging)
    pub enhanced_prompt: String,
    /// Raw text of the authoritative stage
    pub full_response: String,
    /// The part of `full_response` the caller should present
    pub final_response: String,
    /// Recorded stages, ordered by `metadata.order`
    pub steps: Vec<ProcessingStep>,
    /// Wall-clock time spent in `process`
    pub processing_duration: Duration,
    /// Whether the flow produced something other than a plain call would
    pub response_changed: bool,
    /// Strategy-specific measurements
    #[serde(default)]
    pub metrics: BTreeMap<String, Value>,
}

impl FlowResult {
    /// Find the step recorded for `persona`
    pub fn step(&self, persona: Persona) -> Option<&ProcessingStep> {
        self.steps.iter().find(|s| s.persona == persona)
    }

    /// Look up a metric
    pub fn metric(&self, key: &str) -> Option<&Value> {
        self.metrics.get(key)
    }

    pub fn processing_duration_ms(&self) -> u128 {
        self.processing_duration.as_millis()
    }

    /// Whether step orders are contiguous starting at 1.
    pub fn has_contiguous_steps(&self) -> bool {
        self.steps
            .iter()
            .enumerate()
            .all(|(i, s)| s.metadata.order as usize == i + 1)
    }
}
