//! Flow configuration value object

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Generic model parameters forwarded opaquely to the gateway
/// (e.g. `temperature`, `max_tokens`).
pub type ModelParameters = BTreeMap<String, Value>;

/// Immutable named-parameter map for one flow invocation (Value Object)
///
/// Holds both the persona template overrides a processor recognizes and
/// any generic model parameters. Processors read from it; nothing writes
/// to it after construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlowConfiguration {
    parameters: BTreeMap<String, Value>,
}

impl FlowConfiguration {
    /// Create an empty configuration (all defaults apply)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration from an existing parameter map
    pub fn from_map(parameters: BTreeMap<String, Value>) -> Self {
        Self { parameters }
    }

    /// Builder-style insertion, used while assembling a configuration
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }

    /// Raw lookup
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.parameters.get(key)
    }

    /// Whether the key is present at all
    pub fn contains(&self, key: &str) -> bool {
        self.parameters.contains_key(key)
    }

    /// Text lookup; `None` when absent or not a string
    pub fn text(&self, key: &str) -> Option<&str> {
        self.parameters.get(key).and_then(Value::as_str)
    }

    /// Typed lookup with a caller-supplied default.
    ///
    /// Falls back to `default` when the key is absent or its value does not
    /// deserialize into `T`.
    pub fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        self.parameters
            .get(key)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
            .unwrap_or(default)
    }

    /// Every parameter whose key is not in `reserved`, verbatim.
    pub fn model_parameters(&self, reserved: &[&str]) -> ModelParameters {
        self.parameters
            .iter()
            .filter(|(k, _)| !reserved.contains(&k.as_str()))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Layer `self` over `base`: keys present here win.
    pub fn layered_over(&self, base: &FlowConfiguration) -> FlowConfiguration {
        let mut parameters = base.parameters.clone();
        parameters.extend(self.parameters.iter().map(|(k, v)| (k.clone(), v.clone())));
        FlowConfiguration { parameters }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.parameters.iter()
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}

impl From<BTreeMap<String, Value>> for FlowConfiguration {
    fn from(parameters: BTreeMap<String, Value>) -> Self {
        Self::from_map(parameters)
    }
}

/// Name of a JSON value's type, for error messages.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_or_uses_default_when_missing() {
        let config = FlowConfiguration::new();
        assert_eq!(config.get_or("temperature", 0.7), 0.7);
    }

    #[test]
    fn test_get_or_uses_default_on_type_mismatch() {
        let config = FlowConfiguration::new().with("temperature", "hot");
        assert_eq!(config.get_or("temperature", 0.7), 0.7);
    }

    #[test]
    fn test_get_or_reads_typed_value() {
        let config = FlowConfiguration::new()
            .with("temperature", 0.2)
            .with("max_tokens", 512);
        assert_eq!(config.get_or("temperature", 0.7), 0.2);
        assert_eq!(config.get_or::<u32>("max_tokens", 0), 512);
    }

    #[test]
    fn test_text_ignores_non_strings() {
        let config = FlowConfiguration::new()
            .with("architect_prompt", "Solve {prompt}")
            .with("judge_prompt", 3);
        assert_eq!(config.text("architect_prompt"), Some("Solve {prompt}"));
        assert_eq!(config.text("judge_prompt"), None);
        assert!(config.contains("judge_prompt"));
    }

    #[test]
    fn test_model_parameters_excludes_reserved() {
        let config = FlowConfiguration::new()
            .with("architect_prompt", "Solve {prompt}")
            .with("temperature", 0.3)
            .with("top_p", json!(0.9));
        let params = config.model_parameters(&["architect_prompt"]);
        assert_eq!(params.len(), 2);
        assert_eq!(params["temperature"], json!(0.3));
        assert!(!params.contains_key("architect_prompt"));
    }

    #[test]
    fn test_layered_over_prefers_top_layer() {
        let base = FlowConfiguration::new()
            .with("temperature", 0.7)
            .with("max_tokens", 256);
        let top = FlowConfiguration::new().with("temperature", 0.1);
        let merged = top.layered_over(&base);
        assert_eq!(merged.get("temperature"), Some(&json!(0.1)));
        assert_eq!(merged.get("max_tokens"), Some(&json!(256)));
    }

    #[test]
    fn test_deserializes_from_plain_object() {
        let config: FlowConfiguration =
            serde_json::from_str(r#"{"judge_prompt": "Decide", "temperature": 0.5}"#).unwrap();
        assert_eq!(config.len(), 2);
        assert_eq!(config.text("judge_prompt"), Some("Decide"));
    }
}
