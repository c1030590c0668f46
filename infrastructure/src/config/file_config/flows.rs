//! Flow configuration from TOML (`[flows]` section)
//!
//! ```toml
//! [flows]
//! default = "multi_agent_red_team"
//!
//! [flows.parameters]
//! temperature = 0.7
//!
//! [flows.red_team]
//! judge_prompt = "..."
//! ```

use flows_application::FlowDefaults;
use flows_domain::{
    ConfigIssue, ConfigIssueCode, DirectPromptTemplate, FlowConfiguration, FlowType,
    RedTeamPromptTemplate,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Red-team template overrides
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRedTeamConfig {
    pub architect_prompt: Option<String>,
    pub skeptic_prompt: Option<String>,
    pub judge_prompt: Option<String>,
}

/// Direct flow template override
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDirectConfig {
    pub direct_prompt: Option<String>,
}

/// Raw flows configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileFlowsConfig {
    /// Flow used when none is given on the command line
    pub default: String,
    /// Generic model parameters forwarded to the gateway
    pub parameters: BTreeMap<String, Value>,
    pub red_team: FileRedTeamConfig,
    pub direct: FileDirectConfig,
}

impl Default for FileFlowsConfig {
    fn default() -> Self {
        Self {
            default: FlowType::default().as_str().to_string(),
            parameters: BTreeMap::new(),
            red_team: FileRedTeamConfig::default(),
            direct: FileDirectConfig::default(),
        }
    }
}

fn overrides(entries: &[(&str, &Option<String>)]) -> FlowConfiguration {
    entries
        .iter()
        .filter_map(|(key, value)| value.as_ref().map(|v| (key.to_string(), Value::from(v.as_str()))))
        .collect::<BTreeMap<_, _>>()
        .into()
}

fn missing_placeholder(field: &str, template: &Option<String>, placeholder: &str) -> Option<ConfigIssue> {
    let template = template.as_ref()?;
    let needle = format!("{{{}}}", placeholder);
    if template.contains(&needle) {
        return None;
    }
    Some(ConfigIssue::warning(
        ConfigIssueCode::MissingPlaceholder {
            field: field.to_string(),
            placeholder: placeholder.to_string(),
        },
        format!("{}: template never uses {}", field, needle),
    ))
}

impl FileFlowsConfig {
    /// Parse the default flow type, falling back to the built-in default.
    pub fn parse_default_flow(&self) -> (FlowType, Vec<ConfigIssue>) {
        match self.default.parse::<FlowType>() {
            Ok(flow) => (flow, Vec::new()),
            Err(_) => (
                FlowType::default(),
                vec![ConfigIssue::error(
                    ConfigIssueCode::InvalidEnumValue {
                        field: "flows.default".to_string(),
                        value: self.default.clone(),
                        valid_values: FlowType::ALL.iter().map(|f| f.to_string()).collect(),
                    },
                    format!("flows.default: unknown flow type '{}'", self.default),
                )],
            ),
        }
    }

    /// Warnings for template overrides that drop a placeholder.
    pub fn template_issues(&self) -> Vec<ConfigIssue> {
        let rt = &self.red_team;
        [
            missing_placeholder("flows.red_team.architect_prompt", &rt.architect_prompt, "prompt"),
            missing_placeholder(
                "flows.red_team.skeptic_prompt",
                &rt.skeptic_prompt,
                "architect_solution",
            ),
            missing_placeholder(
                "flows.red_team.judge_prompt",
                &rt.judge_prompt,
                "skeptic_critique",
            ),
            missing_placeholder("flows.direct.direct_prompt", &self.direct.direct_prompt, "prompt"),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Convert to application-level [`FlowDefaults`].
    pub fn to_flow_defaults(&self) -> (FlowDefaults, Vec<ConfigIssue>) {
        let (flow_type, issues) = self.parse_default_flow();

        let red_team = overrides(&[
            (RedTeamPromptTemplate::ARCHITECT_KEY, &self.red_team.architect_prompt),
            (RedTeamPromptTemplate::SKEPTIC_KEY, &self.red_team.skeptic_prompt),
            (RedTeamPromptTemplate::JUDGE_KEY, &self.red_team.judge_prompt),
        ]);
        let direct = overrides(&[(DirectPromptTemplate::KEY, &self.direct.direct_prompt)]);

        let defaults = FlowDefaults::new(flow_type)
            .with_model_parameters(FlowConfiguration::from_map(self.parameters.clone()))
            .with_overrides(FlowType::MultiAgentRedTeam, red_team)
            .with_overrides(FlowType::Direct, direct);

        (defaults, issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_default_flow_alias() {
        let config = FileFlowsConfig {
            default: "direct".to_string(),
            ..Default::default()
        };
        let (flow, issues) = config.parse_default_flow();
        assert_eq!(flow, FlowType::Direct);
        assert!(issues.is_empty());
    }

    #[test]
    fn test_parse_default_flow_unknown() {
        let config = FileFlowsConfig {
            default: "socratic".to_string(),
            ..Default::default()
        };
        let (flow, issues) = config.parse_default_flow();
        assert_eq!(flow, FlowType::MultiAgentRedTeam);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
    }

    #[test]
    fn test_to_flow_defaults_carries_overrides_and_parameters() {
        let mut config = FileFlowsConfig::default();
        config.parameters.insert("temperature".to_string(), json!(0.4));
        config.red_team.judge_prompt = Some("Judge {skeptic_critique}".to_string());

        let (defaults, issues) = config.to_flow_defaults();
        assert!(issues.is_empty());

        let merged = defaults.apply(FlowType::MultiAgentRedTeam, &FlowConfiguration::new());
        assert_eq!(merged.text("judge_prompt"), Some("Judge {skeptic_critique}"));
        assert_eq!(merged.get("temperature"), Some(&json!(0.4)));
        assert!(!merged.contains("architect_prompt"));
    }

    #[test]
    fn test_template_missing_placeholder_warns() {
        let mut config = FileFlowsConfig::default();
        config.red_team.skeptic_prompt = Some("Critique {prompt}".to_string());

        let issues = config.template_issues();
        assert_eq!(issues.len(), 1);
        assert!(!issues[0].is_error());
        assert!(issues[0].message.contains("{architect_solution}"));
    }
}
