//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod flows;
mod gateway;
mod logging;
mod output;

pub use flows::{FileDirectConfig, FileFlowsConfig, FileRedTeamConfig};
pub use gateway::{FileGatewayConfig, GatewayProvider};
pub use logging::FileLoggingConfig;
pub use output::{FileOutputConfig, FileOutputFormat};

use flows_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Model gateway settings
    pub gateway: FileGatewayConfig,
    /// Flow defaults and template overrides
    pub flows: FileFlowsConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Transcript logging settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// This is the single entry point for config validation. It checks:
    /// 1. Gateway fields that cannot be empty or zero
    /// 2. The default flow type
    /// 3. Template overrides that never use their key placeholder
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        // 1. Gateway
        if self.gateway.model.trim().is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::EmptyValue {
                    field: "gateway.model".to_string(),
                },
                "gateway.model cannot be empty",
            ));
        }
        if self.gateway.base_url.trim().is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::EmptyValue {
                    field: "gateway.base_url".to_string(),
                },
                "gateway.base_url cannot be empty",
            ));
        }
        if self.gateway.timeout_seconds == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::OutOfRange {
                    field: "gateway.timeout_seconds".to_string(),
                },
                "gateway.timeout_seconds cannot be 0",
            ));
        }

        // 2. Default flow
        issues.extend(self.flows.parse_default_flow().1);

        // 3. Templates
        issues.extend(self.flows.template_issues());

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flows_domain::{FlowType, OutputFormat};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[gateway]
provider = "echo"
model = "gpt-4o"
timeout_seconds = 30

[flows]
default = "direct"

[flows.parameters]
temperature = 0.3
max_tokens = 1024

[flows.red_team]
architect_prompt = "Design an answer to: {prompt}"

[output]
format = "full"
color = false

[logging]
transcript_dir = "/var/log/debate-flows"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.gateway.provider, GatewayProvider::Echo);
        assert_eq!(config.gateway.model, "gpt-4o");
        assert_eq!(config.gateway.timeout_seconds, 30);
        assert_eq!(config.flows.parse_default_flow().0, FlowType::Direct);
        assert_eq!(config.flows.parameters["max_tokens"], serde_json::json!(1024));
        assert_eq!(
            config.flows.red_team.architect_prompt.as_deref(),
            Some("Design an answer to: {prompt}")
        );
        assert_eq!(config.output.format, Some(OutputFormat::Full));
        assert!(!config.output.color);
        assert_eq!(
            config.logging.transcript_dir.as_deref(),
            Some("/var/log/debate-flows")
        );
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[gateway]
model = "llama-3.1-70b"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.gateway.model, "llama-3.1-70b");
        // Defaults should apply
        assert_eq!(config.gateway.provider, GatewayProvider::OpenAi);
        assert_eq!(config.flows.parse_default_flow().0, FlowType::MultiAgentRedTeam);
        assert!(config.output.color);
        assert!(config.flows.parameters.is_empty());
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_collects_every_issue() {
        let mut config = FileConfig::default();
        config.gateway.model = " ".to_string();
        config.gateway.timeout_seconds = 0;
        config.flows.default = "nope".to_string();

        let issues = config.validate();
        assert_eq!(issues.len(), 3);
        assert!(issues.iter().all(|i| i.is_error()));
    }
}
