//! Flow type value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Identifier of a known flow strategy (Value Object)
///
/// The set is closed: adding a strategy means adding a variant here and
/// registering a processor for it in the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowType {
    /// Architect → Skeptic → Judge adversarial review
    MultiAgentRedTeam,
    /// Single plain model call
    Direct,
}

impl FlowType {
    /// Every known flow type, in display order.
    pub const ALL: [FlowType; 2] = [FlowType::MultiAgentRedTeam, FlowType::Direct];

    /// Get the string tag for this flow type
    pub fn as_str(&self) -> &'static str {
        match self {
            FlowType::MultiAgentRedTeam => "multi_agent_red_team",
            FlowType::Direct => "direct",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            FlowType::MultiAgentRedTeam => "Multi-Agent Red-Team",
            FlowType::Direct => "Direct",
        }
    }

    /// Short description shown in `--list-flows`
    pub fn description(&self) -> &'static str {
        match self {
            FlowType::MultiAgentRedTeam => {
                "An architect proposes, a skeptic attacks the proposal, a judge decides"
            }
            FlowType::Direct => "One plain model call with the prompt as given",
        }
    }
}

impl Default for FlowType {
    fn default() -> Self {
        FlowType::MultiAgentRedTeam
    }
}

impl std::fmt::Display for FlowType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for FlowType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "multi_agent_red_team" | "multi-agent-red-team" | "red_team" | "red-team"
            | "redteam" => Ok(FlowType::MultiAgentRedTeam),
            "direct" | "plain" => Ok(FlowType::Direct),
            other => Err(DomainError::UnknownFlowType(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flow_type_roundtrip() {
        for flow in FlowType::ALL {
            let parsed: FlowType = flow.to_string().parse().unwrap();
            assert_eq!(flow, parsed);
        }
    }

    #[test]
    fn test_flow_type_aliases() {
        assert_eq!("red-team".parse::<FlowType>().unwrap(), FlowType::MultiAgentRedTeam);
        assert_eq!("RedTeam".parse::<FlowType>().unwrap(), FlowType::MultiAgentRedTeam);
        assert_eq!(" plain ".parse::<FlowType>().unwrap(), FlowType::Direct);
    }

    #[test]
    fn test_unknown_flow_type() {
        let err = "socratic".parse::<FlowType>().unwrap_err();
        assert_eq!(err, DomainError::UnknownFlowType("socratic".to_string()));
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&FlowType::MultiAgentRedTeam).unwrap();
        assert_eq!(json, "\"multi_agent_red_team\"");
        let flow: FlowType = serde_json::from_str("\"direct\"").unwrap();
        assert_eq!(flow, FlowType::Direct);
    }
}
