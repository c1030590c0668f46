//! Persona value object

use serde::{Deserialize, Serialize};

/// A named role framing one stage of a flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Persona {
    /// Proposes the initial solution
    Architect,
    /// Attacks the architect's solution
    Skeptic,
    /// Weighs both sides and decides
    Judge,
    /// Answers the prompt directly
    Responder,
}

impl Persona {
    /// The red-team personas in pipeline order.
    pub const RED_TEAM: [Persona; 3] = [Persona::Architect, Persona::Skeptic, Persona::Judge];

    pub fn as_str(&self) -> &'static str {
        match self {
            Persona::Architect => "architect",
            Persona::Skeptic => "skeptic",
            Persona::Judge => "judge",
            Persona::Responder => "responder",
        }
    }

    /// Step name shown to users
    pub fn step_name(&self) -> &'static str {
        match self {
            Persona::Architect => "Architect Solution",
            Persona::Skeptic => "Skeptic Critique",
            Persona::Judge => "Judge Decision",
            Persona::Responder => "Direct Response",
        }
    }

    /// One-sentence description of what the persona's stage does
    pub fn step_description(&self) -> &'static str {
        match self {
            Persona::Architect => "Architect proposes a complete solution to the problem",
            Persona::Skeptic => "Skeptic looks for flaws and risks in the architect's solution",
            Persona::Judge => "Judge weighs the solution against the critique and decides",
            Persona::Responder => "Model answers the prompt in a single call",
        }
    }
}

impl std::fmt::Display for Persona {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_red_team_order() {
        let names: Vec<_> = Persona::RED_TEAM.iter().map(|p| p.as_str()).collect();
        assert_eq!(names, vec!["architect", "skeptic", "judge"]);
    }
}
