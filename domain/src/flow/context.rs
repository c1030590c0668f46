//! Prompt context - prior debate turns visible to a flow

use serde::{Deserialize, Serialize};

/// One prior turn of the conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextTurn {
    /// Who spoke (participant name or role)
    pub speaker: String,
    /// What was said
    pub content: String,
}

impl ContextTurn {
    pub fn new(speaker: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            speaker: speaker.into(),
            content: content.into(),
        }
    }
}

/// Ordered, read-only sequence of prior turns for one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PromptContext {
    turns: Vec<ContextTurn>,
}

impl PromptContext {
    /// No prior turns
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(turns: Vec<ContextTurn>) -> Self {
        Self { turns }
    }

    pub fn turns(&self) -> &[ContextTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Render the turns as a block suitable for the `{context}` placeholder.
    ///
    /// Returns an empty string when there are no turns so templates read
    /// naturally either way.
    pub fn render(&self) -> String {
        if self.turns.is_empty() {
            return String::new();
        }

        let mut block = String::from("Prior discussion:\n");
        for turn in &self.turns {
            block.push_str(&format!("{}: {}\n", turn.speaker, turn.content.trim()));
        }
        block.push('\n');
        block
    }
}

impl FromIterator<ContextTurn> for PromptContext {
    fn from_iter<I: IntoIterator<Item = ContextTurn>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
