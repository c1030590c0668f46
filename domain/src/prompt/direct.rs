//! Prompt template for the Direct flow

use crate::prompt::template::render_template;

/// Template and configuration key for the single-call flow
pub struct DirectPromptTemplate;

impl DirectPromptTemplate {
    /// Configuration key overriding the direct template
    pub const KEY: &'static str = "direct_prompt";

    /// Default template: prior context (if any) followed by the prompt
    pub fn default_template() -> &'static str {
        "{context}{prompt}"
    }

    pub fn render(template: &str, prompt: &str, context: &str) -> String {
        render_template(template, &[("prompt", prompt), ("context", context)])
    }
}
