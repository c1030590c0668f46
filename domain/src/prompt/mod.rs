//! Prompt templates for flow stages
//!
//! Templates are plain text with `{name}` placeholders, filled by literal
//! substring replacement. There is no templating language and no escaping.

mod direct;
mod red_team;
mod template;

pub use direct::DirectPromptTemplate;
pub use red_team::RedTeamPromptTemplate;
pub use template::render_template;
