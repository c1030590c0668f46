//! Prompt templates for the Multi-Agent Red-Team flow

use crate::prompt::template::render_template;

/// Templates and configuration keys for the Architect → Skeptic → Judge flow
pub struct RedTeamPromptTemplate;

impl RedTeamPromptTemplate {
    /// Configuration key overriding the architect template
    pub const ARCHITECT_KEY: &'static str = "architect_prompt";
    /// Configuration key overriding the skeptic template
    pub const SKEPTIC_KEY: &'static str = "skeptic_prompt";
    /// Configuration key overriding the judge template
    pub const JUDGE_KEY: &'static str = "judge_prompt";

    /// All template override keys; never forwarded as model parameters
    pub const KEYS: [&'static str; 3] = [Self::ARCHITECT_KEY, Self::SKEPTIC_KEY, Self::JUDGE_KEY];

    /// Default architect template
    pub fn default_architect() -> &'static str {
        r#"You are the Architect in an internal red-team review.
Your task is to design the strongest possible answer to the problem below.
Lay out your position, the reasoning that supports it, and the evidence or examples you would rely on.

{context}Problem:
{prompt}

Provide a complete, well-structured solution."#
    }

    /// Default skeptic template
    pub fn default_skeptic() -> &'static str {
        r#"You are the Skeptic in an internal red-team review.
Your task is to find every weakness in the Architect's solution: flawed assumptions, missing evidence, risks, and counterexamples.
Be rigorous and specific. Do not propose a solution of your own unless it exposes a flaw.

{context}Problem:
{prompt}

Architect's solution:
{architect_solution}

Provide your critique."#
    }

    /// Default judge template
    pub fn default_judge() -> &'static str {
        r#"You are the Judge in an internal red-team review.
Weigh the Architect's solution against the Skeptic's critique.
State clearly whether you agree with the architect or with the skeptic, explain why, and keep the parts of each that survive scrutiny.

{context}Problem:
{prompt}

Architect's solution:
{architect_solution}

Skeptic's critique:
{skeptic_critique}

End your answer with a section that starts with "Conclusion:" containing your final synthesis."#
    }

    /// Render the architect-stage prompt
    pub fn architect(template: &str, problem: &str, context: &str) -> String {
        render_template(template, &[("prompt", problem), ("context", context)])
    }

    /// Render the skeptic-stage prompt
    pub fn skeptic(
        template: &str,
        problem: &str,
        architect_solution: &str,
        context: &str,
    ) -> String {
        render_template(
            template,
            &[
                ("prompt", problem),
                ("architect_solution", architect_solution),
                ("context", context),
            ],
        )
    }

    /// Render the judge-stage prompt
    pub fn judge(
        template: &str,
        problem: &str,
        architect_solution: &str,
        skeptic_critique: &str,
        context: &str,
    ) -> String {
        render_template(
            template,
            &[
                ("prompt", problem),
                ("architect_solution", architect_solution),
                ("skeptic_critique", skeptic_critique),
                ("context", context),
            ],
        )
    }
}
