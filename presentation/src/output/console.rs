//! Console output formatter for flow results

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use flows_domain::{FlowResult, FlowType};
use serde_json::{Value, json};

/// Formats flow results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete flow result
    pub fn format(result: &FlowResult) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(&format!("{} Results", result.flow_type.display_name())));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n\n",
            "Prompt:".cyan().bold(),
            result.original_prompt
        ));

        for step in &result.steps {
            output.push_str(&Self::section_header(&format!(
                "Step {}: {}",
                step.metadata.order, step.metadata.name
            )));
            output.push_str(&format!("{}\n", step.metadata.description.dimmed()));
            output.push_str(&format!("\n{}\n", step.output_text.trim_end()));
        }

        output.push_str(&Self::section_header("Final Response"));
        output.push_str(&format!("\n{}\n", result.final_response));

        if !result.metrics.is_empty() {
            output.push_str(&format!("\n{}\n", "Metrics:".cyan().bold()));
            for (key, value) in &result.metrics {
                output.push_str(&format!("  * {}: {}\n", key, Self::metric_value(value)));
            }
        }

        output.push_str(&format!(
            "\n{} {} ms\n",
            "Duration:".dimmed(),
            result.processing_duration_ms()
        ));

        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    ///
    /// The duration is reported as `processing_duration_ms` rather than the
    /// serde representation of `Duration`.
    pub fn format_json(result: &FlowResult) -> serde_json::Result<String> {
        let mut value = serde_json::to_value(result)?;
        if let Value::Object(map) = &mut value {
            map.remove("processing_duration");
            map.insert(
                "processing_duration_ms".to_string(),
                json!(result.processing_duration_ms() as u64),
            );
        }
        serde_json::to_string_pretty(&value)
    }

    /// Format the final response only (concise output)
    pub fn format_final_only(result: &FlowResult) -> String {
        let mut output = String::new();

        if result.flow_type != FlowType::Direct {
            output.push_str(&format!(
                "{}\n\n",
                format!("=== {} Conclusion ===", result.flow_type.display_name())
                    .cyan()
                    .bold()
            ));
        }

        output.push_str(&result.final_response);
        output.push('\n');

        output
    }

    fn metric_value(value: &Value) -> String {
        match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, result: &FlowResult) -> String {
        Self::format(result)
    }

    fn format_json(&self, result: &FlowResult) -> serde_json::Result<String> {
        Self::format_json(result)
    }

    fn format_final_only(&self, result: &FlowResult) -> String {
        Self::format_final_only(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flows_domain::{OutputFormat, Persona, ProcessingStep};
    use std::collections::BTreeMap;
    use std::time::Duration;

    fn red_team_result() -> FlowResult {
        let flow = FlowType::MultiAgentRedTeam;
        let mut metrics = BTreeMap::new();
        metrics.insert("strategy".to_string(), json!("multi_agent_red_team"));
        metrics.insert("persona_count".to_string(), json!(3));

        FlowResult {
            flow_type: flow,
            original_prompt: "Should we adopt remote work?".to_string(),
            enhanced_prompt: "Problem: Should we adopt remote work?".to_string(),
            full_response: "I agree with the architect. Conclusion: adopt it.".to_string(),
            final_response: "Conclusion: adopt it.".to_string(),
            steps: vec![
                ProcessingStep::new(flow, Persona::Architect, 1, "a-in", "Adopt remote work."),
                ProcessingStep::new(flow, Persona::Skeptic, 2, "s-in", "Collaboration suffers."),
                ProcessingStep::new(
                    flow,
                    Persona::Judge,
                    3,
                    "j-in",
                    "I agree with the architect. Conclusion: adopt it.",
                ),
            ],
            processing_duration: Duration::from_millis(1500),
            response_changed: true,
            metrics,
        }
    }

    #[test]
    fn test_full_output_lists_every_step() {
        colored::control::set_override(false);
        let output = ConsoleFormatter::format(&red_team_result());

        assert!(output.contains("Step 1: Architect Solution"));
        assert!(output.contains("Step 2: Skeptic Critique"));
        assert!(output.contains("Step 3: Judge Decision"));
        assert!(output.contains("Collaboration suffers."));
        assert!(output.contains("persona_count: 3"));
        assert!(output.contains("1500 ms"));
    }

    #[test]
    fn test_final_only_output() {
        colored::control::set_override(false);
        let output = ConsoleFormatter
            .render(&red_team_result(), OutputFormat::Final)
            .unwrap();

        assert!(output.ends_with("Conclusion: adopt it.\n"));
        assert!(!output.contains("Collaboration suffers."));
    }

    #[test]
    fn test_json_output_reports_duration_ms() {
        let output = ConsoleFormatter.render(&red_team_result(), OutputFormat::Json).unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["processing_duration_ms"], 1500);
        assert!(value.get("processing_duration").is_none());
        assert_eq!(value["steps"].as_array().unwrap().len(), 3);
        assert_eq!(value["metrics"]["strategy"], "multi_agent_red_team");
        assert_eq!(value["response_changed"], true);
    }
}
