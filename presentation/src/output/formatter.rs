//! Output formatter trait

use flows_domain::{FlowResult, OutputFormat};

/// Trait for formatting flow results
pub trait OutputFormatter {
    /// Format every step followed by the final response
    fn format(&self, result: &FlowResult) -> String;

    /// Format as JSON
    fn format_json(&self, result: &FlowResult) -> serde_json::Result<String>;

    /// Format the final response only (concise output)
    fn format_final_only(&self, result: &FlowResult) -> String;

    /// Format according to `format`
    ///
    /// Only JSON output can fail.
    fn render(&self, result: &FlowResult, format: OutputFormat) -> serde_json::Result<String> {
        match format {
            OutputFormat::Full => Ok(self.format(result)),
            OutputFormat::Final => Ok(self.format_final_only(result)),
            OutputFormat::Json => self.format_json(result),
        }
    }
}
