//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for flow results
///
/// This is a domain concept representing how the output should be formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Every step followed by the final response
    Full,
    /// Only the final response (default)
    Final,
    /// JSON output
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Final
    }
}
