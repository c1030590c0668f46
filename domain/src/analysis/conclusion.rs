//! Conclusion extraction from judge output.

use regex::Regex;
use std::sync::LazyLock;

/// Markers that introduce the judge's conclusion, matched case-insensitively.
///
/// When two markers start at the same position the one listed first wins,
/// so longer markers come before their suffixes ("in conclusion:" before
/// "conclusion:").
pub const CONCLUSION_MARKERS: [&str; 6] = [
    "in conclusion:",
    "conclusion:",
    "therefore,",
    "in summary:",
    "final decision:",
    "final synthesis:",
];

static CONCLUSION_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = CONCLUSION_MARKERS
        .iter()
        .map(|m| regex::escape(m))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!("(?i){alternation}")).expect("conclusion marker pattern is valid")
});

/// Extract the final response from the judge's text.
///
/// Returns the text from the earliest conclusion marker to the end,
/// trimmed. Without any marker the judge text is returned unchanged.
///
/// # Examples
///
/// ```
/// use flows_domain::extract_final_response;
///
/// assert_eq!(
///     extract_final_response("Lorem ipsum. In conclusion: X wins."),
///     "In conclusion: X wins."
/// );
/// assert_eq!(extract_final_response("No marker here."), "No marker here.");
/// ```
pub fn extract_final_response(judge_text: &str) -> String {
    match CONCLUSION_MARKER.find(judge_text) {
        Some(m) => judge_text[m.start()..].trim().to_string(),
        None => judge_text.to_string(),
    }
}
