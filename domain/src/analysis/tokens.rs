//! Tokenization for lexical comparisons.

use std::collections::HashSet;

/// Minimum token length (exclusive) for a token to count as significant.
pub const MIN_SIGNIFICANT_LEN: usize = 3;

/// Split on non-word characters, lower-case, and keep tokens longer than
/// [`MIN_SIGNIFICANT_LEN`] characters.
pub fn significant_tokens(text: &str) -> HashSet<String> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|t| t.chars().count() > MIN_SIGNIFICANT_LEN)
        .map(str::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_tokens_dropped() {
        let tokens = significant_tokens("The cat sat on a very warm mat");
        assert_eq!(tokens.len(), 2);
        assert!(tokens.contains("very"));
        assert!(tokens.contains("warm"));
    }

    #[test]
    fn test_split_on_punctuation_and_lowercase() {
        let tokens = significant_tokens("Hybrid-policy, HYBRID policy!");
        assert_eq!(tokens.len(), 2);
        assert!(tokens.contains("hybrid"));
        assert!(tokens.contains("policy"));
    }

    #[test]
    fn test_length_counts_characters() {
        // 4 characters, 8 bytes
        assert!(significant_tokens("éééé").contains("éééé"));
        assert!(significant_tokens("ééé").is_empty());
    }
}
