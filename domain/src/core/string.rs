//! String utilities for the domain layer.

/// Truncate a string to a maximum length with ellipsis (UTF-8 safe)
///
/// Uses byte length for max_len but ensures truncation occurs at valid
/// UTF-8 character boundaries. Used for log previews of model output.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let target = max_len.saturating_sub(3);
        let mut end = target.min(s.len());
        while end > 0 && !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &s[..end])
    }
}

/// Collapse a possibly multi-line text into a single line preview.
pub fn single_line_preview(s: &str, max_len: usize) -> String {
    let joined = s.split_whitespace().collect::<Vec<_>>().join(" ");
    truncate(&joined, max_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
    }

    #[test]
    fn test_truncate_multibyte() {
        // 'の' is 3 bytes; cutting inside it backs up to the previous boundary
        assert_eq!(truncate("あのねあのね", 30), "あのねあのね");
        assert_eq!(truncate("あのねあのね", 10), "あの...");
    }

    #[test]
    fn test_single_line_preview() {
        assert_eq!(
            single_line_preview("First line\n\n  second   line", 100),
            "First line second line"
        );
        assert_eq!(single_line_preview("a b c d e f", 8), "a b c...");
    }
}
