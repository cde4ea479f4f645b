//! String helpers for report formatting.

/// Wrap text to the given column width on word boundaries.
///
/// Whitespace runs (including newlines) collapse to single spaces before
/// wrapping, so pre-wrapped input re-flows to the requested width. A word
/// longer than the width occupies its own line unbroken.
pub fn wrap_text(text: &str, width: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.len() + 1 + word.len() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_short_text_unchanged() {
        assert_eq!(wrap_text("hello world", 80), "hello world");
    }

    #[test]
    fn test_wrap_respects_width() {
        let text = "the quick brown fox jumps over the lazy dog";
        let wrapped = wrap_text(text, 15);
        for line in wrapped.lines() {
            assert!(line.len() <= 15, "line {line:?} exceeds width");
        }
        // Re-joining recovers every word in order.
        let rejoined: Vec<&str> = wrapped.split_whitespace().collect();
        let original: Vec<&str> = text.split_whitespace().collect();
        assert_eq!(rejoined, original);
    }

    #[test]
    fn test_wrap_collapses_existing_newlines() {
        assert_eq!(wrap_text("one\ntwo\nthree", 80), "one two three");
    }

    #[test]
    fn test_wrap_oversized_word_kept_whole() {
        let long = "a".repeat(40);
        let wrapped = wrap_text(&format!("x {long} y"), 10);
        assert!(wrapped.lines().any(|l| l == long));
    }

    #[test]
    fn test_wrap_empty() {
        assert_eq!(wrap_text("", 150), "");
        assert_eq!(wrap_text("   \n  ", 150), "");
    }
}
