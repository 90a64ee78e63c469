//! Shared helpers for HTML output.

/// Escape HTML special characters.
///
/// # Examples
///
/// ```
/// use guidebook_renderer::escape_html;
///
/// assert_eq!(escape_html("Vec<&str>"), "Vec&lt;&amp;str&gt;");
/// ```
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_special_characters() {
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(escape_html("a&b"), "a&amp;b");
        assert_eq!(escape_html("\"hello\""), "&quot;hello&quot;");
        assert_eq!(escape_html("Let's"), "Let&#x27;s");
    }

    #[test]
    fn escape_leaves_plain_text() {
        assert_eq!(
            escape_html("# not a heading *or emphasis*"),
            "# not a heading *or emphasis*"
        );
    }
}
