//! Chapter heading extraction.
//!
//! A chapter file usually opens with `# Chapter 4: Database-Driven Responses`.
//! That line is not rendered as a heading: its number becomes the page's
//! chapter banner and the line is removed from the body.

use std::borrow::Cow;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::fence::{is_fence_close, is_fence_open};

static CHAPTER_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^# Chapter (\d+(?:\.\d+)*):?[ \t]*(.*?)[ \t]*$").unwrap()
});

/// Chapter number captured from a `# Chapter N: ...` heading.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChapterLabel {
    /// Dotted chapter number, e.g. `"4"` or `"2.1"`.
    pub number: String,
    /// Heading text after the number, if any.
    pub subtitle: Option<String>,
}

impl fmt::Display for ChapterLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Chapter {}", self.number)
    }
}

/// Find the first chapter heading outside fenced code and strip it.
///
/// Returns the label (if a heading was found) and the body with that single
/// line removed. The body is borrowed unchanged when nothing matches.
///
/// # Examples
///
/// ```
/// use guidebook_renderer::extract_chapter_label;
///
/// let (label, body) = extract_chapter_label("# Chapter 2.1: Setup\nText\n");
/// assert_eq!(label.unwrap().to_string(), "Chapter 2.1");
/// assert_eq!(body, "Text\n");
/// ```
pub fn extract_chapter_label(markdown: &str) -> (Option<ChapterLabel>, Cow<'_, str>) {
    let mut offset = 0;
    let mut in_fence = false;

    for line in markdown.split_inclusive('\n') {
        let start = offset;
        offset += line.len();

        let content = line.trim_end_matches(['\n', '\r']);
        if in_fence {
            in_fence = !is_fence_close(content);
            continue;
        }
        if is_fence_open(content) {
            in_fence = true;
            continue;
        }

        if let Some(caps) = CHAPTER_HEADING.captures(content) {
            let label = ChapterLabel {
                number: caps[1].to_owned(),
                subtitle: caps
                    .get(2)
                    .map(|m| m.as_str().to_owned())
                    .filter(|s| !s.is_empty()),
            };
            let mut body = String::with_capacity(markdown.len() - line.len());
            body.push_str(&markdown[..start]);
            body.push_str(&markdown[offset..]);
            return (Some(label), Cow::Owned(body));
        }
    }

    (None, Cow::Borrowed(markdown))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extracts_number_and_subtitle() {
        let (label, body) = extract_chapter_label("# Chapter 4: Database-Driven Responses\n\nIntro\n");
        let label = label.unwrap();
        assert_eq!(label.number, "4");
        assert_eq!(label.subtitle.as_deref(), Some("Database-Driven Responses"));
        assert_eq!(label.to_string(), "Chapter 4");
        assert_eq!(body, "\nIntro\n");
    }

    #[test]
    fn test_dotted_number() {
        let (label, _) = extract_chapter_label("# Chapter 12.3.1: Deep\n");
        assert_eq!(label.unwrap().number, "12.3.1");
    }

    #[test]
    fn test_colon_is_optional() {
        let (label, body) = extract_chapter_label("# Chapter 7 Advanced Routing\nbody");
        let label = label.unwrap();
        assert_eq!(label.number, "7");
        assert_eq!(label.subtitle.as_deref(), Some("Advanced Routing"));
        assert_eq!(body, "body");
    }

    #[test]
    fn test_no_space_after_colon() {
        let (label, body) = extract_chapter_label("# Chapter 2:Foundations\nText\n");
        let label = label.unwrap();
        assert_eq!(label.to_string(), "Chapter 2");
        assert_eq!(label.subtitle.as_deref(), Some("Foundations"));
        assert_eq!(body, "Text\n");
    }

    #[test]
    fn test_number_only() {
        let (label, body) = extract_chapter_label("# Chapter 3\n");
        let label = label.unwrap();
        assert_eq!(label.number, "3");
        assert_eq!(label.subtitle, None);
        assert_eq!(body, "");
    }

    #[test]
    fn test_only_first_heading_is_consumed() {
        let (label, body) =
            extract_chapter_label("Lead\n# Chapter 1: One\nMiddle\n# Chapter 2: Two\n");
        assert_eq!(label.unwrap().number, "1");
        assert_eq!(body, "Lead\nMiddle\n# Chapter 2: Two\n");
    }

    #[test]
    fn test_ignores_other_headings() {
        let input = "# Introduction\n## Chapter 2: Not level one\n";
        let (label, body) = extract_chapter_label(input);
        assert_eq!(label, None);
        assert!(matches!(body, Cow::Borrowed(_)));
        assert_eq!(body, input);
    }

    #[test]
    fn test_requires_number() {
        let (label, _) = extract_chapter_label("# Chapter Two: Words\n");
        assert_eq!(label, None);
    }

    #[test]
    fn test_skips_headings_inside_fences() {
        let input = "```markdown\n# Chapter 9: Example\n```\n# Chapter 5: Real\n";
        let (label, body) = extract_chapter_label(input);
        assert_eq!(label.unwrap().number, "5");
        assert_eq!(body, "```markdown\n# Chapter 9: Example\n```\n");
    }

    #[test]
    fn test_crlf_line_is_removed_whole() {
        let (label, body) = extract_chapter_label("# Chapter 2: Foundations\r\nNext\r\n");
        assert_eq!(label.unwrap().subtitle.as_deref(), Some("Foundations"));
        assert_eq!(body, "Next\r\n");
    }
}
