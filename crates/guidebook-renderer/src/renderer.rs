//! Fragment renderer entry point.

use std::borrow::Cow;

use crate::block::{render_lines, trim_blank_lines};
use crate::chapter::{ChapterLabel, extract_chapter_label};

/// Result of rendering one markdown document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderResult {
    /// HTML fragment (body content only).
    pub html: String,
    /// Chapter label taken from a `# Chapter N: ...` heading (if extraction
    /// was enabled and a heading was found).
    pub chapter: Option<ChapterLabel>,
}

/// Engine used for text between code figures and callouts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MarkdownBackend {
    /// Line-oriented rules: headings, lists, paragraphs, inline formatting,
    /// with GFM tables delegated to `pulldown-cmark`.
    #[default]
    Rules,
    /// Full CommonMark (plus GFM tables and strikethrough) via `pulldown-cmark`.
    CommonMark,
}

/// Renders the guide's markdown subset to an HTML fragment.
///
/// Stateless; one renderer can be reused for every document of a build.
#[derive(Clone, Debug, Default)]
pub struct FragmentRenderer {
    extract_chapter: bool,
    backend: MarkdownBackend,
}

impl FragmentRenderer {
    /// Create a renderer with chapter extraction disabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable chapter label extraction.
    ///
    /// The first `# Chapter N: ...` line outside fenced code is removed from
    /// the body and returned as [`RenderResult::chapter`].
    #[must_use]
    pub fn with_chapter_extraction(mut self) -> Self {
        self.extract_chapter = true;
        self
    }

    /// Select the engine for plain text runs.
    ///
    /// `# File:` figures and callouts are recognised with either backend.
    #[must_use]
    pub fn with_backend(mut self, backend: MarkdownBackend) -> Self {
        self.backend = backend;
        self
    }

    /// Render markdown text to an HTML fragment.
    pub fn render(&self, markdown: &str) -> RenderResult {
        let normalized = normalize_line_endings(markdown);
        let (chapter, body) = if self.extract_chapter {
            extract_chapter_label(&normalized)
        } else {
            (None, Cow::Borrowed(normalized.as_ref()))
        };

        let lines: Vec<&str> = body.lines().collect();
        let mut out = Vec::with_capacity(lines.len());
        render_lines(&lines, self.backend, &mut out);
        trim_blank_lines(&mut out);

        RenderResult {
            html: out.join("\n"),
            chapter,
        }
    }
}

fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(text)
    }
}
