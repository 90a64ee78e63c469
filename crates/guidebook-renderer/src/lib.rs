//! Markdown to HTML fragment renderer for guidebook chapters.
//!
//! [`FragmentRenderer`] turns one chapter's markdown into an HTML fragment
//! (body content only, no page chrome). It understands a deliberately narrow
//! markdown subset plus two guide-specific extensions:
//!
//! - Fenced code blocks whose first line is `# File: <path>` become captioned
//!   code figures.
//! - Quote blocks are rendered as callouts (`FP Concept`, `Note`, `Important`,
//!   `Hint`) or plain quotes, see [`CalloutVariant`].
//!
//! GFM tables are rendered through `pulldown-cmark`. Selecting
//! [`MarkdownBackend::CommonMark`] hands every text run to `pulldown-cmark`
//! while keeping the figure and callout extensions.
//!
//! Rules are applied in a fixed order. Fenced code is split out first and
//! never reaches the heading, callout, list, paragraph, or inline rules.
//! Inline code spans are likewise shielded from emphasis and link rules.
//!
//! # Example
//!
//! ```
//! use guidebook_renderer::FragmentRenderer;
//!
//! let result = FragmentRenderer::new()
//!     .with_chapter_extraction()
//!     .render("# Chapter 2: Foundations\n\nSome *intro* text.\n");
//!
//! assert_eq!(result.chapter.unwrap().to_string(), "Chapter 2");
//! assert_eq!(result.html, "<p>Some <em>intro</em> text.</p>");
//! ```

mod block;
mod callout;
mod chapter;
mod commonmark;
mod fence;
mod inline;
mod renderer;
mod util;

pub use callout::CalloutVariant;
pub use chapter::{ChapterLabel, extract_chapter_label};
pub use renderer::{FragmentRenderer, MarkdownBackend, RenderResult};
pub use util::escape_html;
