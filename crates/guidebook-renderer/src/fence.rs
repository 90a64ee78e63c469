//! Fenced code blocks and code figures.
//!
//! Fences are split out of the line stream before any other block rule runs,
//! so nothing inside a fence is ever treated as markdown.

use std::fmt::Write;
use std::sync::LazyLock;

use regex::Regex;

use crate::util::escape_html;

const FENCE: &str = "```";

static FILE_CAPTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#\s*File:\s*(.+?)\s*$").unwrap());

/// Whether a line opens a fence.
pub(crate) fn is_fence_open(line: &str) -> bool {
    fence_info(line).is_some()
}

/// Info string of an opening fence line.
///
/// An info string containing a backtick means the line is an inline code
/// span such as ```` ```mix test``` runs ````, not a fence.
fn fence_info(line: &str) -> Option<&str> {
    line.trim_start()
        .strip_prefix(FENCE)
        .filter(|info| !info.contains('`'))
}

/// Whether a line closes an open fence.
pub(crate) fn is_fence_close(line: &str) -> bool {
    line.trim() == FENCE
}

/// A run of lines: either markdown text or one fenced block.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Segment<'a> {
    Text(Vec<&'a str>),
    Code(CodeFigure<'a>),
}

/// A fenced code block ready to be written as a `<figure>`.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct CodeFigure<'a> {
    pub lang: Option<&'a str>,
    pub caption: Option<&'a str>,
    pub lines: Vec<&'a str>,
}

impl CodeFigure<'_> {
    /// Write the figure markup. Code text is escaped, never interpreted.
    pub(crate) fn write_html(&self, out: &mut String) {
        out.push_str(r#"<figure class="code">"#);
        if let Some(caption) = self.caption {
            write!(
                out,
                "<figcaption>File: {}</figcaption>",
                escape_html(caption)
            )
            .unwrap();
        }
        match self.lang {
            Some(lang) => write!(
                out,
                r#"<pre><code class="language-{}">"#,
                escape_html(lang)
            )
            .unwrap(),
            None => out.push_str("<pre><code>"),
        }
        out.push_str(&escape_html(&self.lines.join("\n")));
        out.push_str("</code></pre></figure>");
    }
}

/// Split lines into text runs and fenced blocks, in textual order.
///
/// A fence opens on a line starting with three backticks, optionally followed
/// by a language tag without backticks, and closes on the next line consisting only of three
/// backticks. A fence left open runs to the end of the input.
pub(crate) fn split_fences<'a>(lines: &[&'a str]) -> Vec<Segment<'a>> {
    let mut segments = Vec::new();
    let mut text = Vec::new();
    let mut iter = lines.iter();

    while let Some(&line) = iter.next() {
        let Some(info) = fence_info(line) else {
            text.push(line);
            continue;
        };

        if !text.is_empty() {
            segments.push(Segment::Text(std::mem::take(&mut text)));
        }

        let mut body = Vec::new();
        let mut closed = false;
        for &inner in iter.by_ref() {
            if is_fence_close(inner) {
                closed = true;
                break;
            }
            body.push(inner);
        }
        if !closed {
            tracing::debug!("unclosed code fence runs to end of document");
        }

        let caption = body
            .first()
            .and_then(|first| FILE_CAPTION.captures(first))
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str());
        if caption.is_some() {
            body.remove(0);
        }

        segments.push(Segment::Code(CodeFigure {
            lang: language_tag(info),
            caption,
            lines: body,
        }));
    }

    if !text.is_empty() {
        segments.push(Segment::Text(text));
    }
    segments
}

/// First token of a fence info string, e.g. `elixir` in ```` ```elixir ````.
fn language_tag(info: &str) -> Option<&str> {
    info.trim()
        .split(|c: char| c.is_whitespace() || c == ',' || c == '{')
        .next()
        .filter(|tag| !tag.is_empty())
}
