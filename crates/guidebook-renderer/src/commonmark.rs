//! CommonMark rendering through `pulldown-cmark`.
//!
//! Used for GFM tables under the built-in rules and for whole text runs under
//! [`MarkdownBackend::CommonMark`](crate::MarkdownBackend::CommonMark). Code
//! figures and callouts are handled before text reaches this module.

use std::sync::LazyLock;

use pulldown_cmark::{Event, Options, Parser, html};
use regex::Regex;

static TABLE_DELIMITER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\|?\s*:?-+:?\s*(?:\|\s*:?-+:?\s*)*\|?\s*$").unwrap()
});

fn parser_options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_GFM
}

/// Render markdown text to HTML.
///
/// Soft line breaks become `<br />`, so line breaks inside a paragraph are
/// kept the way authors wrote them.
pub(crate) fn render_commonmark(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, parser_options()).map(|event| match event {
        Event::SoftBreak => Event::HardBreak,
        other => other,
    });
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out.truncate(out.trim_end().len());
    out
}

/// Whether `line` is a GFM table delimiter row such as `|---|:--:|`.
pub(crate) fn is_table_delimiter(line: &str) -> bool {
    line.contains('|') && TABLE_DELIMITER.is_match(line)
}

/// Whether a table starts at `lines[0]`: a pipe row followed by a delimiter row.
pub(crate) fn starts_table(lines: &[&str]) -> bool {
    match lines {
        [header, delimiter, ..] => {
            header.trim_start().starts_with('|') && is_table_delimiter(delimiter)
        }
        _ => false,
    }
}

/// Number of lines belonging to the table starting at `lines[0]`.
pub(crate) fn table_len(lines: &[&str]) -> usize {
    lines
        .iter()
        .take_while(|line| !line.trim().is_empty() && line.contains('|'))
        .count()
}
