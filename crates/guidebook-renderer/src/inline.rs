//! Inline rules: emphasis, code spans, links.

use std::fmt::Write;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::util::escape_html;

static CODE_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("\u{E000}(\\d+)\u{E001}").unwrap());

static STRONG_EMPHASIS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*\*(\S(?:.*?\S)?)\*\*\*").unwrap());

static STRONG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(\S(?:.*?\S)?)\*\*").unwrap());

static EMPHASIS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^*\s](?:[^*]*[^*\s])?)\*").unwrap());

static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)\s]+)\)").unwrap());

/// Render the inline markup of one line of text.
///
/// Code spans are swapped for private-use placeholders, so emphasis and link
/// rules see the whole line (and may wrap a code span) but never the code
/// text itself. The escaped `<code>` elements are restored last. Other text
/// is passed through as-is, so inline HTML survives.
pub(crate) fn render_inline(text: &str) -> String {
    let mut spans = Vec::new();
    let shielded = shield_code_spans(text, &mut spans);

    let formatted = format_text(&shielded);
    if spans.is_empty() {
        return formatted;
    }
    CODE_PLACEHOLDER
        .replace_all(&formatted, |caps: &Captures<'_>| {
            caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|i| spans.get(i))
                .cloned()
                .unwrap_or_default()
        })
        .into_owned()
}

/// Replace code spans with numbered placeholders, pushing their HTML to `spans`.
///
/// A span opens with a run of backticks and closes at the next run of the
/// same length. An opening run without a matching close stays literal.
fn shield_code_spans(text: &str, spans: &mut Vec<String>) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find('`') {
        out.push_str(&rest[..open]);
        let run = backtick_run(&rest[open..]);
        let after = &rest[open + run..];
        if let Some(close) = closing_run(after, run) {
            let _ = write!(out, "\u{E000}{}\u{E001}", spans.len());
            spans.push(format!(
                "<code>{}</code>",
                escape_html(strip_padding(&after[..close]))
            ));
            rest = &after[close + run..];
        } else {
            out.push_str(&rest[open..open + run]);
            rest = after;
        }
    }
    out.push_str(rest);
    out
}

fn backtick_run(text: &str) -> usize {
    text.bytes().take_while(|&b| b == b'`').count()
}

/// Byte offset of the next backtick run of exactly `len` backticks.
fn closing_run(text: &str, len: usize) -> Option<usize> {
    let mut offset = 0;
    while let Some(pos) = text[offset..].find('`') {
        let start = offset + pos;
        let run = backtick_run(&text[start..]);
        if run == len {
            return Some(start);
        }
        offset = start + run;
    }
    None
}

/// A single space on both sides of the code is padding and is dropped.
fn strip_padding(code: &str) -> &str {
    match code.strip_prefix(' ').and_then(|c| c.strip_suffix(' ')) {
        Some(inner) if !inner.trim().is_empty() => inner,
        _ => code,
    }
}

/// Emphasis, then links. Bold runs before italic so `**x**` is never read
/// as two single-asterisk markers.
fn format_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let text = STRONG_EMPHASIS.replace_all(text, "<strong><em>${1}</em></strong>");
    let text = STRONG.replace_all(&text, "<strong>${1}</strong>");
    let text = EMPHASIS.replace_all(&text, "<em>${1}</em>");
    LINK.replace_all(&text, r#"<a href="${2}">${1}</a>"#)
        .into_owned()
}
