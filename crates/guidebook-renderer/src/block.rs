//! Block rules: code figures, headings, callouts, lists, paragraphs.

use std::sync::LazyLock;

use regex::Regex;

use crate::callout::CalloutVariant;
use crate::commonmark::{render_commonmark, starts_table, table_len};
use crate::fence::{Segment, split_fences};
use crate::inline::render_inline;
use crate::renderer::MarkdownBackend;

static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,4})\s+(.+?)\s*$").unwrap());

static UNORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-*]\s+(.*)$").unwrap());

static ORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d+\.\s+(.*)$").unwrap());

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    fn open_tag(self) -> &'static str {
        match self {
            Self::Unordered => "<ul>",
            Self::Ordered => "<ol>",
        }
    }

    fn close_tag(self) -> &'static str {
        match self {
            Self::Unordered => "</ul>",
            Self::Ordered => "</ol>",
        }
    }
}

/// Render markdown lines into output lines.
///
/// Fenced blocks are split off first. Text runs then go through the
/// line-oriented block rules or, with [`MarkdownBackend::CommonMark`],
/// through `pulldown-cmark` with quote runs still rendered as callouts.
pub(crate) fn render_lines(lines: &[&str], backend: MarkdownBackend, out: &mut Vec<String>) {
    for segment in split_fences(lines) {
        match segment {
            Segment::Code(figure) => {
                let mut html = String::new();
                figure.write_html(&mut html);
                out.push(html);
            }
            Segment::Text(text) => match backend {
                MarkdownBackend::Rules => render_text(&text, out),
                MarkdownBackend::CommonMark => render_text_commonmark(&text, out),
            },
        }
    }
}

/// Quote runs become callouts; everything between them is CommonMark.
fn render_text_commonmark(lines: &[&str], out: &mut Vec<String>) {
    let mut pending: Vec<&str> = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        if quote_content(lines[i]).is_some() {
            flush_commonmark(&mut pending, out);
            let run = quote_run(&lines[i..]);
            i += run.len();
            render_quote(&run, MarkdownBackend::CommonMark, out);
        } else {
            pending.push(lines[i]);
            i += 1;
        }
    }
    flush_commonmark(&mut pending, out);
}

fn flush_commonmark(pending: &mut Vec<&str>, out: &mut Vec<String>) {
    if pending.iter().all(|line| line.trim().is_empty()) {
        pending.clear();
        return;
    }
    out.push(render_commonmark(&pending.join("\n")));
    pending.clear();
}

fn render_text(lines: &[&str], out: &mut Vec<String>) {
    let mut list: Option<ListKind> = None;
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];

        if quote_content(line).is_some() {
            close_list(&mut list, out);
            let quoted = quote_run(&lines[i..]);
            i += quoted.len();
            render_quote(&quoted, MarkdownBackend::Rules, out);
            continue;
        }

        if starts_table(&lines[i..]) {
            close_list(&mut list, out);
            let len = table_len(&lines[i..]);
            out.push(render_commonmark(&lines[i..i + len].join("\n")));
            i += len;
            continue;
        }

        if let Some((kind, item)) = list_item(line) {
            if list != Some(kind) {
                close_list(&mut list, out);
                out.push(kind.open_tag().to_owned());
                list = Some(kind);
            }
            out.push(format!("<li>{}</li>", render_inline(item)));
            i += 1;
            continue;
        }

        close_list(&mut list, out);

        if line.trim().is_empty() {
            out.push(String::new());
        } else if let Some(caps) = HEADING.captures(line) {
            let level = caps[1].len();
            out.push(format!("<h{level}>{}</h{level}>", render_inline(&caps[2])));
        } else if line.starts_with('<') {
            out.push(line.to_owned());
        } else {
            let content = render_inline(line.trim());
            if !content.trim().is_empty() {
                out.push(format!("<p>{content}</p>"));
            }
        }
        i += 1;
    }

    close_list(&mut list, out);
}

/// Content of a quoted line with the `> ` prefix stripped. A bare `>` is an
/// empty quoted line.
fn quote_content(line: &str) -> Option<&str> {
    line.strip_prefix("> ")
        .or_else(|| (line.trim_end() == ">").then_some(""))
}

/// Contents of the quoted lines starting at `lines[0]`.
fn quote_run<'a>(lines: &[&'a str]) -> Vec<&'a str> {
    lines.iter().map_while(|&line| quote_content(line)).collect()
}

fn render_quote(lines: &[&str], backend: MarkdownBackend, out: &mut Vec<String>) {
    let variant = CalloutVariant::detect(&lines.join("\n"));
    out.push(variant.open_tag().to_owned());
    let mut inner = Vec::new();
    render_lines(lines, backend, &mut inner);
    trim_blank_lines(&mut inner);
    out.extend(inner);
    out.push(variant.close_tag().to_owned());
}

fn list_item(line: &str) -> Option<(ListKind, &str)> {
    if let Some(caps) = UNORDERED_ITEM.captures(line) {
        return caps.get(1).map(|m| (ListKind::Unordered, m.as_str()));
    }
    ORDERED_ITEM
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| (ListKind::Ordered, m.as_str()))
}

fn close_list(list: &mut Option<ListKind>, out: &mut Vec<String>) {
    if let Some(kind) = list.take() {
        out.push(kind.close_tag().to_owned());
    }
}

/// Drop leading and trailing empty lines.
pub(crate) fn trim_blank_lines(lines: &mut Vec<String>) {
    while lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }
    let leading = lines.iter().take_while(|l| l.is_empty()).count();
    lines.drain(..leading);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(text: &str) -> String {
        let lines: Vec<&str> = text.lines().collect();
        let mut out = Vec::new();
        render_lines(&lines, MarkdownBackend::Rules, &mut out);
        trim_blank_lines(&mut out);
        out.join("\n")
    }

    fn render_commonmark_backend(text: &str) -> String {
        let lines: Vec<&str> = text.lines().collect();
        let mut out = Vec::new();
        render_lines(&lines, MarkdownBackend::CommonMark, &mut out);
        trim_blank_lines(&mut out);
        out.join("\n")
    }

    #[test]
    fn test_heading_levels() {
        assert_eq!(
            render("# One\n## Two\n### Three\n#### Four"),
            "<h1>One</h1>\n<h2>Two</h2>\n<h3>Three</h3>\n<h4>Four</h4>"
        );
    }

    #[test]
    fn test_five_hashes_is_not_a_heading() {
        assert_eq!(render("##### Five"), "<p>##### Five</p>");
    }

    #[test]
    fn test_hash_without_space_is_paragraph() {
        assert_eq!(render("#hashtag"), "<p>#hashtag</p>");
    }

    #[test]
    fn test_heading_inline_markup() {
        assert_eq!(
            render("## Using `Enum.map/2`"),
            "<h2>Using <code>Enum.map/2</code></h2>"
        );
    }

    #[test]
    fn test_code_line_starting_with_hash_is_not_heading() {
        let html = render("```elixir\n# comment\n## also comment\n- not a list\n```");
        assert_eq!(
            html,
            "<figure class=\"code\"><pre><code class=\"language-elixir\">\
             # comment\n## also comment\n- not a list</code></pre></figure>"
        );
        assert!(!html.contains("<h1>"));
        assert!(!html.contains("<li>"));
    }

    #[test]
    fn test_unordered_list() {
        assert_eq!(
            render("- item one\n- item two"),
            "<ul>\n<li>item one</li>\n<li>item two</li>\n</ul>"
        );
    }

    #[test]
    fn test_star_list_marker() {
        assert_eq!(
            render("* first\n* *second*"),
            "<ul>\n<li>first</li>\n<li><em>second</em></li>\n</ul>"
        );
    }

    #[test]
    fn test_ordered_list() {
        assert_eq!(
            render("1. first\n2. second\n10. tenth"),
            "<ol>\n<li>first</li>\n<li>second</li>\n<li>tenth</li>\n</ol>"
        );
    }

    #[test]
    fn test_blank_line_splits_lists() {
        assert_eq!(
            render("- a\n\n- b"),
            "<ul>\n<li>a</li>\n</ul>\n\n<ul>\n<li>b</li>\n</ul>"
        );
    }

    #[test]
    fn test_list_kind_switch_closes_previous() {
        assert_eq!(
            render("- a\n1. b"),
            "<ul>\n<li>a</li>\n</ul>\n<ol>\n<li>b</li>\n</ol>"
        );
    }

    #[test]
    fn test_paragraph_line_closes_list() {
        assert_eq!(
            render("- a\nAfter"),
            "<ul>\n<li>a</li>\n</ul>\n<p>After</p>"
        );
    }

    #[test]
    fn test_bold_line_is_not_a_list() {
        assert_eq!(
            render("**Bold** start"),
            "<p><strong>Bold</strong> start</p>"
        );
    }

    #[test]
    fn test_paragraph_per_line() {
        assert_eq!(render("One\nTwo"), "<p>One</p>\n<p>Two</p>");
    }

    #[test]
    fn test_raw_html_passes_through() {
        assert_eq!(
            render("<div class=\"custom\">\nText\n</div>"),
            "<div class=\"custom\">\n<p>Text</p>\n</div>"
        );
    }

    #[test]
    fn test_note_callout() {
        assert_eq!(
            render("> **Note**: Phoenix uses Plug.\n> Second line."),
            "<div class=\"note\">\n<p><strong>Note</strong>: Phoenix uses Plug.</p>\n\
             <p>Second line.</p>\n</div>"
        );
    }

    #[test]
    fn test_concept_callout_beats_note() {
        let html = render("> **FP Concept: Immutability**\n>\n> **Note**: data is copied.");
        assert!(html.starts_with("<blockquote class=\"fp-concept\">"));
        assert!(html.ends_with("</blockquote>"));
        assert!(!html.contains("class=\"note\""));
    }

    #[test]
    fn test_plain_quote() {
        assert_eq!(
            render("> Simple is better."),
            "<blockquote>\n<p>Simple is better.</p>\n</blockquote>"
        );
    }

    #[test]
    fn test_separate_quote_runs_are_separate_blocks() {
        let html = render("> **Hint**: one\n\n> **Important**: two");
        assert_eq!(
            html,
            "<div class=\"hint\">\n<p><strong>Hint</strong>: one</p>\n</div>\n\n\
             <div class=\"important\">\n<p><strong>Important</strong>: two</p>\n</div>"
        );
    }

    #[test]
    fn test_list_inside_callout() {
        assert_eq!(
            render("> **Hint**: try\n> - this\n> - that"),
            "<div class=\"hint\">\n<p><strong>Hint</strong>: try</p>\n<ul>\n<li>this</li>\n\
             <li>that</li>\n</ul>\n</div>"
        );
    }

    #[test]
    fn test_quote_closes_open_list() {
        assert_eq!(
            render("- a\n> quoted"),
            "<ul>\n<li>a</li>\n</ul>\n<blockquote>\n<p>quoted</p>\n</blockquote>"
        );
    }

    #[test]
    fn test_table() {
        let html = render("Intro\n\n| a | b |\n|---|---|\n| 1 | 2 |\n\nAfter");
        assert!(!html.contains("<p>|"), "{html}");
        assert!(html.starts_with("<p>Intro</p>\n\n<table>"), "{html}");
        assert!(html.contains("<th>a</th><th>b</th>"), "{html}");
        assert!(html.contains("<td>1</td><td>2</td>"), "{html}");
        assert!(html.ends_with("</table>\n\n<p>After</p>"), "{html}");
    }

    #[test]
    fn test_table_closes_open_list() {
        let html = render("- a\n| x |\n|---|\n| 1 |");
        assert!(html.starts_with("<ul>\n<li>a</li>\n</ul>\n<table>"), "{html}");
    }

    #[test]
    fn test_pipe_line_without_delimiter_is_paragraph() {
        assert_eq!(render("| not a table |"), "<p>| not a table |</p>");
    }

    #[test]
    fn test_commonmark_backend_text() {
        let html = render_commonmark_backend("## Setup\n\nRun **`mix deps.get`** first.\n\n- a\n- b");
        assert!(html.contains("<h2>Setup</h2>"), "{html}");
        assert!(
            html.contains("<p>Run <strong><code>mix deps.get</code></strong> first.</p>"),
            "{html}"
        );
        assert!(html.contains("<li>a</li>"), "{html}");
    }

    #[test]
    fn test_commonmark_backend_keeps_figures_and_callouts() {
        let html = render_commonmark_backend(
            "Text\n\n```elixir\n# File: lib/a.ex\n**x**\n```\n\n> **Note**: careful\n\n| a |\n|---|\n| 1 |",
        );
        assert!(
            html.contains(
                "<figure class=\"code\"><figcaption>File: lib/a.ex</figcaption>\
                 <pre><code class=\"language-elixir\">**x**</code></pre></figure>"
            ),
            "{html}"
        );
        assert!(html.contains("<div class=\"note\">\n<p><strong>Note</strong>: careful</p>\n</div>"), "{html}");
        assert!(html.contains("<td>1</td>"), "{html}");
        assert!(!html.contains("&gt; "), "{html}");
    }
}
