//! HTML page skeleton for chapter pages.

use std::fmt::Write;

use guidebook_renderer::escape_html;

/// A neighbour page link.
pub(crate) struct NavLink {
    pub href: String,
    pub title: String,
}

/// All data needed to render a page.
pub(crate) struct PageData<'a> {
    pub title: &'a str,
    pub site_name: &'a str,
    pub lang: &'a str,
    pub stylesheet: &'a str,
    pub home_href: &'a str,
    pub contents_href: &'a str,
    pub chapter: Option<String>,
    pub html_content: &'a str,
    pub previous: Option<NavLink>,
    pub next: Option<NavLink>,
}

/// Render a complete standalone HTML page.
pub(crate) fn render_page(page: &PageData<'_>) -> String {
    let mut html = String::with_capacity(page.html_content.len() + 2048);
    let title = escape_html(page.title);
    let site_name = escape_html(page.site_name);

    html.push_str("<!DOCTYPE html>\n");
    let _ = writeln!(html, "<html lang=\"{}\">", escape_html(page.lang));
    html.push_str("<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<meta http-equiv=\"x-ua-compatible\" content=\"ie=edge\">\n");
    html.push_str(
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1, \
         shrink-to-fit=no\">\n",
    );
    let _ = writeln!(html, "<title>{title} \u{2014} {site_name}</title>");
    let _ = writeln!(
        html,
        "<link rel=\"stylesheet\" type=\"text/css\" href=\"{}\">",
        escape_html(page.stylesheet)
    );
    html.push_str("</head>\n<body>\n");

    render_header(&mut html, page, &title, &site_name);

    html.push_str("<main class=\"wrapper text\">\n");
    if let Some(chapter) = &page.chapter {
        let _ = writeln!(html, "<div class=\"chapter\">{}</div>", escape_html(chapter));
    }
    html.push_str(page.html_content);
    html.push_str("\n</main>\n");

    render_footer(&mut html, page);

    html.push_str("</body>\n</html>\n");
    html
}

/// Header: home link, breadcrumb, previous/contents/next.
fn render_header(html: &mut String, page: &PageData<'_>, title: &str, site_name: &str) {
    html.push_str("<header>\n<div class=\"wrapper\">\n<div>\n");
    let _ = writeln!(
        html,
        "<a href=\"{}\">{site_name}</a>",
        escape_html(page.home_href)
    );
    let _ = writeln!(html, "<span class=\"crumbs\">&rsaquo; {title}</span>");
    html.push_str("</div>\n<div>\n");
    if let Some(previous) = &page.previous {
        let _ = writeln!(html, "{} &middot;", previous_link(previous));
    }
    let _ = writeln!(html, "{}", contents_link(page));
    if let Some(next) = &page.next {
        let _ = writeln!(html, "&middot; {}", next_link(next));
    }
    html.push_str("</div>\n</div>\n</header>\n");
}

/// Footer: previous, contents and next in three cells.
fn render_footer(html: &mut String, page: &PageData<'_>) {
    html.push_str("<footer>\n<div class=\"wrapper\">\n");
    let previous = page.previous.as_ref().map(previous_link).unwrap_or_default();
    let _ = writeln!(html, "<div>{previous}</div>");
    let _ = writeln!(html, "<div>{}</div>", contents_link(page));
    let next = page.next.as_ref().map(next_link).unwrap_or_default();
    let _ = writeln!(html, "<div>{next}</div>");
    html.push_str("</div>\n</footer>\n");
}

fn previous_link(link: &NavLink) -> String {
    format!(
        "&lsaquo; <a href=\"{}\" title=\"{}\">Previous</a>",
        escape_html(&link.href),
        escape_html(&link.title)
    )
}

fn next_link(link: &NavLink) -> String {
    format!(
        "<a href=\"{}\" title=\"{}\">Next</a> &rsaquo;",
        escape_html(&link.href),
        escape_html(&link.title)
    )
}

fn contents_link(page: &PageData<'_>) -> String {
    format!(
        "<a href=\"{}\">Contents</a>",
        escape_html(page.contents_href)
    )
}
