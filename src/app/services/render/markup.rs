use pulldown_cmark::{Event, Options, Parser, html};

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render a free-text field as Markdown. Raw HTML in the source is shown as
/// text rather than passed through.
pub fn render_markdown(text: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(text, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    html_output.trim_end().to_string()
}

/// "start - end", with "Present" for an ongoing entry. Empty when both dates
/// are blank and the entry is not ongoing. The result is not escaped.
pub(super) fn date_range(start: &str, end: &str, current: bool, separator: &str) -> String {
    let end = if current { "Present" } else { end.trim() };
    let start = start.trim();
    match (start.is_empty(), end.is_empty()) {
        (true, true) => String::new(),
        (false, true) => start.to_string(),
        (true, false) => end.to_string(),
        (false, false) => format!("{}{}{}", start, separator, end),
    }
}

/// `<section>` with a heading, or nothing when `body` is empty.
pub(super) fn section(class: &str, heading: &str, body: &str) -> String {
    if body.is_empty() {
        return String::new();
    }
    format!(
        "<section class=\"{}\"><h2>{}</h2>{}</section>",
        class, heading, body
    )
}

/// `<tag class=..>escaped text</tag>` for non-blank text, else nothing.
pub(super) fn text_element(tag: &str, class: &str, text: &str) -> String {
    if text.trim().is_empty() {
        return String::new();
    }
    format!("<{0} class=\"{1}\">{2}</{0}>", tag, class, escape_html(text.trim()))
}

/// Rendered Markdown inside a `<div>`, or nothing for blank text.
pub(super) fn markdown_block(class: &str, text: &str) -> String {
    if text.trim().is_empty() {
        return String::new();
    }
    format!("<div class=\"{}\">{}</div>", class, render_markdown(text))
}

/// `<ul>` of the non-blank items, or nothing.
pub(super) fn bullet_list(class: &str, items: &[String]) -> String {
    let lis: String = items
        .iter()
        .filter(|item| !item.trim().is_empty())
        .map(|item| format!("<li>{}</li>", escape_html(item.trim())))
        .collect();
    if lis.is_empty() {
        return String::new();
    }
    format!("<ul class=\"{}\">{}</ul>", class, lis)
}

/// Project link as an anchor. Only http(s) and mailto targets become `href`s.
pub(super) fn link(url: &str) -> String {
    let url = url.trim();
    if url.is_empty() {
        return String::new();
    }
    let lower = url.to_ascii_lowercase();
    let safe = lower.starts_with("http://")
        || lower.starts_with("https://")
        || lower.starts_with("mailto:");
    let href = if safe {
        url.to_string()
    } else if lower.contains(':') {
        return escape_html(url);
    } else {
        format!("https://{}", url)
    };
    format!(
        "<a href=\"{}\" rel=\"noopener noreferrer\">{}</a>",
        escape_html(&href),
        escape_html(url)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
        assert_eq!(escape_html("Zoë"), "Zoë");
    }

    #[test]
    fn test_render_markdown_emphasis() {
        assert_eq!(render_markdown("Built **fast** things"), "<p>Built <strong>fast</strong> things</p>");
    }

    #[test]
    fn test_render_markdown_escapes_raw_html() {
        let html = render_markdown("<img src=x onerror=alert(1)>");
        assert!(!html.contains("<img"));
        assert!(html.contains("&lt;img"));
    }

    #[test]
    fn test_date_range() {
        assert_eq!(date_range("2020", "2022", false, " - "), "2020 - 2022");
        assert_eq!(date_range("2020", "2022", true, " - "), "2020 - Present");
        assert_eq!(date_range("", "", false, " - "), "");
        assert_eq!(date_range("", "", true, " - "), "Present");
        assert_eq!(date_range("2019", "", false, " - "), "2019");
    }

    #[test]
    fn test_section_skips_empty_body() {
        assert_eq!(section("skills", "Skills", ""), "");
        assert_eq!(
            section("skills", "Skills", "<ul></ul>"),
            "<section class=\"skills\"><h2>Skills</h2><ul></ul></section>"
        );
    }

    #[test]
    fn test_bullet_list_drops_blank_items() {
        let items = vec!["One".to_string(), "  ".to_string(), "Two".to_string()];
        assert_eq!(bullet_list("x", &items), "<ul class=\"x\"><li>One</li><li>Two</li></ul>");
        assert_eq!(bullet_list("x", &[]), "");
    }

    #[test]
    fn test_link_targets() {
        assert_eq!(
            link("example.com"),
            "<a href=\"https://example.com\" rel=\"noopener noreferrer\">example.com</a>"
        );
        assert!(link("https://a.dev/x?y=1&z=2").contains("href=\"https://a.dev/x?y=1&amp;z=2\""));
        assert_eq!(link("javascript:alert(1)"), "javascript:alert(1)");
        assert_eq!(link("  "), "");
    }
}
