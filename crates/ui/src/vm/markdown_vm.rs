use std::collections::{HashMap, HashSet};

/// Render question text as sanitized HTML.
///
/// Question files are user-supplied, so raw HTML embedded in the Markdown is
/// filtered down to a small inline/block allowlist.
#[must_use]
pub fn markdown_to_html(input: &str) -> String {
    let mut options = pulldown_cmark::Options::empty();
    options.insert(pulldown_cmark::Options::ENABLE_STRIKETHROUGH);
    options.insert(pulldown_cmark::Options::ENABLE_TABLES);

    let parser = pulldown_cmark::Parser::new_ext(input, options);
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);
    sanitize_html(&html)
}

#[must_use]
pub fn sanitize_html(html: &str) -> String {
    let tags: HashSet<&str> = [
        "p", "div", "span", "br", "em", "strong", "b", "i", "del", "code", "pre", "blockquote",
        "ul", "ol", "li", "a", "table", "thead", "tbody", "tr", "th", "td",
    ]
    .into_iter()
    .collect();

    let mut attributes: HashMap<&str, HashSet<&str>> = HashMap::new();
    attributes.insert("a", ["href"].into_iter().collect());

    ammonia::Builder::new()
        .tags(tags)
        .tag_attributes(attributes)
        .clean(html)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::markdown_to_html;

    #[test]
    fn renders_inline_code_and_emphasis() {
        let html = markdown_to_html("What does `Vec::new()` **allocate**?");
        assert!(html.contains("<code>Vec::new()</code>"), "{html}");
        assert!(html.contains("<strong>allocate</strong>"), "{html}");
    }

    #[test]
    fn strips_scripts_and_unsafe_links() {
        let html = markdown_to_html("<script>alert(1)</script>\n\n[Link](javascript:alert(1))");
        assert!(!html.contains("<script"), "{html}");
        assert!(!html.contains("javascript:"), "{html}");
        assert!(html.contains("Link"), "{html}");
    }

    #[test]
    fn escapes_plain_angle_brackets() {
        let html = markdown_to_html("Is 2 < 3?");
        assert!(html.contains("2 &lt; 3"), "{html}");
    }
}
