//! HTML helper functions

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Generate an anchor tag; `text` is escaped, `href` must already be a URL
pub fn link_to(href: &str, text: &str, class: Option<&str>) -> String {
    let class_attr = class
        .map(|c| format!(r#" class="{}""#, html_escape(c)))
        .unwrap_or_default();
    format!(
        r#"<a href="{}"{}>{}</a>"#,
        html_escape(href),
        class_attr,
        html_escape(text)
    )
}

/// The error block shown in place of content that failed to load
pub fn error_block(message: &str, link: Option<(&str, &str)>) -> String {
    let mut html = format!(
        "<div class=\"error\">\n<p>{}</p>\n",
        html_escape(message)
    );
    if let Some((href, text)) = link {
        html.push_str(&format!("<p>{}</p>\n", link_to(href, text, None)));
    }
    html.push_str("</div>");
    html
}
