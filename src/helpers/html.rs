//! HTML helper functions

/// Escape text for use in element content and quoted attributes
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Generate a button-styled anchor tag
///
/// # Examples
/// ```ignore
/// button_link("blogs.html", "View all blogs")
/// ```
pub fn button_link(href: &str, text: &str) -> String {
    format!(
        r#"<a href="{}" class="btn btn-primary" style="margin-top: 2rem;">{}</a>"#,
        html_escape(href),
        html_escape(text)
    )
}
