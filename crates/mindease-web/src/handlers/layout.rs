//! Page shell shared by every server-rendered page.

/// Navigation HTML template shared across all pages
pub const NAV_HTML: &str = include_str!("../../templates/nav.html");

const FOOTER_HTML: &str = r#"<footer class="footer">
    <p>MindEase is a research prototype and not a substitute for professional care.
    In a crisis, call or text <a href="tel:988">988</a>.</p>
    <p><a href="/privacy">Privacy</a> · <a href="/safety">Safety</a> · <a href="/contact">Contact</a></p>
</footer>"#;

/// Wrap `body` in the document head, navigation and footer.
/// `active` is the nav link id suffix to highlight (e.g. "chat").
pub fn render_page(title: &str, active: &str, body: &str) -> String {
    let nav = NAV_HTML.replace(
        &format!(r#"id="nav_{}""#, active),
        &format!(r#"id="nav_{}" class="active""#, active),
    );

    format!(r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{} — MindEase</title>
    <link rel="stylesheet" href="/static/css/main.css">
</head>
<body>
{}
<main class="main-content">
{}
</main>
{}
</body>
</html>"#, escape_html(title), nav, body, FOOTER_HTML)
}

/// Escape text for safe inclusion in HTML element content or attributes.
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

/// Blue banner marking placeholder content.
pub fn mock_notice(text: &str) -> String {
    format!(r#"<div class="alert alert-info">{}</div>"#, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"<b>"hi" & 'bye'</b>"#),
            "&lt;b&gt;&quot;hi&quot; &amp; &#39;bye&#39;&lt;/b&gt;");
    }

    #[test]
    fn test_active_nav_link() {
        let html = render_page("Chat", "chat", "<p>x</p>");
        assert!(html.contains(r#"id="nav_chat" class="active""#));
        assert!(!html.contains(r#"id="nav_about" class="active""#));
        assert!(html.contains("<title>Chat — MindEase</title>"));
    }
}
