//! HTML escaping for user-supplied text

/// Escapes text for safe interpolation into HTML.
///
/// Ticket fields come straight from the intake form; anything rendered
/// into a page body or attribute value goes through here first.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_markup_characters() {
        assert_eq!(
            escape_html(r#"<script>alert("x")</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape_html("Fish & Chips"), "Fish &amp; Chips");
        assert_eq!(escape_html("it's"), "it&#39;s");
    }

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(escape_html("TKT-1756300000000"), "TKT-1756300000000");
    }
}
