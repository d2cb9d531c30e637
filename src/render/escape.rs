use html_escape::encode_quoted_attribute;

/// Escape text for embedding in HTML. Encodes `&`, `<`, `>`, `"` and `'`.
///
/// Every piece of record data goes through here before it reaches a fragment.
pub fn escape_html(text: &str) -> String {
    encode_quoted_attribute(text).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        let escaped = escape_html("<script>alert(1)</script>");
        assert!(escaped.contains("&lt;script&gt;"));
        assert!(!escaped.contains('<'));
        assert!(!escaped.contains('>'));
    }

    #[test]
    fn escapes_ampersand_and_quotes() {
        let escaped = escape_html(r#"Tom & "Jerry's""#);
        assert!(escaped.starts_with("Tom &amp; "));
        assert!(!escaped.contains('"'));
        assert!(!escaped.contains('\''));
    }

    #[test]
    fn plain_text_is_unchanged() {
        assert_eq!(escape_html("Red Fox, Arctic Fox"), "Red Fox, Arctic Fox");
    }
}
