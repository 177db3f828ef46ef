use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;

// Built once on first use, shared across threads
static XML_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">", "\"", "'", "\n", "\r", "\t"])
        .expect("Failed to build XML escaper")
});

/// Escape XML special characters for use in attribute values.
///
/// Newline, carriage return and tab become character references so that
/// attribute-value normalization on read does not turn them into spaces.
///
/// # Examples
///
/// ```
/// use opc_rels::common::xml::escape_xml;
/// assert_eq!(escape_xml("a & b"), "a &amp; b");
/// assert_eq!(escape_xml("<T \"x\">"), "&lt;T &quot;x&quot;&gt;");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    XML_ESCAPER.replace_all(s, &[
        "&amp;", "&lt;", "&gt;", "&quot;", "&apos;", "&#10;", "&#13;", "&#9;",
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_plain_text_unchanged() {
        assert_eq!(escape_xml("worksheets/sheet1.xml"), "worksheets/sheet1.xml");
    }

    #[test]
    fn test_escape_all_entities() {
        assert_eq!(
            escape_xml(r#"<a href='x'>"q" & r</a>"#),
            "&lt;a href=&apos;x&apos;&gt;&quot;q&quot; &amp; r&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_attribute_whitespace() {
        assert_eq!(escape_xml("a\nb\r\nc\td e"), "a&#10;b&#13;&#10;c&#9;d e");
    }
}
