//! HTML rendering of documentation and log text.
//!
//! Documentation supports a small markup: `*bold*` spans and bare
//! `http(s)://` links. Everything else is escaped.

/// Escapes `&`, `<` and `>`.
pub fn escape(text: &str) -> String {
    let mut output = String::with_capacity(text.len());

    for ch in text.chars() {
        match ch {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            ch => output.push(ch),
        }
    }

    output
}

/// Formats documentation text: escaped, with `*bold*` spans turned into
/// `<b>` elements and bare URLs into links. Lone or empty stars stay
/// literal.
pub fn format(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find('*') {
        let content_len = match rest[start + 1..].find('*') {
            Some(len) if len > 0 => len,
            _ => break,
        };

        output.push_str(&link_and_escape(&rest[..start]));
        output.push_str("<b>");
        output.push_str(&link_and_escape(&rest[start + 1..start + 1 + content_len]));
        output.push_str("</b>");
        rest = &rest[start + content_len + 2..];
    }

    output.push_str(&link_and_escape(rest));
    output
}

fn link_and_escape(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            if word.starts_with("http://") || word.starts_with("https://") {
                format!("<a href=\"{0}\">{0}</a>", escape(word))
            } else {
                escape(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_replaces_markup_characters() {
        assert_eq!(escape("<&>"), "&lt;&amp;&gt;");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn bold_spans() {
        assert_eq!(format("*bold* <&>"), "<b>bold</b> &lt;&amp;&gt;");
        assert_eq!(format("*a* and *b*"), "<b>a</b> and <b>b</b>");
    }

    #[test]
    fn lone_and_empty_stars_are_literal() {
        assert_eq!(format("2 * 3"), "2 * 3");
        assert_eq!(format("**"), "**");
    }

    #[test]
    fn urls_become_links() {
        assert_eq!(
            format("see http://doc"),
            "see <a href=\"http://doc\">http://doc</a>"
        );
        assert_eq!(
            format("https://example.com/x"),
            "<a href=\"https://example.com/x\">https://example.com/x</a>"
        );
    }

    #[test]
    fn markup_inside_bold_is_escaped() {
        assert_eq!(format("*<x>*"), "<b>&lt;x&gt;</b>");
    }
}
