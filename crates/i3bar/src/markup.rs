//! Pango markup text for styled spans.  The host bar does the rendering.

use mybar_widgets::Span;

/// Escape the characters pango markup treats specially.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&'  => out.push_str("&amp;"),
            '<'  => out.push_str("&lt;"),
            '>'  => out.push_str("&gt;"),
            '\'' => out.push_str("&#39;"),
            '"'  => out.push_str("&quot;"),
            c    => out.push(c),
        }
    }
    out
}

/// Markup for a run of spans; unstyled spans are emitted as bare text.
pub fn render(spans: &[Span]) -> String {
    let mut out = String::new();
    for span in spans {
        if span.is_plain() {
            out.push_str(&escape(&span.text));
            continue;
        }

        out.push_str("<span");
        if let Some(font) = span.font {
            out.push_str(&format!(" font_family=\"{}\"", escape(font)));
        }
        if let Some(color) = span.color {
            out.push_str(&format!(" color=\"{color}\""));
        }
        if let Some(size) = span.size {
            out.push_str(&format!(" size=\"{}\"", size.as_pango()));
        }
        out.push('>');
        out.push_str(&escape(&span.text));
        out.push_str("</span>");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use mybar_theme::Color;
    use mybar_widgets::spacer;

    #[test]
    fn escapes_specials() {
        assert_eq!(escape("Simon & Garfunkel <live>"), "Simon &amp; Garfunkel &lt;live&gt;");
        assert_eq!(escape("it's \"fine\""), "it&#39;s &quot;fine&quot;");
    }

    #[test]
    fn styled_spans() {
        let spans = vec![
            Span::text("a&b"),
            spacer(),
            Span::text("x").color(Color::from_hex("#f70")),
            Span { text: "\u{e8df}".into(), font: Some("Material Icons"), ..Span::default() },
        ];
        assert_eq!(
            render(&spans),
            "a&amp;b<span size=\"xx-small\"> </span><span color=\"#ff7700\">x</span>\
             <span font_family=\"Material Icons\">\u{e8df}</span>"
        );
    }
}
