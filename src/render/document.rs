use super::line::render_line;
use super::section::detect_section;

/// Deepest heading level rendered as an `<hN>` tag.
pub const MAX_HEADING_LEVEL: usize = 6;

/// Render a whole document. Lines are split on `\n` and joined back with no
/// separator, so the output carries no line breaks of its own.
pub fn render_document(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    for line in source.split('\n') {
        match detect_section(line) {
            Some(section) if section.level <= MAX_HEADING_LEVEL => {
                out.push_str(&format!(
                    "<h{level}>{text}</h{level}>",
                    level = section.level,
                    text = section.text
                ));
            }
            _ => out.push_str(&render_line(line)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_and_link_document() {
        let source = "=== Title ===\nHello [[world|http://example.com]]!";
        assert_eq!(
            render_document(source),
            "<h3> Title </h3>Hello <a href=\"http://example.com\">world</a>!"
        );
    }

    #[test]
    fn newlines_are_not_restored() {
        assert_eq!(render_document("one\ntwo\n\nthree\n"), "onetwothree");
    }

    #[test]
    fn every_supported_level() {
        for n in 1..=MAX_HEADING_LEVEL {
            let bar = "=".repeat(n);
            assert_eq!(
                render_document(&format!("{bar}x{bar}")),
                format!("<h{n}>x</h{n}>")
            );
        }
    }

    #[test]
    fn deep_heading_is_plain_text() {
        let line = "=======seven=======";
        assert_eq!(render_document(line), line);
        let line = "==========ten==========";
        assert_eq!(render_document(line), line);
    }

    #[test]
    fn rendering_is_repeatable() {
        let source = "= A =\n[[b|c]] d\n== e ==";
        assert_eq!(render_document(source), render_document(source));
    }

    #[test]
    fn crlf_document_keeps_headings() {
        assert_eq!(render_document("= A =\r\nbody\r"), "<h1> A \r</h1>body\r");
    }

    #[test]
    fn empty_document() {
        assert_eq!(render_document(""), "");
    }
}
