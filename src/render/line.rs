use super::link::find_next_link;
use crate::utils::escape_html;

/// Replace every `[[title|target]]` in `line` with an anchor, leaving the
/// surrounding text untouched.
pub fn render_line(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut cursor = 0usize;

    while let Some(link) = find_next_link(&line[cursor..]) {
        out.push_str(&line[cursor..cursor + link.begin]);
        out.push_str("<a href=\"");
        out.push_str(&escape_html(link.target));
        out.push_str("\">");
        out.push_str(&escape_html(link.title));
        out.push_str("</a>");
        cursor += link.end;
    }
    out.push_str(&line[cursor..]);
    out
}
