/// Escape HTML special characters
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Normalize a request path into a document identifier: surrounding slashes
/// and empty or `.` segments are dropped.
pub fn normalize_path(path: &str) -> String {
    path.split('/')
        .filter(|part| !part.is_empty() && *part != ".")
        .collect::<Vec<_>>()
        .join("/")
}

/// Whether the raw query string asks for edit mode (`?edit` or `?edit=...`).
pub fn is_edit_request(query: Option<&str>) -> bool {
    let Some(query) = query else {
        return false;
    };
    let first = query.trim_start_matches('?').split('&').next().unwrap_or("");
    first == "edit" || first.starts_with("edit=")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_all_specials() {
        assert_eq!(escape_html(r#"<a href="x">&'</a>"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;&lt;/a&gt;");
    }

    #[test]
    fn normalizes_paths() {
        assert_eq!(normalize_path("/docs//intro/"), "docs/intro");
        assert_eq!(normalize_path("./a/./b"), "a/b");
        assert_eq!(normalize_path("/"), "");
    }

    #[test]
    fn detects_edit_mode() {
        assert!(is_edit_request(Some("edit")));
        assert!(is_edit_request(Some("edit=1&x=2")));
        assert!(!is_edit_request(Some("view&edit")));
        assert!(!is_edit_request(Some("editor")));
        assert!(!is_edit_request(None));
    }
}
