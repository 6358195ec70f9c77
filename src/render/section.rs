/// A heading line: `level` is the length of the `=` runs, `text` every
/// non-`=` character between them, surrounding spaces kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub level: usize,
    pub text: String,
}

/// Classify a line as a heading.
///
/// `=` counts toward the leading run until the first text character, and
/// toward the trailing run after it. Every other character joins the text.
/// The line is a heading when it starts with `=`, has text, and both runs
/// have the same length.
pub fn detect_section(line: &str) -> Option<Section> {
    let mut leading = 0usize;
    let mut trailing = 0usize;
    let mut text = String::new();

    for ch in line.chars() {
        if ch == '=' {
            if text.is_empty() {
                leading += 1;
            } else {
                trailing += 1;
            }
        } else {
            if leading == 0 {
                return None;
            }
            text.push(ch);
        }
    }

    if leading == 0 || leading != trailing {
        return None;
    }
    Some(Section { level: leading, text })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_heading_and_keeps_padding() {
        let section = detect_section("=== title 1 ===").unwrap();
        assert_eq!(section.level, 3);
        assert_eq!(section.text, " title 1 ");
    }

    #[test]
    fn level_follows_run_length() {
        for n in 1..=8 {
            let bar = "=".repeat(n);
            let line = format!("{bar}Heading{bar}");
            let section = detect_section(&line).unwrap();
            assert_eq!(section.level, n);
            assert_eq!(section.text, "Heading");
        }
    }

    #[test]
    fn unequal_runs_are_plain() {
        assert_eq!(detect_section("== another title ==="), None);
        assert_eq!(detect_section("=== another title =="), None);
    }

    #[test]
    fn missing_runs_are_plain() {
        assert_eq!(detect_section("not a section ==="), None);
        assert_eq!(detect_section("=== not closed"), None);
        assert_eq!(detect_section(""), None);
    }

    #[test]
    fn empty_text_is_plain() {
        assert_eq!(detect_section("===="), None);
        assert_eq!(detect_section("=="), None);
    }

    #[test]
    fn inner_equals_count_toward_closing_run() {
        let section = detect_section("==a=b=").unwrap();
        assert_eq!(section.level, 2);
        assert_eq!(section.text, "ab");
        assert_eq!(detect_section("=a=b="), None);
    }

    #[test]
    fn text_after_closing_run_is_kept() {
        let section = detect_section("= a = trailing").unwrap();
        assert_eq!(section.level, 1);
        assert_eq!(section.text, " a  trailing");
    }

    #[test]
    fn carriage_return_line_is_heading() {
        let section = detect_section("=== T ===\r").unwrap();
        assert_eq!(section.level, 3);
        assert_eq!(section.text, " T \r");
    }

    #[test]
    fn multibyte_text_is_preserved() {
        let section = detect_section("==Čas za kavo==").unwrap();
        assert_eq!(section.level, 2);
        assert_eq!(section.text, "Čas za kavo");
    }
}
