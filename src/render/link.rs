/// One `[[title|target]]` occurrence. `begin..end` covers the whole token,
/// brackets included, relative to the scanned slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkToken<'a> {
    pub begin: usize,
    pub end: usize,
    pub title: &'a str,
    pub target: &'a str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Stage {
    Idle,
    Opening,
    Title,
    Target,
    Closing,
}

/// Find the first complete link token in `text`.
///
/// Each call scans from offset 0; callers advance past `end` and call again
/// for the next token. A stray delimiter inside the title or target, or a
/// single closing bracket, abandons the scan and reports no link at all.
pub fn find_next_link(text: &str) -> Option<LinkToken<'_>> {
    let bytes = text.as_bytes();
    let mut stage = Stage::Idle;
    let mut begin = 0usize;
    let mut title_start = 0usize;
    let mut title_end = 0usize;
    let mut target_start = 0usize;
    let mut target_end = 0usize;

    for (i, &b) in bytes.iter().enumerate() {
        // a lone `[` falls back to idle and the byte is looked at again
        if stage == Stage::Opening && b != b'[' {
            stage = Stage::Idle;
        }
        match stage {
            Stage::Idle => {
                if b == b'[' {
                    stage = Stage::Opening;
                }
            }
            Stage::Opening => {
                begin = i - 1;
                title_start = i + 1;
                stage = Stage::Title;
            }
            Stage::Title => match b {
                b'|' => {
                    title_end = i;
                    target_start = i + 1;
                    stage = Stage::Target;
                }
                b'[' | b']' => {
                    log::debug!("Stray '{}' in link title at offset {}", b as char, i);
                    return None;
                }
                _ => {}
            },
            Stage::Target => match b {
                b']' => {
                    target_end = i;
                    stage = Stage::Closing;
                }
                b'[' | b'|' => {
                    log::debug!("Stray '{}' in link target at offset {}", b as char, i);
                    return None;
                }
                _ => {}
            },
            Stage::Closing => {
                if b == b']' {
                    return Some(LinkToken {
                        begin,
                        end: i + 1,
                        title: &text[title_start..title_end],
                        target: &text[target_start..target_end],
                    });
                }
                log::debug!("Missing ']' at offset {}", i);
                return None;
            }
        }
    }
    None
}
