//! Section Extractor — pulls a named section out of a semi-structured job
//! description.
//!
//! Descriptions follow the "ALL-CAPS HEADER\n• item\n• item\n\n" convention
//! with inconsistent bullet styles. The extractor captures from the first
//! occurrence of any header alias up to the first blank line, then cleans
//! the captured lines. A missing section is valid output (empty string),
//! never an error.

/// Extracts the body of the first section whose header matches any of
/// `aliases` (ASCII case-insensitive). The header line itself, repeated
/// header lines, blank lines, and leading bullet markers are all stripped.
pub fn extract_section<S: AsRef<str>>(description: &str, aliases: &[S]) -> String {
    let Some(start) = aliases
        .iter()
        .filter_map(|alias| find_ci(description, alias.as_ref()))
        .min()
    else {
        return String::new();
    };

    // Capture up to (but excluding) the first blank line after the header.
    let block = match description[start..].find("\n\n") {
        Some(end) => &description[start..start + end],
        None => &description[start..],
    };

    block
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter(|line| {
            !aliases
                .iter()
                .any(|alias| find_ci(line, alias.as_ref()).is_some())
        })
        .map(|line| strip_bullet(line).trim())
        .collect::<Vec<_>>()
        .join("\n")
}

/// ASCII case-insensitive substring search. Headers are ASCII all-caps, so
/// byte-wise comparison is sufficient and keeps offsets exact.
fn find_ci(haystack: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() {
        return None;
    }
    let h = haystack.as_bytes();
    let n = needle.as_bytes();
    if n.len() > h.len() {
        return None;
    }
    (0..=h.len() - n.len()).find(|&i| h[i..i + n.len()].eq_ignore_ascii_case(n))
}

fn strip_bullet(line: &str) -> &str {
    for marker in ['•', '-', '*'] {
        if let Some(rest) = line.strip_prefix(marker) {
            return rest.trim_start();
        }
    }
    line
}
