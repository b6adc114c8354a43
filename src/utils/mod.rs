//! Shared helpers for output processors.

/// Find every byte offset of `needle` in `text`, in ascending order.
///
/// The scan advances one character past each match start, so overlapping
/// occurrences are reported too. An empty needle yields no matches.
///
/// Intended for pattern-scanning processors that flag occurrences of a
/// search string in captured output.
pub fn find_all(text: &str, needle: &str) -> Vec<usize> {
    if needle.is_empty() {
        return Vec::new();
    }
    let mut offsets = Vec::new();
    let mut pos = 0;
    while let Some(idx) = text[pos..].find(needle) {
        let at = pos + idx;
        offsets.push(at);
        // Step to the next char boundary, not the end of the match.
        let step = text[at..].chars().next().map_or(1, char::len_utf8);
        pos = at + step;
    }
    offsets
}
