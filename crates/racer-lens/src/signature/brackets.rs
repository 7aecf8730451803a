/// Finds the end of a bracketed region.
///
/// Scanning starts at byte offset `start` with `depth` brackets already open.
/// Every `open` increments the depth and every `close` decrements it. Returns
/// the offset just past the `close` that brings the depth to zero, or `None`
/// when the text ends first.
///
/// When `close` is `>`, the `>` of a `->` arrow does not count, so bounds such
/// as `F: Fn() -> u8` inside generics do not end the scan early.
pub fn find_closing(
    text: &str,
    open: char,
    close: char,
    start: usize,
    depth: usize,
) -> Option<usize> {
    let tail = text.get(start..)?;
    let mut depth = depth;
    let mut prev = text[..start].chars().next_back();

    for (offset, ch) in tail.char_indices() {
        if ch == open {
            depth += 1;
        } else if ch == close && !(close == '>' && prev == Some('-')) {
            depth = depth.saturating_sub(1);
            if depth == 0 {
                return Some(start + offset + ch.len_utf8());
            }
        }
        prev = Some(ch);
    }

    None
}

#[cfg(test)]
#[path = "../../tests/src/signature/brackets_tests.rs"]
mod tests;
