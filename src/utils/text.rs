/// Marker appended when the tail of an over-long string is dropped.
pub const TRUNCATED_TAIL_MARKER: &str = "...[text truncated]...";

/// Marker prepended when the head of an over-long string is dropped.
pub const TRUNCATED_HEAD_MARKER: &str = "...[text truncated]";

/// Bound `text` to `max_length` characters, embedding a truncation marker.
///
/// Strings within the bound pass through unchanged. Over-long strings come
/// back at exactly `max_length` characters: the head is kept and
/// [`TRUNCATED_TAIL_MARKER`] appended, or with `from_beginning` the tail is
/// kept behind [`TRUNCATED_HEAD_MARKER`]. When `max_length` is smaller than
/// the marker itself the kept slice clamps to empty and the marker alone is
/// returned. Lengths are counted in characters, so multi-byte text is never
/// split mid-sequence.
#[must_use]
pub fn truncate(text: &str, max_length: usize, from_beginning: bool) -> String {
    let total = text.chars().count();
    if total <= max_length {
        return text.to_string();
    }
    if from_beginning {
        let keep = max_length.saturating_sub(TRUNCATED_HEAD_MARKER.chars().count());
        format!("{TRUNCATED_HEAD_MARKER}{}", tail_chars(text, keep, total))
    } else {
        let keep = max_length.saturating_sub(TRUNCATED_TAIL_MARKER.chars().count());
        format!("{}{TRUNCATED_TAIL_MARKER}", head_chars(text, keep))
    }
}

fn head_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

fn tail_chars(s: &str, n: usize, total: usize) -> &str {
    if n == 0 {
        return "";
    }
    let skip = total.saturating_sub(n);
    match s.char_indices().nth(skip) {
        Some((idx, _)) => &s[idx..],
        None => s,
    }
}
