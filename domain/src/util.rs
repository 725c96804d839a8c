//! Shared utility functions.

use serde_json::Value;

/// Truncate a string to approximately `max_bytes` without splitting a UTF-8
/// character boundary.
///
/// Returns a sub-slice of the original string. If the string is shorter than
/// `max_bytes`, the entire string is returned unchanged.
pub fn truncate_str(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Compact one-line rendering of a JSON value for log fields.
///
/// Output longer than `max_bytes` is cut and suffixed with `...`.
pub fn preview_json(value: &Value, max_bytes: usize) -> String {
    let text = value.to_string();
    let cut = truncate_str(&text, max_bytes);
    if cut.len() < text.len() {
        format!("{}...", cut)
    } else {
        text
    }
}
