//! Line-level helpers for `key = value` configuration files.

/// What: Check if a line should be skipped (empty or comment).
///
/// Inputs:
/// - `line`: Line to check
///
/// Output:
/// - `true` if the line should be skipped, `false` otherwise
///
/// Details:
/// - Skips empty lines and lines starting with `#`, `//`, or `;`
pub fn skip_comment_or_empty(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty()
        || trimmed.starts_with('#')
        || trimmed.starts_with("//")
        || trimmed.starts_with(';')
}

/// What: Remove a trailing comment from a value.
///
/// Inputs:
/// - `s`: Raw value text
///
/// Output:
/// - Comment-free, trimmed value
///
/// Details:
/// - A comment starts at `#` or `//` preceded by whitespace, so `http://` and
///   `a#b` survive
pub fn strip_inline_comment(s: &str) -> &str {
    let mut end = s.len();
    let mut prev_ws = false;
    for (i, ch) in s.char_indices() {
        if prev_ws && (ch == '#' || s[i..].starts_with("//")) {
            end = i;
            break;
        }
        prev_ws = ch.is_whitespace();
    }
    s[..end].trim()
}

/// What: Parse a key-value pair from a line.
///
/// Inputs:
/// - `line`: Line containing key=value format
///
/// Output:
/// - `Some((key, value))` if parsing succeeds, `None` otherwise
///
/// Details:
/// - Splits on the first `=` character
/// - Trims whitespace from both key and value and drops trailing comments
pub fn parse_key_value(line: &str) -> Option<(String, String)> {
    let (key, value) = line.trim().split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key.to_string(), strip_inline_comment(value).to_string()))
}

/// Boolean setting value: `true|1|yes|on` or `false|0|no|off`, case-insensitive.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
