//! Flag extraction and mode-group reassembly
//!
//! A JavaScript regex literal carries its flags outside the pattern
//! (`/abc/im`). The linear-time target engine takes them inline instead,
//! as a mode group (`(?im:abc)`). This module splits the literal into its
//! body and flags segments, keeps the flag letters the target engine
//! understands, and rebuilds the pattern around the rewritten body.

/// Split a slash-delimited literal into its body and flags segments.
///
/// The input is split on every `/`: the last segment is the flags segment
/// and the remaining segments, rejoined with `/`, form the delimited body.
/// The leading delimiter is then stripped from the body. Literal slashes
/// inside the body must be escaped (`\/`) or they are misread as
/// delimiters. An input with no slashes at all degenerates to an empty
/// body with the whole string landing in the flags position.
pub fn split_literal(pattern: &str) -> (String, &str) {
    let mut segments: Vec<&str> = pattern.split('/').collect();
    // split always yields at least one segment, even for ""
    let flags = segments.pop().unwrap_or_default();
    let delimited = segments.join("/");

    let body = match delimited.chars().next() {
        Some(first) => delimited[first.len_utf8()..].to_string(),
        None => String::new(),
    };

    (body, flags)
}

/// Collect the recognized flag letters from a flags segment.
///
/// Only `i` (case-insensitive) and `m` (multiline) have a counterpart in
/// the target engine's mode-group syntax. They are accumulated in
/// first-seen order, occurrences preserved; every other character (`g`,
/// `s`, `u`, `y`, or anything stray) is dropped without error.
pub fn mode_flags(flags: &str) -> String {
    let mut modes = String::new();
    for ch in flags.chars() {
        match ch {
            'i' | 'm' => modes.push(ch),
            _ => {}
        }
    }
    modes
}

/// Wrap a rewritten body in an inline mode group.
///
/// A mode group with no letters is never emitted: with an empty flag
/// accumulator the body is returned untouched.
pub fn wrap_mode_group(modes: &str, body: String) -> String {
    if modes.is_empty() {
        body
    } else {
        format!("(?{}:{})", modes, body)
    }
}
