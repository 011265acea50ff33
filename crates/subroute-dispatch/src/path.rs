//! Command path helpers.
//!
//! A command path is a string of zero or more segments joined by a single
//! space: `"db migrate"` names the `migrate` command nested under `db`. The
//! empty path names the default (root) command.

/// Separator between path segments.
pub const SEGMENT_SEPARATOR: char = ' ';

/// Returns the parent of a path, or `""` when the path is top-level.
///
/// Trailing spaces are ignored, so `"db migrate "` has parent `"db"`.
pub fn parent(path: &str) -> &str {
    let trimmed = path.trim_end_matches(SEGMENT_SEPARATOR);
    match trimmed.rfind(SEGMENT_SEPARATOR) {
        Some(idx) => &trimmed[..idx],
        None => "",
    }
}

/// Returns the last segment of a path (the display name in help listings).
pub fn last_segment(path: &str) -> &str {
    match path.rfind(SEGMENT_SEPARATOR) {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

/// Number of segments in a path. The empty path has depth zero.
pub fn depth(path: &str) -> usize {
    if path.is_empty() {
        0
    } else {
        path.matches(SEGMENT_SEPARATOR).count() + 1
    }
}

/// Iterates the proper, non-empty ancestors of a path, nearest first.
///
/// `"a b c"` yields `"a b"` then `"a"`.
pub fn ancestors(path: &str) -> impl Iterator<Item = &str> {
    let mut current = path;
    std::iter::from_fn(move || {
        let idx = current.rfind(SEGMENT_SEPARATOR)?;
        current = &current[..idx];
        Some(current)
    })
}

/// Returns true if `prefix` covers whole segments of `candidate`.
///
/// The prefix must be a literal prefix of the candidate and be followed by
/// either the end of the string or a segment separator. `"foo"` is a
/// segment prefix of `"foo bar"` but not of `"foobar"`.
pub fn is_segment_prefix(candidate: &str, prefix: &str) -> bool {
    match candidate.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with(SEGMENT_SEPARATOR),
        None => false,
    }
}

/// Returns true if a token can be used as a path segment.
///
/// Segments are non-empty, contain no separator and do not look like flags.
pub fn is_segment(token: &str) -> bool {
    !token.is_empty() && !token.contains(SEGMENT_SEPARATOR) && !token.starts_with('-')
}
