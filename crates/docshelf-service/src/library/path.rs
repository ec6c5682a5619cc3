//! Storage path normalization.

/// Split a storage path into its non-empty segments.
fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Segments of `path` below `root`, compared case-insensitively.
///
/// Returns `None` when `path` does not lie under `root`.
pub fn strip_group_root(path: &str, root: &str) -> Option<Vec<String>> {
    let mut path_segments = segments(path);
    for root_segment in segments(root) {
        let segment = path_segments.next()?;
        if segment != root_segment && segment.to_lowercase() != root_segment.to_lowercase() {
            return None;
        }
    }
    Some(path_segments.map(str::to_string).collect())
}

/// Segments of `path` relative to `root`.
///
/// Paths outside the root fall back to all of their own segments.
pub fn relative_segments(path: &str, root: &str) -> Vec<String> {
    strip_group_root(path, root)
        .unwrap_or_else(|| segments(path).map(str::to_string).collect())
}
