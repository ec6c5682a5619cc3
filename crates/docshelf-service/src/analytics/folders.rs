//! Per-folder click aggregation.

use std::collections::HashMap;

use docshelf_entity::analytics::FolderStats;

use crate::library::{natural_cmp, relative_segments};

/// Bucket for documents stored directly under a group root.
pub const ROOT_FOLDER_NAME: &str = "루트";

/// The top-level folder of a document within its group: `(name, path)`.
pub fn folder_bucket(document_path: &str, group_root: &str) -> (String, String) {
    let relative = relative_segments(document_path, group_root);
    let root = if group_root.ends_with('/') {
        group_root.to_string()
    } else {
        format!("{group_root}/")
    };
    match relative.as_slice() {
        [folder, _, ..] => (folder.clone(), format!("{root}{folder}/")),
        _ => (ROOT_FOLDER_NAME.to_string(), root),
    }
}

/// Aggregate `(document path, clicks)` pairs by top-level folder, most
/// clicked first.
pub fn folder_stats<'a, I>(group_root: &str, documents: I) -> Vec<FolderStats>
where
    I: IntoIterator<Item = (&'a str, i64)>,
{
    let mut by_name: HashMap<String, FolderStats> = HashMap::new();
    for (path, clicks) in documents {
        let (folder_name, folder_path) = folder_bucket(path, group_root);
        let stats = by_name
            .entry(folder_name.clone())
            .or_insert_with(|| FolderStats {
                folder_name,
                folder_path,
                total_clicks: 0,
                file_count: 0,
                average_clicks: 0,
            });
        stats.total_clicks += clicks;
        stats.file_count += 1;
    }

    let mut stats: Vec<FolderStats> = by_name
        .into_values()
        .map(|mut s| {
            s.average_clicks = (s.total_clicks as f64 / s.file_count as f64).round() as i64;
            s
        })
        .collect();
    stats.sort_by(|a, b| {
        b.total_clicks
            .cmp(&a.total_clicks)
            .then_with(|| natural_cmp(&a.folder_name, &b.folder_name))
    });
    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folder_bucket() {
        assert_eq!(
            folder_bucket("/lib/Book/1과/문장분석/a.pdf", "/lib/Book/"),
            ("1과".to_string(), "/lib/Book/1과/".to_string())
        );
        assert_eq!(
            folder_bucket("/lib/Book/a.pdf", "/lib/Book"),
            (ROOT_FOLDER_NAME.to_string(), "/lib/Book/".to_string())
        );
    }

    #[test]
    fn test_folder_stats_sorted_by_clicks() {
        let docs = vec![
            ("/B/U1/a.pdf", 1),
            ("/B/U1/b.pdf", 2),
            ("/B/U2/c.pdf", 10),
            ("/B/top.pdf", 0),
        ];
        let stats = folder_stats("/B/", docs);
        let names: Vec<_> = stats.iter().map(|s| s.folder_name.as_str()).collect();
        assert_eq!(names, vec!["U2", "U1", ROOT_FOLDER_NAME]);
        assert_eq!(stats[1].file_count, 2);
        assert_eq!(stats[1].average_clicks, 2);
    }
}
