//! Library tree service.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use docshelf_core::result::AppResult;
use docshelf_core::types::{GroupSort, PageRequest};
use docshelf_entity::category::CategorySummary;
use docshelf_entity::library::{LibraryGroup, LibraryRow, LibraryStats, LibraryTree};

use super::builder::build_tree;
use super::natural::natural_cmp;
use super::path::{relative_segments, strip_group_root};
use super::prune::{has_documents, prune};
use super::source::LibrarySource;

/// The assembled library plus the paths that did not lie under their
/// group root.
#[derive(Debug, Clone)]
pub struct LibraryAssembly {
    /// The ordered library.
    pub tree: LibraryTree,
    /// Document paths placed by the full-path fallback.
    pub unmatched_paths: Vec<String>,
}

struct GroupBucket {
    id: Uuid,
    name: String,
    storage_path: String,
    display_order: i32,
    category: Option<CategorySummary>,
    rows: Vec<LibraryRow>,
}

/// Group rows, materialize one tree per group, drop empty groups and order
/// the rest by `sort`.
pub fn assemble(rows: Vec<LibraryRow>, sort: GroupSort) -> LibraryAssembly {
    let mut index: HashMap<Uuid, usize> = HashMap::new();
    let mut buckets: Vec<GroupBucket> = Vec::new();

    for row in rows {
        let slot = *index.entry(row.group_id).or_insert_with(|| {
            buckets.push(GroupBucket {
                id: row.group_id,
                name: row.group_name.clone(),
                storage_path: row.group_path.clone(),
                display_order: row.group_display_order,
                category: row.category(),
                rows: Vec::new(),
            });
            buckets.len() - 1
        });
        buckets[slot].rows.push(row);
    }

    let mut unmatched_paths = Vec::new();
    let mut groups = Vec::with_capacity(buckets.len());

    for bucket in buckets {
        let items = bucket.rows.iter().map(|row| {
            let segments = strip_group_root(&row.document_path, &bucket.storage_path)
                .unwrap_or_else(|| {
                    unmatched_paths.push(row.document_path.clone());
                    relative_segments(&row.document_path, "")
                });
            (row.tree_document(), segments)
        });
        let tree = prune(build_tree(items.collect::<Vec<_>>()));
        if !has_documents(&tree) {
            continue;
        }

        let documents = tree.documents();
        let total_clicks = documents.iter().map(|d| d.click_count).sum();
        let file_count = documents.len();

        groups.push(LibraryGroup {
            id: bucket.id,
            name: bucket.name,
            storage_path: bucket.storage_path,
            display_order: bucket.display_order,
            category: bucket.category,
            total_clicks,
            file_count,
            tree,
        });
    }

    sort_groups(&mut groups, sort);

    let stats = LibraryStats {
        total_groups: groups.len(),
        total_files: groups.iter().map(|g| g.file_count).sum(),
    };

    LibraryAssembly {
        tree: LibraryTree {
            groups,
            sort,
            stats,
        },
        unmatched_paths,
    }
}

/// Order groups for presentation.
pub fn sort_groups(groups: &mut [LibraryGroup], sort: GroupSort) {
    match sort {
        GroupSort::Name => groups.sort_by(compare_by_name),
        GroupSort::Clicks => groups.sort_by(|a, b| {
            b.total_clicks
                .cmp(&a.total_clicks)
                .then_with(|| natural_cmp(&a.name, &b.name))
        }),
    }
}

fn compare_by_name(a: &LibraryGroup, b: &LibraryGroup) -> Ordering {
    let rank = |g: &LibraryGroup| match &g.category {
        Some(category) => (0, category.display_order),
        None => (1, 0),
    };
    rank(a)
        .cmp(&rank(b))
        .then_with(|| a.display_order.cmp(&b.display_order))
        .then_with(|| natural_cmp(&a.name, &b.name))
}

/// Serves the materialized library tree.
#[derive(Debug, Clone)]
pub struct LibraryService {
    source: Arc<dyn LibrarySource>,
    page_size: u64,
}

impl LibraryService {
    /// Create a new library service fetching `page_size` rows per round trip.
    pub fn new(source: Arc<dyn LibrarySource>, page_size: u64) -> Self {
        Self {
            source,
            page_size: page_size.max(1),
        }
    }

    /// Fetch every active row, one page at a time.
    pub async fn fetch_all(&self) -> AppResult<Vec<LibraryRow>> {
        let mut rows = Vec::new();
        let mut page = PageRequest::unbounded(1, self.page_size);
        loop {
            let batch = self.source.fetch_page(&page).await?;
            let fetched = batch.len() as u64;
            rows.extend(batch);
            if fetched < self.page_size {
                break;
            }
            page = page.next();
        }
        Ok(rows)
    }

    /// Build the library tree ordered by `sort`.
    pub async fn tree(&self, sort: GroupSort) -> AppResult<LibraryTree> {
        let rows = self.fetch_all().await?;
        let row_count = rows.len();
        let assembly = assemble(rows, sort);

        if !assembly.unmatched_paths.is_empty() {
            warn!(
                count = assembly.unmatched_paths.len(),
                sample = %assembly.unmatched_paths[0],
                "Documents outside their group root were placed by full path"
            );
        }
        info!(
            rows = row_count,
            groups = assembly.tree.stats.total_groups,
            files = assembly.tree.stats.total_files,
            sort = %sort,
            "Library tree built"
        );
        Ok(assembly.tree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use docshelf_core::error::AppError;
    use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};

    fn row(group: (Uuid, &str, &str), path: &str, clicks: i64) -> LibraryRow {
        let name = path.rsplit('/').next().unwrap_or(path).to_string();
        LibraryRow {
            document_id: Uuid::new_v4(),
            document_name: name,
            document_path: path.to_string(),
            size_bytes: 100,
            modified_at: None,
            click_count: clicks,
            group_id: group.0,
            group_name: group.1.to_string(),
            group_path: group.2.to_string(),
            group_display_order: 999,
            category_id: None,
            category_name: None,
            category_icon: None,
            category_display_order: None,
        }
    }

    fn categorize(mut row: LibraryRow, order: i32) -> LibraryRow {
        row.category_id = Some(Uuid::from_u128(order as u128 + 1));
        row.category_name = Some(format!("cat-{order}"));
        row.category_icon = Some("📘".to_string());
        row.category_display_order = Some(order);
        row
    }

    #[test]
    fn test_group_folders_follow_document_paths() {
        // The source query already drops inactive rows such as /BookA/U3/d.pdf.
        let book = (Uuid::new_v4(), "BookA", "/BookA/");
        let rows = vec![
            row(book, "/BookA/U1/a.pdf", 1),
            row(book, "/BookA/U1/b.pdf", 2),
            row(book, "/BookA/U2/c.pdf", 3),
        ];
        let library = assemble(rows, GroupSort::Name).tree;

        assert_eq!(library.groups.len(), 1);
        let group = &library.groups[0];
        let folders: Vec<_> = group.tree.folders().map(|(n, _)| n).collect();
        assert_eq!(folders, vec!["U1", "U2"]);
        let u1: Vec<_> = group.tree.folder("U1").unwrap().files().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(u1, vec!["a.pdf", "b.pdf"]);
        assert!(group.tree.folder("U3").is_none());
        assert_eq!(group.total_clicks, 6);
        assert_eq!(group.file_count, 3);
    }

    #[test]
    fn test_every_document_appears_once() {
        let a = (Uuid::new_v4(), "A", "/lib/A/");
        let b = (Uuid::new_v4(), "B", "/lib/B/");
        let rows = vec![
            row(a, "/lib/A/1과/x.pdf", 0),
            row(b, "/lib/B/y.pdf", 0),
            row(a, "/lib/A/1과/문장분석/z.pdf", 0),
            row(a, "/elsewhere/stray.pdf", 0),
        ];
        let ids: Vec<Uuid> = rows.iter().map(|r| r.document_id).collect();
        let assembly = assemble(rows, GroupSort::Name);

        let mut seen: Vec<Uuid> = assembly
            .tree
            .groups
            .iter()
            .flat_map(|g| g.tree.documents().into_iter().map(|d| d.id))
            .collect();
        seen.sort();
        let mut expected = ids;
        expected.sort();
        assert_eq!(seen, expected);
        assert_eq!(assembly.unmatched_paths, vec!["/elsewhere/stray.pdf".to_string()]);
        assert_eq!(assembly.tree.stats.total_files, 4);
    }

    #[test]
    fn test_name_sort_puts_categorized_first() {
        let plain = (Uuid::new_v4(), "Alpha", "/Alpha/");
        let late = (Uuid::new_v4(), "Zulu", "/Zulu/");
        let early = (Uuid::new_v4(), "Mike", "/Mike/");
        let rows = vec![
            row(plain, "/Alpha/a.pdf", 50),
            categorize(row(late, "/Zulu/z.pdf", 0), 2),
            categorize(row(early, "/Mike/m.pdf", 0), 1),
        ];
        let names: Vec<_> = assemble(rows, GroupSort::Name)
            .tree
            .groups
            .into_iter()
            .map(|g| g.name)
            .collect();
        assert_eq!(names, vec!["Mike", "Zulu", "Alpha"]);
    }

    #[test]
    fn test_clicks_sort_descending_then_name() {
        let a = (Uuid::new_v4(), "Book 10", "/Book 10/");
        let b = (Uuid::new_v4(), "Book 2", "/Book 2/");
        let c = (Uuid::new_v4(), "Popular", "/Popular/");
        let rows = vec![
            row(a, "/Book 10/a.pdf", 5),
            row(b, "/Book 2/b.pdf", 5),
            row(c, "/Popular/c.pdf", 40),
        ];
        let library = assemble(rows, GroupSort::Clicks).tree;
        let names: Vec<_> = library.groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Popular", "Book 2", "Book 10"]);
        assert_eq!(library.sort, GroupSort::Clicks);
    }

    #[test]
    fn test_group_of_root_only_path_is_kept_at_top_level() {
        let g = (Uuid::new_v4(), "G", "/G/");
        let library = assemble(vec![row(g, "/G/only.pdf", 0)], GroupSort::Name).tree;
        assert_eq!(library.groups[0].tree.files().len(), 1);
    }

    #[derive(Debug)]
    struct PagedSource {
        rows: Vec<LibraryRow>,
        calls: AtomicUsize,
        fail_on_page: Option<u64>,
    }

    #[async_trait]
    impl LibrarySource for PagedSource {
        async fn fetch_page(&self, page: &PageRequest) -> AppResult<Vec<LibraryRow>> {
            self.calls.fetch_add(1, AtomicOrdering::SeqCst);
            if self.fail_on_page == Some(page.page) {
                return Err(AppError::database("connection reset"));
            }
            Ok(self
                .rows
                .iter()
                .skip(page.offset() as usize)
                .take(page.limit() as usize)
                .cloned()
                .collect())
        }
    }

    fn paged_rows(count: usize) -> Vec<LibraryRow> {
        let g = (Uuid::new_v4(), "G", "/G/");
        (0..count)
            .map(|i| row(g, &format!("/G/U{}/f{i}.pdf", i % 3), 1))
            .collect()
    }

    #[tokio::test]
    async fn test_fetch_all_pages_until_short_page() {
        let source = Arc::new(PagedSource {
            rows: paged_rows(7),
            calls: AtomicUsize::new(0),
            fail_on_page: None,
        });
        let service = LibraryService::new(source.clone(), 3);
        let library = service.tree(GroupSort::Name).await.unwrap();

        assert_eq!(library.stats.total_files, 7);
        assert_eq!(source.calls.load(AtomicOrdering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_exact_multiple_needs_one_extra_round_trip() {
        let source = Arc::new(PagedSource {
            rows: paged_rows(6),
            calls: AtomicUsize::new(0),
            fail_on_page: None,
        });
        let service = LibraryService::new(source.clone(), 3);
        assert_eq!(service.fetch_all().await.unwrap().len(), 6);
        assert_eq!(source.calls.load(AtomicOrdering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_fetch_failure_yields_no_partial_tree() {
        let source = Arc::new(PagedSource {
            rows: paged_rows(7),
            calls: AtomicUsize::new(0),
            fail_on_page: Some(2),
        });
        let service = LibraryService::new(source, 3);
        let err = service.tree(GroupSort::Name).await.unwrap_err();
        assert_eq!(err.kind, docshelf_core::error::ErrorKind::Database);
    }
}
