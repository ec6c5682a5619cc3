//! Pure reconciliation of a storage scan against the stored library.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use docshelf_core::traits::ScanResult;
use docshelf_entity::document::Document;
use docshelf_entity::group::{CreateGroup, Group};
use docshelf_entity::sync::SyncCounters;

use crate::library::strip_group_root;

/// A file to insert. `group_key` is the lowercased group root path.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedDocument {
    pub group_key: String,
    pub name: String,
    pub storage_path: String,
    pub size_bytes: i64,
    pub modified_at: Option<DateTime<Utc>>,
}

/// A change to an existing document.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedUpdate {
    pub id: Uuid,
    pub group_key: String,
    pub name: String,
    pub storage_path: String,
    pub size_bytes: i64,
    pub modified_at: Option<DateTime<Utc>>,
    /// The document was inactive and reappeared.
    pub reactivated: bool,
}

/// Everything a sync run has to write.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SyncPlan {
    pub groups_to_create: Vec<CreateGroup>,
    pub inserts: Vec<PlannedDocument>,
    pub updates: Vec<PlannedUpdate>,
    pub deactivations: Vec<Uuid>,
    /// Files skipped because of their extension or location.
    pub skipped: usize,
}

impl SyncPlan {
    /// Whether the run has nothing to write.
    pub fn is_empty(&self) -> bool {
        self.groups_to_create.is_empty()
            && self.inserts.is_empty()
            && self.updates.is_empty()
            && self.deactivations.is_empty()
    }

    /// The counters this plan produces once applied.
    pub fn counters(&self) -> SyncCounters {
        let reactivated = self.updates.iter().filter(|u| u.reactivated).count();
        SyncCounters {
            groups_created: self.groups_to_create.len() as i32,
            documents_added: self.inserts.len() as i32,
            documents_updated: (self.updates.len() - reactivated) as i32,
            documents_reactivated: reactivated as i32,
            documents_deactivated: self.deactivations.len() as i32,
        }
    }
}

/// Lowercased group root with a trailing slash.
pub fn group_key(storage_path: &str) -> String {
    let trimmed = storage_path.trim_end_matches('/');
    format!("{}/", trimmed.to_lowercase())
}

fn has_allowed_extension(name: &str, allowed: &[String]) -> bool {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => {
            allowed.iter().any(|a| a.eq_ignore_ascii_case(ext))
        }
        _ => false,
    }
}

/// Work out which groups and documents to create, change or deactivate.
///
/// The first folder below `root` names the group; files directly under
/// `root` are skipped. A full scan deactivates every active document it did
/// not see; an incremental scan deactivates only what it reports deleted,
/// including everything beneath a deleted folder.
pub fn plan_sync(
    root: &str,
    allowed_extensions: &[String],
    scan: &ScanResult,
    groups: &[Group],
    documents: &[Document],
) -> SyncPlan {
    let mut plan = SyncPlan::default();

    let mut known_groups: HashSet<String> =
        groups.iter().map(|g| group_key(&g.storage_path)).collect();
    let group_by_id: HashMap<Uuid, String> = groups
        .iter()
        .map(|g| (g.id, group_key(&g.storage_path)))
        .collect();
    let existing: HashMap<String, &Document> =
        documents.iter().map(|d| (d.path_key(), d)).collect();
    let mut seen: HashSet<String> = HashSet::new();

    for entry in scan.entries.iter().filter(|e| !e.is_directory) {
        if !has_allowed_extension(&entry.name, allowed_extensions) {
            plan.skipped += 1;
            continue;
        }
        let Some(relative) = strip_group_root(&entry.path, root) else {
            plan.skipped += 1;
            continue;
        };
        if relative.len() < 2 {
            plan.skipped += 1;
            continue;
        }

        let key = entry.path.to_lowercase();
        if !seen.insert(key.clone()) {
            continue;
        }

        let group_name = &relative[0];
        let group_path = group_root_of(&entry.path, relative.len());
        let group = group_key(&group_path);
        if known_groups.insert(group.clone()) {
            plan.groups_to_create.push(CreateGroup {
                name: group_name.clone(),
                storage_path: group_path,
            });
        }

        let size_bytes = i64::try_from(entry.size_bytes).unwrap_or(i64::MAX);
        match existing.get(&key) {
            None => plan.inserts.push(PlannedDocument {
                group_key: group,
                name: entry.name.clone(),
                storage_path: entry.path.clone(),
                size_bytes,
                modified_at: entry.last_modified,
            }),
            Some(doc) => {
                let changed = doc.size_bytes != size_bytes
                    || doc.modified_at != entry.last_modified
                    || doc.storage_path != entry.path
                    || doc.name != entry.name
                    || group_by_id.get(&doc.group_id) != Some(&group);
                if changed || !doc.is_active {
                    plan.updates.push(PlannedUpdate {
                        id: doc.id,
                        group_key: group,
                        name: entry.name.clone(),
                        storage_path: entry.path.clone(),
                        size_bytes,
                        modified_at: entry.last_modified,
                        reactivated: !doc.is_active,
                    });
                }
            }
        }
    }

    if scan.is_full {
        plan.deactivations = documents
            .iter()
            .filter(|d| d.is_active && !seen.contains(&d.path_key()))
            .map(|d| d.id)
            .collect();
    } else {
        let deleted: Vec<String> = scan
            .deleted_paths
            .iter()
            .map(|p| p.trim_end_matches('/').to_lowercase())
            .collect();
        plan.deactivations = documents
            .iter()
            .filter(|d| d.is_active)
            .filter(|d| {
                let key = d.path_key();
                !seen.contains(&key)
                    && deleted
                        .iter()
                        .any(|p| key == *p || key.starts_with(&format!("{p}/")))
            })
            .map(|d| d.id)
            .collect();
    }

    plan
}

/// The group root path (with display casing) of a file `depth` segments
/// below the library root.
fn group_root_of(path: &str, depth: usize) -> String {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let keep = segments.len() - depth + 1;
    format!("/{}/", segments[..keep].join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use docshelf_core::traits::StorageObjectMeta;

    fn file(path: &str, size: u64) -> StorageObjectMeta {
        StorageObjectMeta {
            path: path.to_string(),
            name: path.rsplit('/').next().unwrap().to_string(),
            size_bytes: size,
            last_modified: None,
            is_directory: false,
        }
    }

    fn group(name: &str, path: &str) -> Group {
        Group {
            id: Uuid::new_v4(),
            name: name.to_string(),
            storage_path: path.to_string(),
            category_id: None,
            display_order: 999,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn document(group: &Group, path: &str, size: i64, active: bool) -> Document {
        Document {
            id: Uuid::new_v4(),
            group_id: group.id,
            name: path.rsplit('/').next().unwrap().to_string(),
            storage_path: path.to_string(),
            size_bytes: size,
            modified_at: None,
            click_count: 0,
            is_active: active,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn pdf() -> Vec<String> {
        vec!["pdf".to_string()]
    }

    fn full(entries: Vec<StorageObjectMeta>) -> ScanResult {
        ScanResult {
            entries,
            is_full: true,
            ..ScanResult::default()
        }
    }

    #[test]
    fn test_new_group_and_documents() {
        let scan = full(vec![
            file("/library/Book A/U1/a.pdf", 10),
            file("/library/Book A/U1/notes.txt", 10),
            file("/library/Book A/b.PDF", 10),
            file("/library/loose.pdf", 10),
        ]);
        let plan = plan_sync("/library", &pdf(), &scan, &[], &[]);

        assert_eq!(
            plan.groups_to_create,
            vec![CreateGroup {
                name: "Book A".to_string(),
                storage_path: "/library/Book A/".to_string(),
            }]
        );
        assert_eq!(plan.inserts.len(), 2);
        assert!(plan.inserts.iter().all(|d| d.group_key == "/library/book a/"));
        assert_eq!(plan.skipped, 2);
        assert_eq!(plan.counters().documents_added, 2);
    }

    #[test]
    fn test_existing_group_matches_case_insensitively() {
        let g = group("Book A", "/Library/book a/");
        let scan = full(vec![file("/library/Book A/a.pdf", 1)]);
        let plan = plan_sync("/library", &pdf(), &scan, &[g], &[]);
        assert!(plan.groups_to_create.is_empty());
        assert_eq!(plan.inserts.len(), 1);
    }

    #[test]
    fn test_update_reactivate_and_deactivate_on_full_scan() {
        let g = group("B", "/library/B/");
        let changed = document(&g, "/library/B/changed.pdf", 1, true);
        let same = document(&g, "/library/B/same.pdf", 5, true);
        let back = document(&g, "/library/B/back.pdf", 7, false);
        let gone = document(&g, "/library/B/gone.pdf", 3, true);
        let already_gone = document(&g, "/library/B/old.pdf", 3, false);

        let scan = full(vec![
            file("/library/B/changed.pdf", 2),
            file("/library/B/same.pdf", 5),
            file("/library/B/back.pdf", 7),
        ]);
        let docs = vec![changed.clone(), same, back.clone(), gone.clone(), already_gone];
        let plan = plan_sync("/library", &pdf(), &scan, &[g], &docs);

        assert_eq!(plan.updates.len(), 2);
        let reactivated: Vec<_> = plan.updates.iter().filter(|u| u.reactivated).map(|u| u.id).collect();
        assert_eq!(reactivated, vec![back.id]);
        assert!(plan.updates.iter().any(|u| u.id == changed.id && u.size_bytes == 2));
        assert_eq!(plan.deactivations, vec![gone.id]);

        let counters = plan.counters();
        assert_eq!(counters.documents_updated, 1);
        assert_eq!(counters.documents_reactivated, 1);
        assert_eq!(counters.documents_deactivated, 1);
    }

    #[test]
    fn test_incremental_deactivates_only_deleted_paths() {
        let g = group("B", "/library/B/");
        let kept = document(&g, "/library/B/kept.pdf", 1, true);
        let file_gone = document(&g, "/library/B/gone.pdf", 1, true);
        let in_folder = document(&g, "/library/B/Unit 3/x.pdf", 1, true);
        let sibling = document(&g, "/library/B/Unit 30/y.pdf", 1, true);

        let scan = ScanResult {
            entries: Vec::new(),
            deleted_paths: vec![
                "/library/b/gone.pdf".to_string(),
                "/library/B/Unit 3".to_string(),
            ],
            cursor: Some("next".to_string()),
            is_full: false,
        };
        let docs = vec![kept, file_gone.clone(), in_folder.clone(), sibling];
        let plan = plan_sync("/library", &pdf(), &scan, &[g], &docs);

        let mut expected = vec![file_gone.id, in_folder.id];
        expected.sort();
        let mut actual = plan.deactivations.clone();
        actual.sort();
        assert_eq!(actual, expected);
        assert!(plan.inserts.is_empty());
    }

    #[test]
    fn test_unchanged_library_yields_empty_plan() {
        let g = group("B", "/library/B/");
        let doc = document(&g, "/library/B/a.pdf", 4, true);
        let scan = full(vec![file("/library/B/a.pdf", 4)]);
        let plan = plan_sync("/library", &pdf(), &scan, &[g], &[doc]);
        assert!(plan.is_empty());
    }

    #[test]
    fn test_root_at_provider_top() {
        let scan = full(vec![file("/Book/U1/a.pdf", 1)]);
        let plan = plan_sync("/", &pdf(), &scan, &[], &[]);
        assert_eq!(plan.groups_to_create[0].storage_path, "/Book/");
        assert_eq!(plan.inserts[0].group_key, "/book/");
    }

    #[test]
    fn test_extension_check() {
        assert!(has_allowed_extension("a.PDF", &pdf()));
        assert!(!has_allowed_extension(".pdf", &pdf()));
        assert!(!has_allowed_extension("pdf", &pdf()));
        assert!(!has_allowed_extension("a.pdf.zip", &pdf()));
    }
}
