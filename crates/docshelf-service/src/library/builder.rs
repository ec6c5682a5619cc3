//! Folding flat (document, path) pairs into a folder tree.

use docshelf_entity::library::{FolderNode, TreeDocument};

/// Build a folder tree from documents and their relative path segments.
///
/// Every segment but the last names a folder; the document goes into the
/// leaf list of the folder it ends in. Documents sharing a folder keep
/// their input order. An empty or single-segment path places the document
/// at the top level.
pub fn build_tree<I>(items: I) -> FolderNode
where
    I: IntoIterator<Item = (TreeDocument, Vec<String>)>,
{
    let mut root = FolderNode::new();
    for (document, segments) in items {
        let folders = match segments.split_last() {
            Some((_, folders)) => folders,
            None => &[],
        };
        let target = folders
            .iter()
            .fold(&mut root, |node, name| node.folder_entry(name));
        target.push_file(document);
    }
    root
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn doc(name: &str) -> TreeDocument {
        TreeDocument {
            id: Uuid::new_v4(),
            name: name.to_string(),
            storage_path: format!("/x/{name}"),
            size_bytes: 1,
            click_count: 0,
            modified_at: None,
        }
    }

    fn segs(path: &[&str]) -> Vec<String> {
        path.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_nested_placement() {
        let tree = build_tree(vec![(
            doc("worksheet.pdf"),
            segs(&["1과", "문장분석", "worksheet.pdf"]),
        )]);
        let leaf = tree.descend(["1과", "문장분석"]).expect("folder");
        assert_eq!(leaf.files().len(), 1);
        assert_eq!(leaf.files()[0].name, "worksheet.pdf");
        assert!(tree.files().is_empty());
    }

    #[test]
    fn test_single_segment_goes_to_top_level() {
        let tree = build_tree(vec![
            (doc("a.pdf"), segs(&["a.pdf"])),
            (doc("b.pdf"), Vec::new()),
        ]);
        let names: Vec<_> = tree.files().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["a.pdf", "b.pdf"]);
    }

    #[test]
    fn test_same_folder_accumulates_in_order() {
        let tree = build_tree(vec![
            (doc("z.pdf"), segs(&["U1", "z.pdf"])),
            (doc("a.pdf"), segs(&["U1", "a.pdf"])),
        ]);
        let names: Vec<_> = tree
            .folder("U1")
            .expect("U1")
            .files()
            .iter()
            .map(|d| d.name.as_str())
            .collect();
        assert_eq!(names, vec!["z.pdf", "a.pdf"]);
        assert_eq!(tree.folders().count(), 1);
    }
}
