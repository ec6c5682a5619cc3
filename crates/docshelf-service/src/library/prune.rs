//! Empty-branch pruning and ordering.

use docshelf_entity::library::{FolderNode, TreeNode};

use super::natural::natural_cmp;

/// Rebuild `node` without empty folders, ordering siblings naturally.
///
/// Folders come first in natural order of their names; the documents of
/// the folder follow as a single leaf, in natural order of their names.
/// Returns an empty node when nothing beneath holds a document.
pub fn prune(node: FolderNode) -> FolderNode {
    let mut folders = Vec::new();
    let mut files = Vec::new();

    for child in node.into_children() {
        match child {
            TreeNode::Folder { name, node } => {
                let pruned = prune(node);
                if !pruned.is_empty() {
                    folders.push((name, pruned));
                }
            }
            TreeNode::Leaf(documents) => files.extend(documents),
        }
    }

    folders.sort_by(|a, b| natural_cmp(&a.0, &b.0));
    files.sort_by(|a, b| natural_cmp(&a.name, &b.name));

    let mut children: Vec<TreeNode> = folders
        .into_iter()
        .map(|(name, node)| TreeNode::folder(name, node))
        .collect();
    if !files.is_empty() {
        children.push(TreeNode::Leaf(files));
    }
    FolderNode::from_children(children)
}

/// Whether any document exists in `node` or beneath it.
pub fn has_documents(node: &FolderNode) -> bool {
    node.children().iter().any(|child| match child {
        TreeNode::Leaf(documents) => !documents.is_empty(),
        TreeNode::Folder { node, .. } => has_documents(node),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::builder::build_tree;
    use docshelf_entity::library::TreeDocument;
    use uuid::Uuid;

    fn doc(name: &str) -> TreeDocument {
        TreeDocument {
            id: Uuid::new_v4(),
            name: name.to_string(),
            storage_path: String::new(),
            size_bytes: 0,
            click_count: 0,
            modified_at: None,
        }
    }

    fn sample() -> FolderNode {
        let mut root = FolderNode::new();
        root.push_file(doc("Lesson 10.pdf"));
        root.folder_entry("Unit 10").push_file(doc("b.pdf"));
        root.folder_entry("Empty").folder_entry("Deeper");
        root.folder_entry("Unit 2").push_file(doc("a.pdf"));
        root.push_file(doc("Lesson 2.pdf"));
        root
    }

    #[test]
    fn test_drops_empty_and_orders_naturally() {
        let pruned = prune(sample());
        let folders: Vec<_> = pruned.folders().map(|(name, _)| name).collect();
        assert_eq!(folders, vec!["Unit 2", "Unit 10"]);
        let files: Vec<_> = pruned.files().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(files, vec!["Lesson 2.pdf", "Lesson 10.pdf"]);
        assert!(matches!(pruned.children().last(), Some(TreeNode::Leaf(_))));
    }

    #[test]
    fn test_prune_is_idempotent() {
        let once = prune(sample());
        let twice = prune(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_all_empty_yields_empty_node() {
        let mut root = FolderNode::new();
        root.folder_entry("a").folder_entry("b");
        let pruned = prune(root);
        assert!(pruned.is_empty());
        assert!(!has_documents(&pruned));
    }

    #[test]
    fn test_has_documents_is_recursive() {
        let tree = build_tree(vec![(
            doc("x.pdf"),
            vec!["a".to_string(), "b".to_string(), "x.pdf".to_string()],
        )]);
        assert!(has_documents(&tree));
        assert!(!has_documents(&FolderNode::from_children(vec![TreeNode::Leaf(Vec::new())])));
    }
}
