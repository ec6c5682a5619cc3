//! Hierarchical folder structure materialized from flat storage paths.
//!
//! A [`FolderNode`] holds an ordered list of [`TreeNode`] children. A child
//! is either a named sub-folder or the leaf list of documents stored
//! directly in the folder. Builders keep at most one leaf per folder.

use chrono::{DateTime, Utc};
use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Deserialize, Serialize, Serializer};
use uuid::Uuid;

/// The document fields carried inside the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeDocument {
    /// Document ID.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Full storage path.
    pub storage_path: String,
    /// File size in bytes.
    pub size_bytes: i64,
    /// Popularity counter.
    pub click_count: i64,
    /// Provider-reported modification time.
    pub modified_at: Option<DateTime<Utc>>,
}

/// One child of a folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    /// A named sub-folder.
    Folder {
        /// Folder name (one path segment).
        name: String,
        /// Folder contents.
        node: FolderNode,
    },
    /// Documents stored directly in the enclosing folder.
    Leaf(Vec<TreeDocument>),
}

impl TreeNode {
    /// Build a folder child.
    pub fn folder(name: impl Into<String>, node: FolderNode) -> Self {
        Self::Folder {
            name: name.into(),
            node,
        }
    }
}

/// A folder: an ordered sequence of sub-folders and at most one leaf list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderNode {
    children: Vec<TreeNode>,
}

impl FolderNode {
    /// Create an empty folder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a folder from already-ordered children.
    pub fn from_children(children: Vec<TreeNode>) -> Self {
        Self { children }
    }

    /// Children in their current order.
    pub fn children(&self) -> &[TreeNode] {
        &self.children
    }

    /// Consume the folder, returning its children.
    pub fn into_children(self) -> Vec<TreeNode> {
        self.children
    }

    /// True when the folder has no children at all.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Iterate over the named sub-folders in order.
    pub fn folders(&self) -> impl Iterator<Item = (&str, &FolderNode)> {
        self.children.iter().filter_map(|child| match child {
            TreeNode::Folder { name, node } => Some((name.as_str(), node)),
            TreeNode::Leaf(_) => None,
        })
    }

    /// Look up a direct sub-folder by exact name.
    pub fn folder(&self, name: &str) -> Option<&FolderNode> {
        self.folders()
            .find(|(folder_name, _)| *folder_name == name)
            .map(|(_, node)| node)
    }

    /// Walk a path of folder names from this folder.
    pub fn descend<'a>(&self, path: impl IntoIterator<Item = &'a str>) -> Option<&FolderNode> {
        path.into_iter()
            .try_fold(self, |current, segment| current.folder(segment))
    }

    /// Documents stored directly in this folder.
    pub fn files(&self) -> &[TreeDocument] {
        self.children
            .iter()
            .find_map(|child| match child {
                TreeNode::Leaf(files) => Some(files.as_slice()),
                TreeNode::Folder { .. } => None,
            })
            .unwrap_or(&[])
    }

    /// Return the named sub-folder, creating it at the end if missing.
    pub fn folder_entry(&mut self, name: &str) -> &mut FolderNode {
        let position = self.children.iter().position(
            |child| matches!(child, TreeNode::Folder { name: existing, .. } if existing == name),
        );
        let index = match position {
            Some(index) => index,
            None => {
                self.children.push(TreeNode::folder(name, FolderNode::new()));
                self.children.len() - 1
            }
        };
        match &mut self.children[index] {
            TreeNode::Folder { node, .. } => node,
            TreeNode::Leaf(_) => unreachable!("index points at a folder child"),
        }
    }

    /// Append a document to this folder's leaf list.
    pub fn push_file(&mut self, document: TreeDocument) {
        let leaf = self.children.iter_mut().find_map(|child| match child {
            TreeNode::Leaf(files) => Some(files),
            TreeNode::Folder { .. } => None,
        });
        match leaf {
            Some(files) => files.push(document),
            None => self.children.push(TreeNode::Leaf(vec![document])),
        }
    }

    /// Total number of documents in this folder and all sub-folders.
    pub fn document_count(&self) -> usize {
        self.children
            .iter()
            .map(|child| match child {
                TreeNode::Leaf(files) => files.len(),
                TreeNode::Folder { node, .. } => node.document_count(),
            })
            .sum()
    }

    /// Every document under this folder, depth first, in child order.
    pub fn documents(&self) -> Vec<&TreeDocument> {
        let mut out = Vec::new();
        self.collect_documents(&mut out);
        out
    }

    fn collect_documents<'a>(&'a self, out: &mut Vec<&'a TreeDocument>) {
        for child in &self.children {
            match child {
                TreeNode::Leaf(files) => out.extend(files.iter()),
                TreeNode::Folder { node, .. } => node.collect_documents(out),
            }
        }
    }
}

/// Serialized as `{"folders": {name: node, ...}, "files": [...]}` with
/// folders emitted in child order.
impl Serialize for FolderNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("FolderNode", 2)?;
        state.serialize_field("folders", &FolderEntries(self))?;
        state.serialize_field("files", self.files())?;
        state.end()
    }
}

struct FolderEntries<'a>(&'a FolderNode);

impl Serialize for FolderEntries<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let count = self.0.folders().count();
        let mut map = serializer.serialize_map(Some(count))?;
        for (name, node) in self.0.folders() {
            map.serialize_entry(name, node)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(name: &str) -> TreeDocument {
        TreeDocument {
            id: Uuid::new_v4(),
            name: name.to_string(),
            storage_path: format!("/lib/{name}"),
            size_bytes: 10,
            click_count: 0,
            modified_at: None,
        }
    }

    #[test]
    fn test_push_file_keeps_single_leaf() {
        let mut root = FolderNode::new();
        root.push_file(doc("a.pdf"));
        root.folder_entry("Unit 1").push_file(doc("b.pdf"));
        root.push_file(doc("c.pdf"));

        let leaves = root
            .children()
            .iter()
            .filter(|c| matches!(c, TreeNode::Leaf(_)))
            .count();
        assert_eq!(leaves, 1);
        let names: Vec<_> = root.files().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["a.pdf", "c.pdf"]);
        assert_eq!(root.document_count(), 3);
    }

    #[test]
    fn test_folder_entry_reuses_existing() {
        let mut root = FolderNode::new();
        root.folder_entry("U1").push_file(doc("a.pdf"));
        root.folder_entry("U1").push_file(doc("b.pdf"));
        assert_eq!(root.folders().count(), 1);
        assert_eq!(root.descend(["U1"]).map(|f| f.files().len()), Some(2));
    }

    #[test]
    fn test_serialize_shape_and_order() {
        let mut root = FolderNode::new();
        root.folder_entry("Unit 2").push_file(doc("x.pdf"));
        root.folder_entry("Unit 10").push_file(doc("y.pdf"));
        root.folder_entry("_files").push_file(doc("z.pdf"));
        root.push_file(doc("top.pdf"));

        let json = serde_json::to_string(&root).expect("serialize");
        let unit2 = json.find("\"Unit 2\"").expect("unit 2");
        let unit10 = json.find("\"Unit 10\"").expect("unit 10");
        assert!(unit2 < unit10);

        let value = serde_json::to_value(&root).expect("serialize");
        assert_eq!(value["files"][0]["name"], "top.pdf");
        assert_eq!(value["folders"]["_files"]["files"][0]["name"], "z.pdf");
        assert!(value["folders"]["Unit 2"]["folders"].as_object().is_some());
    }
}
