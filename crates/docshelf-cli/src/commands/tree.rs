//! Library tree CLI command.

use std::fmt::Write as _;
use std::sync::Arc;

use clap::{Args, ValueEnum};
use serde::Serialize;
use tabled::Tabled;

use docshelf_core::config::AppConfig;
use docshelf_core::error::AppError;
use docshelf_core::types::GroupSort;
use docshelf_database::repositories::DocumentRepository;
use docshelf_entity::library::{FolderNode, LibraryGroup};
use docshelf_service::{LibrarySource, LibraryService};

use crate::output::{self, OutputFormat};

/// Arguments for the tree command
#[derive(Debug, Args)]
pub struct TreeArgs {
    /// Group ordering
    #[arg(short, long, value_enum, default_value = "name")]
    pub sort: SortArg,

    /// Print every group's folders and files instead of a summary table
    #[arg(long)]
    pub outline: bool,
}

/// Group ordering choices
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    /// Category order, display order, then name
    Name,
    /// Total clicks, most first
    Clicks,
}

impl From<SortArg> for GroupSort {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Name => Self::Name,
            SortArg::Clicks => Self::Clicks,
        }
    }
}

/// Group summary row
#[derive(Debug, Serialize, Tabled)]
struct GroupRow {
    /// Group name
    name: String,
    /// Category
    category: String,
    /// Documents
    files: usize,
    /// Total clicks
    clicks: i64,
    /// Storage root
    path: String,
}

impl From<&LibraryGroup> for GroupRow {
    fn from(group: &LibraryGroup) -> Self {
        Self {
            name: group.name.clone(),
            category: group
                .category
                .as_ref()
                .map(|c| format!("{} {}", c.icon, c.name))
                .unwrap_or_else(|| "-".to_string()),
            files: group.file_count,
            clicks: group.total_clicks,
            path: group.storage_path.clone(),
        }
    }
}

/// Execute the tree command
pub async fn execute(
    args: &TreeArgs,
    config: AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let db = super::connect_db(&config).await?;
    let source = Arc::new(DocumentRepository::new(db.pool().clone())) as Arc<dyn LibrarySource>;
    let service = LibraryService::new(source, config.library.fetch_page_size);

    let tree = service.tree(args.sort.into()).await?;

    match (format, args.outline) {
        (OutputFormat::Json, _) => output::print_json(&tree),
        (OutputFormat::Table, true) => {
            for group in &tree.groups {
                print!("{}", outline(group));
            }
        }
        (OutputFormat::Table, false) => {
            let rows: Vec<GroupRow> = tree.groups.iter().map(GroupRow::from).collect();
            output::print_list(&rows, format);
            output::print_kv("Groups", &tree.stats.total_groups.to_string());
            output::print_kv("Files", &tree.stats.total_files.to_string());
        }
    }

    db.close().await;
    Ok(())
}

/// Indented outline of one group: folders end with `/`, files show clicks.
fn outline(group: &LibraryGroup) -> String {
    let mut out = format!("{} ({} files)\n", group.name, group.file_count);
    write_node(&group.tree, 1, &mut out);
    out
}

fn write_node(node: &FolderNode, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    for (name, child) in node.folders() {
        let _ = writeln!(out, "{indent}{name}/");
        write_node(child, depth + 1, out);
    }
    for file in node.files() {
        let _ = writeln!(out, "{indent}{} [{}]", file.name, file.click_count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docshelf_entity::library::{TreeDocument, TreeNode};
    use uuid::Uuid;

    fn doc(name: &str, clicks: i64) -> TreeDocument {
        TreeDocument {
            id: Uuid::new_v4(),
            name: name.to_string(),
            storage_path: format!("/library/BookA/{name}"),
            size_bytes: 1,
            click_count: clicks,
            modified_at: None,
        }
    }

    #[test]
    fn test_outline_indents_folders_before_files() {
        let mut unit = FolderNode::new();
        unit.push_file(doc("a.pdf", 3));
        let mut root = FolderNode::from_children(vec![TreeNode::folder("U1", unit)]);
        root.push_file(doc("intro.pdf", 0));

        let group = LibraryGroup {
            id: Uuid::new_v4(),
            name: "BookA".to_string(),
            storage_path: "/library/BookA/".to_string(),
            display_order: 999,
            category: None,
            total_clicks: 3,
            file_count: 2,
            tree: root,
        };

        assert_eq!(
            outline(&group),
            "BookA (2 files)\n  U1/\n    a.pdf [3]\n  intro.pdf [0]\n"
        );
        assert_eq!(GroupRow::from(&group).category, "-");
    }
}
