use crate::core::{AuxiliaryRole, Node, NodeKind, OpenAction, TreeBuilder, classify};
use serde::Serialize;
use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

/* ============================== Row rendering ============================== */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Collapsible {
    None,
    Collapsed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemIcon {
    Folder,
    File,
    Test,
    Story,
}

/// Host-agnostic description of a rendered row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TreeItem {
    pub label: String,
    pub resource: PathBuf,
    pub tooltip: String,
    pub collapsible: Collapsible,
    pub icon: ItemIcon,
    pub context: &'static str,
    pub command: Option<OpenAction>,
}

#[must_use]
pub fn render_tree_item(node: &Node) -> TreeItem {
    let collapsible = match node.kind {
        NodeKind::Directory => Collapsible::Collapsed,
        NodeKind::File => Collapsible::None,
    };

    let icon = match (node.kind, node.is_auxiliary) {
        (NodeKind::Directory, _) => ItemIcon::Folder,
        (NodeKind::File, false) => ItemIcon::File,
        (NodeKind::File, true) => match classify(&node.name) {
            Some(AuxiliaryRole::Story) => ItemIcon::Story,
            Some(AuxiliaryRole::Test) | None => ItemIcon::Test,
        },
    };

    let context = if node.is_auxiliary {
        "auxiliary"
    } else if node.is_dir() {
        "directory"
    } else {
        "file"
    };

    TreeItem {
        label: node.name.clone(),
        resource: node.path.clone(),
        tooltip: node.path.display().to_string(),
        collapsible,
        icon,
        context,
        command: node.open_action(),
    }
}

/* ============================ Expanded snapshots ============================ */

/// A node together with its already-queried children.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ExpandedNode {
    #[serde(flatten)]
    pub node: Node,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ExpandedNode>,
}

/// Walk the builder from the top level, expanding every directory up to
/// `max_depth` levels (`None` for no limit).
///
/// A directory whose canonical path is already being expanded further up
/// (a symlink back to an ancestor) is listed but not descended into.
#[must_use]
pub fn expand_tree(builder: &TreeBuilder, max_depth: Option<usize>) -> Vec<ExpandedNode> {
    fn expand(
        builder: &TreeBuilder,
        node: Option<&Node>,
        depth: usize,
        max_depth: Option<usize>,
        ancestors: &mut HashSet<PathBuf>,
    ) -> Vec<ExpandedNode> {
        builder
            .children(node)
            .into_iter()
            .map(|child| {
                let mut children = Vec::new();
                if child.is_dir() && max_depth.is_none_or(|m| depth + 1 < m) {
                    let canon = canonical_dir(&child.path);
                    if ancestors.insert(canon.clone()) {
                        children = expand(builder, Some(&child), depth + 1, max_depth, ancestors);
                        ancestors.remove(&canon);
                    } else {
                        tracing::debug!(path = %child.path.display(), "directory cycle, not expanding");
                    }
                }
                ExpandedNode {
                    node: child,
                    children,
                }
            })
            .collect()
    }

    if max_depth == Some(0) {
        return Vec::new();
    }
    let mut ancestors = HashSet::new();
    if let Some(layout) = builder.layout() {
        ancestors.insert(canonical_dir(layout.root()));
    }
    expand(builder, None, 0, max_depth, &mut ancestors)
}

fn canonical_dir(p: &Path) -> PathBuf {
    dunce::canonicalize(p).unwrap_or_else(|_| p.to_path_buf())
}

/// Box-drawing rendering of an expanded tree; auxiliary rows are prefixed
/// with `+ `.
#[must_use]
pub fn render_unicode_tree(nodes: &[ExpandedNode], root_name: Option<&str>) -> String {
    fn render(nodes: &[ExpandedNode], prefix: &mut String, out: &mut String) {
        let len = nodes.len();
        for (idx, child) in nodes.iter().enumerate() {
            let last = idx + 1 == len;
            out.push_str(prefix);
            out.push_str(if last { "└── " } else { "├── " });
            if child.node.is_auxiliary {
                out.push_str("+ ");
            }
            out.push_str(&child.node.name);
            if child.node.is_dir() {
                out.push('/');
            }
            out.push('\n');

            if !child.children.is_empty() {
                let saved = prefix.len();
                prefix.push_str(if last { "    " } else { "│   " });
                render(&child.children, prefix, out);
                prefix.truncate(saved);
            }
        }
    }

    let mut out = String::new();
    if let Some(name) = root_name {
        out.push_str(name);
        out.push('\n');
    }
    let mut prefix = String::new();
    render(nodes, &mut prefix, &mut out);
    out
}
