use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    File,
    Directory,
}

/// Instruction handed to the host when a leaf row is activated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OpenAction {
    pub command: &'static str,
    pub target: PathBuf,
}

/// Command id the host uses to open a file.
pub const OPEN_COMMAND: &str = "vscode.open";

/// UI-free representation of one row of the component tree.
///
/// Nodes are built fresh for every query and never point at each other;
/// parent/child structure only exists through `TreeBuilder::get_children`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Node {
    pub name: String,
    pub path: PathBuf,
    pub kind: NodeKind,
    pub is_auxiliary: bool,
}

impl Node {
    #[must_use]
    pub const fn is_dir(&self) -> bool {
        matches!(self.kind, NodeKind::Directory)
    }

    /// Present iff the node is a file.
    #[must_use]
    pub fn open_action(&self) -> Option<OpenAction> {
        match self.kind {
            NodeKind::File => Some(OpenAction {
                command: OPEN_COMMAND,
                target: self.path.clone(),
            }),
            NodeKind::Directory => None,
        }
    }

    /// Directory node for an arbitrary path, labelled with its base name.
    #[must_use]
    pub fn directory(path: &Path) -> Self {
        Self {
            name: base_name(path),
            path: path.to_path_buf(),
            kind: NodeKind::Directory,
            is_auxiliary: false,
        }
    }
}

#[must_use]
pub fn base_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .into_owned()
}

mod builder;
mod fs;
mod host;
mod layout;
mod matcher;
mod render;
mod signal;

pub use builder::*;
pub use fs::*;
pub use host::*;
pub use layout::*;
pub use matcher::*;
pub use render::*;
pub use signal::*;
