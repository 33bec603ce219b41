use crate::core::{Layout, Node, NodeKind};
use std::{fs, path::Path};

/* =========================== Filesystem listing ============================ */

/// Existence check that treats any access failure as "absent".
#[must_use]
pub fn path_exists(p: &Path) -> bool {
    match fs::metadata(p) {
        Ok(_) => true,
        Err(err) => {
            tracing::debug!(path = %p.display(), %err, "treating path as absent");
            false
        }
    }
}

/// Flat listing of `dir` in the order the filesystem enumerates it.
///
/// Missing or unreadable directories list as empty. Every node of one call
/// is auxiliary iff `dir` is one of the layout's `tests`/`stories` folders.
#[must_use]
pub fn list_dir(dir: &Path, layout: &Layout) -> Vec<Node> {
    if !path_exists(dir) {
        return Vec::new();
    }
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::debug!(path = %dir.display(), %err, "directory unreadable, listing as empty");
            return Vec::new();
        }
    };

    let is_auxiliary = layout.is_auxiliary_dir(dir);
    let mut out = Vec::new();

    for ent in entries.flatten() {
        let path = ent.path();
        let name: String = ent.file_name().to_string_lossy().into_owned();

        // Follows symlinks; entries we cannot stat fall back to plain files.
        let kind = if path.is_dir() {
            NodeKind::Directory
        } else {
            NodeKind::File
        };

        out.push(Node {
            name,
            path,
            kind,
            is_auxiliary,
        });
    }

    out
}
