use std::path::{Path, PathBuf};

/* ============================ Workspace layout ============================= */

pub const TESTS_DIR_NAME: &str = "tests";
pub const STORIES_DIR_NAME: &str = "stories";

/// Fixed shape of a component workspace: the root plus its flat `tests`
/// and `stories` siblings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    root: PathBuf,
    tests_dir: PathBuf,
    stories_dir: PathBuf,
}

impl Layout {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let tests_dir = root.join(TESTS_DIR_NAME);
        let stories_dir = root.join(STORIES_DIR_NAME);
        Self {
            root,
            tests_dir,
            stories_dir,
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn tests_dir(&self) -> &Path {
        &self.tests_dir
    }

    #[must_use]
    pub fn stories_dir(&self) -> &Path {
        &self.stories_dir
    }

    /// Exact path comparison; nested folders inside `tests` are not auxiliary roots.
    #[must_use]
    pub fn is_auxiliary_dir(&self, dir: &Path) -> bool {
        dir == self.tests_dir || dir == self.stories_dir
    }
}

/// Turn a user-supplied workspace path into the root the builder keeps.
///
/// Existing paths are canonicalized (without UNC prefixes on Windows); a path
/// that does not exist is kept as given and simply lists as empty.
#[must_use]
pub fn resolve_workspace_root(raw: Option<&Path>) -> Option<PathBuf> {
    let raw = raw.filter(|p| !p.as_os_str().is_empty())?;
    match dunce::canonicalize(raw) {
        Ok(p) => Some(p),
        Err(err) => {
            tracing::debug!(path = %raw.display(), %err, "workspace root not canonicalized");
            Some(raw.to_path_buf())
        }
    }
}
