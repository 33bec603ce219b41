use crate::core::{
    Layout, Node, Notices, RefreshSignal, Subscription, is_auxiliary_name, list_dir, matches,
};
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

pub const NO_WORKSPACE_NOTICE: &str = "No workspace folder is open; the component tree is empty.";

/* =============================== Tree builder =============================== */

/// Lazily computes the rows of the component tree, one expansion at a time.
///
/// The builder keeps nothing between queries apart from its fixed layout and
/// the refresh listeners, so sibling expansions may run concurrently.
pub struct TreeBuilder {
    layout: Option<Layout>,
    notices: Arc<dyn Notices>,
    on_change: RefreshSignal,
}

impl TreeBuilder {
    pub fn new(root: Option<PathBuf>, notices: Arc<dyn Notices>) -> Self {
        Self {
            layout: root.map(Layout::new),
            notices,
            on_change: RefreshSignal::new(),
        }
    }

    #[must_use]
    pub const fn layout(&self) -> Option<&Layout> {
        self.layout.as_ref()
    }

    /// Children of `node`, or the top level when `node` is `None`.
    #[must_use]
    pub fn children(&self, node: Option<&Node>) -> Vec<Node> {
        let Some(layout) = &self.layout else {
            if node.is_none() {
                self.notices.show_information(NO_WORKSPACE_NOTICE);
            }
            return Vec::new();
        };

        match node {
            None => list_directory_children(layout.root(), layout),
            Some(n) if layout.is_auxiliary_dir(&n.path) => list_dir(&n.path, layout),
            Some(n) => list_directory_children(&n.path, layout),
        }
    }

    /// Ask every subscriber to re-query the whole tree.
    pub fn refresh(&self) {
        tracing::info!(
            listeners = self.on_change.listener_count(),
            "component tree refresh requested"
        );
        self.on_change.fire();
    }

    pub fn on_did_change<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_change.subscribe(listener)
    }
}

/// Listing of `dir` with each component file followed by its companions.
///
/// Companions come from the flat `tests` then `stories` folders of the
/// layout. Directories and files that are already test/story files pass
/// through without a splice.
#[must_use]
pub fn list_directory_children(dir: &Path, layout: &Layout) -> Vec<Node> {
    let base = list_dir(dir, layout);

    // Read lazily: a directory with no component files never touches them.
    let mut aux: Option<(Vec<Node>, Vec<Node>)> = None;
    let mut out = Vec::with_capacity(base.len());

    for node in base {
        let is_source = !node.is_dir() && !is_auxiliary_name(&node.name);
        if !is_source {
            out.push(node);
            continue;
        }

        let (tests, stories) = aux.get_or_insert_with(|| {
            (
                list_dir(layout.tests_dir(), layout),
                list_dir(layout.stories_dir(), layout),
            )
        });

        let companions: Vec<Node> = tests
            .iter()
            .chain(stories.iter())
            .filter(|candidate| matches(&node.name, &candidate.name))
            .map(|candidate| Node {
                is_auxiliary: true,
                ..candidate.clone()
            })
            .collect();

        if !companions.is_empty() {
            tracing::trace!(
                component = %node.name,
                companions = companions.len(),
                "spliced companions"
            );
        }

        out.push(node);
        out.extend(companions);
    }

    out
}
