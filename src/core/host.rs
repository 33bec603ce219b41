use crate::core::{Node, Subscription, TreeBuilder, TreeItem, render_tree_item};
use std::{future::Ready, path::PathBuf, sync::Arc};

pub const VIEW_ID: &str = "componentTree";
pub const REFRESH_COMMAND: &str = "componentTree.refresh";

/* ============================ Host collaborators ============================ */

/// Sink for advisory messages shown by the host UI.
pub trait Notices: Send + Sync {
    fn show_information(&self, message: &str);
}

/// Pull-based tree contract: the host asks for one node's children at a time.
pub trait TreeDataProvider: Send + Sync {
    fn get_children(&self, node: Option<&Node>) -> Ready<Vec<Node>>;

    fn get_tree_item(&self, node: &Node) -> TreeItem;

    fn on_did_change(&self, listener: Box<dyn Fn() + Send + Sync>) -> Subscription;
}

pub type CommandHandler = Box<dyn Fn() + Send + Sync>;

/// Registration surface the host exposes at activation.
pub trait Registrar {
    fn register_tree_data_provider(&mut self, view_id: &str, provider: Arc<dyn TreeDataProvider>);

    fn register_command(&mut self, command_id: &str, handler: CommandHandler);
}

impl TreeDataProvider for TreeBuilder {
    // Reads are local and synchronous; the future is resolved on return.
    fn get_children(&self, node: Option<&Node>) -> Ready<Vec<Node>> {
        std::future::ready(self.children(node))
    }

    fn get_tree_item(&self, node: &Node) -> TreeItem {
        render_tree_item(node)
    }

    fn on_did_change(&self, listener: Box<dyn Fn() + Send + Sync>) -> Subscription {
        TreeBuilder::on_did_change(self, listener)
    }
}

/// Wire a tree builder for `root` into the host: the provider under
/// [`VIEW_ID`] and [`REFRESH_COMMAND`] bound to [`TreeBuilder::refresh`].
pub fn activate<R: Registrar + ?Sized>(
    registrar: &mut R,
    root: Option<PathBuf>,
    notices: Arc<dyn Notices>,
) -> Arc<TreeBuilder> {
    tracing::info!(root = ?root, "activating component tree");
    let builder = Arc::new(TreeBuilder::new(root, notices));

    let provider: Arc<dyn TreeDataProvider> = builder.clone();
    registrar.register_tree_data_provider(VIEW_ID, provider);

    let target = Arc::downgrade(&builder);
    registrar.register_command(
        REFRESH_COMMAND,
        Box::new(move || {
            if let Some(builder) = target.upgrade() {
                builder.refresh();
            }
        }),
    );

    builder
}
