use std::{
    collections::HashMap,
    io::{self, Write},
    path::PathBuf,
    sync::Arc,
};

use anyhow::{Context, anyhow};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use storytree::core::{
    CommandHandler, Notices, REFRESH_COMMAND, Registrar, TreeDataProvider, VIEW_ID,
    activate, base_name, expand_tree, render_unicode_tree, resolve_workspace_root,
};

/// Print a workspace's components with their test and story files.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Workspace root holding components plus `tests/` and `stories/`.
    #[arg(env = "STORYTREE_ROOT")]
    root: Option<PathBuf>,

    /// Emit the expanded tree as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Stop expanding directories below this many levels.
    #[arg(long, value_name = "N")]
    depth: Option<usize>,
}

/* ============================== Terminal host ============================== */

struct StderrNotices;

impl Notices for StderrNotices {
    fn show_information(&self, message: &str) {
        eprintln!("{message}");
    }
}

#[derive(Default)]
struct TerminalHost {
    providers: HashMap<String, Arc<dyn TreeDataProvider>>,
    commands: HashMap<String, CommandHandler>,
}

impl Registrar for TerminalHost {
    fn register_tree_data_provider(&mut self, view_id: &str, provider: Arc<dyn TreeDataProvider>) {
        self.providers.insert(view_id.to_string(), provider);
    }

    fn register_command(&mut self, command_id: &str, handler: CommandHandler) {
        self.commands.insert(command_id.to_string(), handler);
    }
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("STORYTREE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let root = resolve_workspace_root(cli.root.as_deref());
    let mut host = TerminalHost::default();
    let builder = activate(&mut host, root.clone(), Arc::new(StderrNotices));

    if !host.providers.contains_key(VIEW_ID) {
        return Err(anyhow!("no provider registered for view `{VIEW_ID}`"));
    }

    // Each run is a single full rebuild, the same thing the refresh command asks of a host.
    let _redraw = builder.on_did_change(|| tracing::debug!("tree invalidated"));
    if let Some(refresh) = host.commands.get(REFRESH_COMMAND) {
        refresh();
    }

    let tree = expand_tree(&builder, cli.depth);

    let mut stdout = io::stdout().lock();
    if cli.json {
        serde_json::to_writer_pretty(&mut stdout, &tree).context("encoding tree as JSON")?;
        writeln!(stdout).context("writing output")?;
    } else if let Some(root) = &root {
        let text = render_unicode_tree(&tree, Some(&base_name(root)));
        stdout.write_all(text.as_bytes()).context("writing output")?;
    }
    stdout.flush().context("writing output")?;
    Ok(())
}
