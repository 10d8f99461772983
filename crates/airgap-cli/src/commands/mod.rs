pub mod filters;
pub mod list;
pub mod show;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::Subcommand;

use airgap_core::Catalog;
use airgap_query::Session;

use crate::config::CliConfig;

#[derive(Subcommand)]
pub enum Commands {
    /// List artifacts matching a search, type and trust filters
    List(list::ListArgs),
    /// Show a single artifact by id
    Show(show::ShowArgs),
    /// List the available trust filters
    Filters(filters::FiltersArgs),
}

impl Commands {
    pub fn run(self, config: &CliConfig) -> anyhow::Result<()> {
        match self {
            Commands::List(args) => list::run(args, config),
            Commands::Show(args) => show::run(args, config),
            Commands::Filters(args) => filters::run(args),
        }
    }
}

/// Resolve the snapshot path from the flag or config and load it.
pub fn load_catalog(flag: Option<&Path>, config: &CliConfig) -> anyhow::Result<Catalog> {
    let path: PathBuf = flag
        .map(Path::to_path_buf)
        .or_else(|| config.catalog.clone())
        .ok_or_else(|| {
            anyhow::anyhow!("no catalog given (pass --catalog or set `catalog` in airgap.toml)")
        })?;
    let json = std::fs::read_to_string(&path)
        .with_context(|| format!("reading catalog {}", path.display()))?;
    let catalog =
        Catalog::from_json(&json).with_context(|| format!("loading catalog {}", path.display()))?;
    Ok(catalog)
}

/// Start a session with config defaults, then apply any flags on top.
pub fn open_session(
    catalog: Catalog,
    config: &CliConfig,
    search: Option<&str>,
    type_selector: Option<&str>,
    filters: &[String],
) -> anyhow::Result<Session> {
    let mut session = Session::new(Arc::new(catalog));
    let state = session.state_mut();

    if let Some(text) = search {
        state.set_search_text(text);
    }
    if let Some(selector) = type_selector.or(config.type_selector.as_deref()) {
        state.set_type_selector_str(selector)?;
    }
    let filter_ids = if filters.is_empty() {
        config.filters.as_slice()
    } else {
        filters
    };
    for id in filter_ids {
        if airgap_query::lookup(id).is_none() {
            tracing::warn!("unknown filter '{}' will match nothing", id);
        }
        if !state.is_active(id) {
            state.toggle_filter(id);
        }
    }
    Ok(session)
}
