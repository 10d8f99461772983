use std::path::PathBuf;

use clap::Args;

use crate::config::CliConfig;
use crate::output;

#[derive(Args)]
pub struct ListArgs {
    /// Catalog snapshot (JSON)
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Case-insensitive substring of the artifact name
    #[arg(short = 'q', long)]
    search: Option<String>,
    /// Artifact type: all, helm or docker
    #[arg(short, long = "type")]
    type_selector: Option<String>,
    /// Trust filter id (repeatable; matches any)
    #[arg(short, long = "filter")]
    filters: Vec<String>,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: ListArgs, config: &CliConfig) -> anyhow::Result<()> {
    let catalog = super::load_catalog(args.catalog.as_deref(), config)?;
    let session = super::open_session(
        catalog,
        config,
        args.search.as_deref(),
        args.type_selector.as_deref(),
        &args.filters,
    )?;
    let results = session.evaluate();

    if args.json {
        let out = serde_json::json!({
            "shown": results.len(),
            "total": session.catalog().count(),
            "activeFilters": session.state().active_filter_ids(),
            "artifacts": results,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("{}", session.summary());
    if let Some(chips) = output::filter_chips(session.state()) {
        println!("{chips}");
    }
    if results.is_empty() {
        println!("No artifacts found. Try adjusting the search or clearing filters.");
        return Ok(());
    }
    for artifact in results {
        println!("{}", output::artifact_line(artifact));
    }
    Ok(())
}
