use std::path::PathBuf;

use clap::Args;

use crate::config::CliConfig;
use crate::output;

#[derive(Args)]
pub struct ShowArgs {
    /// Artifact id
    id: String,
    /// Catalog snapshot (JSON)
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: ShowArgs, config: &CliConfig) -> anyhow::Result<()> {
    let catalog = super::load_catalog(args.catalog.as_deref(), config)?;
    let artifact = catalog
        .get(&args.id)
        .ok_or_else(|| anyhow::anyhow!("artifact not found: {}", args.id))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(artifact)?);
    } else {
        for line in output::artifact_details(artifact) {
            println!("{line}");
        }
    }
    Ok(())
}
