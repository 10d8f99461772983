use clap::Args;

use airgap_query::registry;

#[derive(Args)]
pub struct FiltersArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: FiltersArgs) -> anyhow::Result<()> {
    if args.json {
        let entries: Vec<serde_json::Value> = registry()
            .iter()
            .map(|f| serde_json::json!({ "id": f.id, "label": f.label }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for f in registry() {
            println!("{:<16} {}", f.id, f.label);
        }
    }
    Ok(())
}
