use clap::Parser;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod error;
mod output;

use commands::Commands;

#[derive(Parser)]
#[command(name = "airgap", version, about = "Browse and filter artifacts bound for an air-gapped environment")]
struct Cli {
    /// Config file (default: ./airgap.toml, then ~/.airgap/config.toml)
    #[arg(long, global = true)]
    config: Option<std::path::PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = config::load_config(cli.config.as_deref())
        .and_then(|config| cli.command.run(&config));
    if let Err(err) = result {
        eprintln!("{}", error::format_error(&err));
        std::process::exit(1);
    }
}
