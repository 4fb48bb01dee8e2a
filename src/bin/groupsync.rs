use std::path::PathBuf;

use clap::{Parser, Subcommand};
use groupsync::config::{load_config, GroupSyncConfig};
use groupsync::Connector;

#[derive(Parser)]
#[command(name = "groupsync")]
#[command(about = "Keep a group record consistent across a set of hosts", long_about = None)]
struct Cli {
    /// Path to a TOML config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Target host; repeatable. Overrides hosts from the config file.
    #[arg(long = "host")]
    hosts: Vec<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ensure the record exists on every host
    Create {
        #[arg(long)]
        group_id: String,
    },
    /// Ensure the record is absent on every host
    Delete {
        #[arg(long)]
        group_id: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    groupsync::observability::logging::init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => GroupSyncConfig::default(),
    };
    if !cli.hosts.is_empty() {
        config.hosts = cli.hosts.clone();
    }
    if config.hosts.is_empty() {
        eprintln!("Error: no hosts given (use --host or a config file)");
        std::process::exit(2);
    }

    let connector = Connector::from_config(&config);

    let result = match cli.command {
        Commands::Create { group_id } => connector.create(&group_id).await,
        Commands::Delete { group_id } => connector.delete(&group_id).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
