pub mod client;
pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

pub const DEFAULT_SERVER: &str = "http://localhost:3000";

#[derive(Parser)]
#[command(name = "catalog")]
#[command(about = "Catalog CLI - query a running Catalog API server")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in human-readable text format")]
    pub text: bool,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[arg(long, global = true, help = "Server base URL (defaults to $CATALOG_SERVER, then http://localhost:3000)")]
    pub server: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Search products by subcategory name prefix")]
    Search {
        #[command(subcommand)]
        cmd: commands::search::SearchCommands,
    },

    #[command(about = "Server information and health")]
    Server {
        #[command(subcommand)]
        cmd: commands::server::ServerCommands,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// `--server`, then `CATALOG_SERVER`, then the local default
pub fn resolve_server(flag: Option<&str>) -> String {
    flag.map(str::to_string)
        .or_else(|| std::env::var("CATALOG_SERVER").ok())
        .unwrap_or_else(|| DEFAULT_SERVER.to_string())
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);
    let client = client::ApiClient::new(resolve_server(cli.server.as_deref()))?;

    match cli.command {
        Commands::Search { cmd } => commands::search::handle(cmd, &client, output_format).await,
        Commands::Server { cmd } => commands::server::handle(cmd, &client, output_format).await,
    }
}
