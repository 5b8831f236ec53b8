use clap::Subcommand;

use crate::cli::client::ApiClient;
use crate::cli::utils::{output_error, output_success};
use crate::cli::OutputFormat;

#[derive(Subcommand)]
pub enum ServerCommands {
    #[command(about = "Show server information from API root endpoint")]
    Info,

    #[command(about = "Check server health status from API /health endpoint")]
    Health,
}

pub async fn handle(cmd: ServerCommands, client: &ApiClient, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        ServerCommands::Info => {
            let info = client.info().await?;
            let name = info["data"]["name"].as_str().unwrap_or("unknown");
            let version = info["data"]["version"].as_str().unwrap_or("?");
            output_success(
                &output_format,
                &format!("{} {} at {}", name, version, client.base_url()),
                Some(info["data"].clone()),
            )
        }
        ServerCommands::Health => {
            let (status, body) = client.health().await?;
            if status.is_success() {
                let store = body["data"]["store"].as_str().unwrap_or("unknown");
                output_success(
                    &output_format,
                    &format!("{} is healthy ({} store)", client.base_url(), store),
                    Some(body["data"].clone()),
                )
            } else {
                let detail = body["data"]["store_error"].as_str().unwrap_or("no detail");
                output_error(
                    &output_format,
                    &format!("{} is degraded: {}", client.base_url(), detail),
                    Some("UNHEALTHY"),
                )?;
                anyhow::bail!("server unhealthy ({})", status)
            }
        }
    }
}
