use clap::Subcommand;

use crate::cli::client::ApiClient;
use crate::cli::utils::format_search_table;
use crate::cli::OutputFormat;

#[derive(Subcommand)]
pub enum SearchCommands {
    #[command(about = "Products whose subcategory name starts with a prefix")]
    Subcategory {
        #[arg(help = "Subcategory name prefix (case-insensitive); omit to list every product")]
        query: Option<String>,
        #[arg(long, default_value_t = 1, help = "Page number")]
        page: i64,
        #[arg(long, help = "Results per page (server default when omitted)")]
        per_page: Option<i64>,
    },
}

pub async fn handle(cmd: SearchCommands, client: &ApiClient, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        SearchCommands::Subcategory { query, page, per_page } => {
            let response = client.search(query.as_deref(), page, per_page).await?;
            match output_format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&response)?),
                OutputFormat::Text => print!("{}", format_search_table(&response)),
            }
            Ok(())
        }
    }
}
