use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::env;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use catalog_search::formatter::hub_results_text;
use catalog_search::huggingface::{DEFAULT_HUB_ENDPOINT, HubClient};
use catalog_search::services::{HubSearchOptions, HubSearchService};
use catalog_search::types::{DEFAULT_RESULT_LIMIT, HubCategory, HubCategorySelection, SearchQuery};

#[derive(Parser)]
#[command(name = "search-huggingface")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Search Hugging Face Hub (Models, Datasets, Spaces)")]
#[command(after_help = "Examples:
  search-huggingface \"object detection\" --type models --limit 10
  search-huggingface \"coco\" --type datasets --limit 5
  search-huggingface \"gradio demo\" --type spaces --limit 10
  search-huggingface \"segment anything\" --type all

Tasks (for --task filter):
  Models: object-detection, image-segmentation, image-classification, etc.
  Datasets: object-detection, image-classification, etc.

SDKs (for --sdk filter):
  gradio, streamlit, docker, static")]
struct Cli {
    /// Search keyword
    query: String,
    /// Resource type to search
    #[arg(short = 't', long = "type", value_enum, default_value = "all")]
    category: CategoryCli,
    /// Number of results per type
    #[arg(short = 'n', long, default_value_t = DEFAULT_RESULT_LIMIT)]
    limit: usize,
    /// Filter by task (models/datasets only)
    #[arg(long)]
    task: Option<String>,
    /// Filter by library (models only)
    #[arg(long)]
    library: Option<String>,
    /// Filter by SDK (spaces only): gradio, streamlit, docker, static
    #[arg(long)]
    sdk: Option<String>,
    /// Output as JSON
    #[arg(short, long)]
    json: bool,
    /// Hub access token (can also be set via HF_TOKEN)
    #[arg(long)]
    hf_token: Option<String>,
    /// Hub endpoint (can also be set via HF_ENDPOINT; default: https://huggingface.co)
    #[arg(long)]
    endpoint: Option<String>,
    /// Request timeout in seconds for Hub API calls (default: 30 seconds)
    #[arg(long)]
    request_timeout: Option<u64>,
}

#[derive(Clone, ValueEnum)]
enum CategoryCli {
    Models,
    Datasets,
    Spaces,
    All,
}

impl From<CategoryCli> for HubCategorySelection {
    fn from(cli_category: CategoryCli) -> Self {
        match cli_category {
            CategoryCli::Models => HubCategorySelection::Models,
            CategoryCli::Datasets => HubCategorySelection::Datasets,
            CategoryCli::Spaces => HubCategorySelection::Spaces,
            CategoryCli::All => HubCategorySelection::All,
        }
    }
}

fn progress_label(category: HubCategory) -> &'static str {
    match category {
        HubCategory::Models => "Models",
        HubCategory::Datasets => "Datasets",
        HubCategory::Spaces => "Spaces",
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize rustls crypto provider early to prevent "no process-level CryptoProvider available" panics
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    // Diagnostics go to stderr so stdout carries only results
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("catalog_search=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let endpoint = cli
        .endpoint
        .or_else(|| env::var("HF_ENDPOINT").ok())
        .unwrap_or_else(|| DEFAULT_HUB_ENDPOINT.to_string());
    let hf_token = cli.hf_token.or_else(|| env::var("HF_TOKEN").ok());

    let hub_client = match HubClient::new(
        &endpoint,
        hf_token,
        cli.request_timeout.map(Duration::from_secs),
    ) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: Hugging Face Hub client is not available: {:#}", e);
            eprintln!(
                "Check --endpoint / HF_ENDPOINT (default: {})",
                DEFAULT_HUB_ENDPOINT
            );
            std::process::exit(1);
        }
    };
    let service = HubSearchService::new(hub_client);

    let query = SearchQuery::new(cli.query);
    let options = HubSearchOptions {
        selection: cli.category.into(),
        limit: cli.limit,
        task: cli.task,
        library: cli.library,
        sdk: cli.sdk,
    };

    let results = service
        .search_hub(&query, &options, |category| {
            eprintln!(
                "Searching {} for: '{}'...",
                progress_label(category),
                query
            );
        })
        .await;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print!("{}", hub_results_text(query.as_str(), &results));
    }

    Ok(())
}
