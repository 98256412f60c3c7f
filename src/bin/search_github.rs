use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

use catalog_search::github::GitHubClient;
use catalog_search::github::auth::resolve_token;
use catalog_search::services::RepositorySearchService;
use catalog_search::types::{DEFAULT_RESULT_LIMIT, RepositorySort, SearchQuery};

#[derive(Parser)]
#[command(name = "search-github")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Search GitHub repositories")]
#[command(
    long_about = "Search GitHub repositories by keyword, optionally filtered by language, and print a summary of each match. Authentication comes from --github-token, GITHUB_TOKEN, GH_TOKEN, or an authenticated gh CLI session (https://cli.github.com/)."
)]
#[command(after_help = "Examples:
  search-github \"object detection\" --limit 10
  search-github \"gradio app\" --language python
  search-github \"yolo world\" --detailed --sort stars")]
struct Cli {
    /// Search keyword
    query: String,
    /// Number of results
    #[arg(short = 'n', long, default_value_t = DEFAULT_RESULT_LIMIT)]
    limit: usize,
    /// Filter by programming language
    #[arg(short, long)]
    language: Option<String>,
    /// Sort criteria, always descending
    #[arg(short, long, value_enum, default_value = "stars")]
    sort: SortCli,
    /// Show detailed info including README (one extra request per result)
    #[arg(short, long)]
    detailed: bool,
    /// Output as JSON
    #[arg(short, long)]
    json: bool,
    /// GitHub token; defaults to GITHUB_TOKEN, GH_TOKEN, then `gh auth token`
    #[arg(long)]
    github_token: Option<String>,
    /// Request timeout in seconds for GitHub API calls (default: 30 seconds)
    #[arg(long)]
    request_timeout: Option<u64>,
}

#[derive(Clone, ValueEnum)]
enum SortCli {
    Stars,
    Forks,
    Updated,
}

impl From<SortCli> for RepositorySort {
    fn from(cli_sort: SortCli) -> Self {
        match cli_sort {
            SortCli::Stars => RepositorySort::Stars,
            SortCli::Forks => RepositorySort::Forks,
            SortCli::Updated => RepositorySort::Updated,
        }
    }
}

fn exit_unauthenticated() -> ! {
    eprintln!("Error: gh CLI is not installed or not authenticated.");
    eprintln!("Install: https://cli.github.com/");
    eprintln!("Then run: gh auth login");
    eprintln!("Or export GITHUB_TOKEN with a personal access token.");
    std::process::exit(1);
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

    let Some(resolved) = resolve_token(cli.github_token) else {
        exit_unauthenticated();
    };
    info!("Using GitHub token from {}", resolved.source);

    let github_client =
        match GitHubClient::new(Some(resolved.token), cli.request_timeout.map(Duration::from_secs))
        {
            Ok(client) => client,
            Err(e) => {
                eprintln!("Error: failed to initialize GitHub client: {:#}", e);
                std::process::exit(1);
            }
        };
    let service = RepositorySearchService::new(github_client);

    let query = SearchQuery::new(cli.query);
    eprintln!("Searching GitHub for: '{}'...\n", query);

    let repositories = service
        .search_repos(
            &query,
            cli.limit,
            cli.language.as_deref(),
            cli.sort.into(),
            cli.detailed,
        )
        .await;

    if repositories.is_empty() {
        eprintln!("No repositories found.");
        return Ok(());
    }

    if cli.json {
        let json_output = if cli.detailed {
            let detailed = service.collect_details(repositories).await;
            serde_json::to_string_pretty(&detailed)?
        } else {
            serde_json::to_string_pretty(&repositories)?
        };
        println!("{}", json_output);
    } else {
        let mut stdout = std::io::stdout().lock();
        service
            .write_text_report(&repositories, cli.detailed, &mut stdout)
            .await?;
    }

    Ok(())
}
