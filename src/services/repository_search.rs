use std::io::Write;

use anyhow::Result;

use crate::formatter::{repository_detail_text, repository_summary_text};
use crate::github::GitHubClient;
use crate::types::{
    DetailedRepository, RepositoryDetail, RepositoryId, RepositorySort, RepositorySummary,
    SearchQuery,
};

/// Service for searching repositories and fetching their details.
///
/// Every backend failure is logged and converted into an empty result so a
/// single failed call never aborts the surrounding work.
pub struct RepositorySearchService {
    github_client: GitHubClient,
}

impl RepositorySearchService {
    pub fn new(github_client: GitHubClient) -> Self {
        Self { github_client }
    }

    /// Searches repositories; returns at most `limit` summaries.
    ///
    /// `detailed` does not change the search request itself: detail records
    /// are fetched per result by [`Self::get_repo_details`].
    pub async fn search_repos(
        &self,
        query: &SearchQuery,
        limit: usize,
        language: Option<&str>,
        sort: RepositorySort,
        detailed: bool,
    ) -> Vec<RepositorySummary> {
        tracing::debug!("search_repos detailed={}", detailed);

        match self
            .github_client
            .search_repositories(query, language, sort, limit)
            .await
        {
            Ok(repositories) => repositories,
            Err(e) => {
                tracing::error!("Error searching repositories: {:#}", e);
                Vec::new()
            }
        }
    }

    /// Fetches the extended record of one repository, `None` on any failure
    pub async fn get_repo_details(&self, full_name: &str) -> Option<RepositoryDetail> {
        let repository_id = match RepositoryId::parse(full_name) {
            Ok(repository_id) => repository_id,
            Err(e) => {
                tracing::error!("Error fetching repo details: {}", e);
                return None;
            }
        };

        match self
            .github_client
            .fetch_repository_details(&repository_id)
            .await
        {
            Ok(detail) => Some(detail),
            Err(e) => {
                tracing::error!("Error fetching repo details for {}: {:#}", repository_id, e);
                None
            }
        }
    }

    /// Pairs every summary with its detail, fetched one after another
    pub async fn collect_details(
        &self,
        repositories: Vec<RepositorySummary>,
    ) -> Vec<DetailedRepository> {
        let mut detailed = Vec::with_capacity(repositories.len());
        for summary in repositories {
            let details = self.get_repo_details(&summary.full_name).await;
            detailed.push(DetailedRepository { summary, details });
        }
        detailed
    }

    /// Writes the numbered text listing.
    ///
    /// In detailed mode each repository's detail is fetched right before it
    /// is printed; when that fetch fails only the detail block is skipped.
    pub async fn write_text_report<W: Write>(
        &self,
        repositories: &[RepositorySummary],
        detailed: bool,
        out: &mut W,
    ) -> Result<()> {
        writeln!(out, "Found {} repositories:\n", repositories.len())?;

        for (offset, repository) in repositories.iter().enumerate() {
            writeln!(out, "[{}] {}", offset + 1, repository_summary_text(repository))?;

            if detailed {
                if let Some(detail) = self.get_repo_details(&repository.full_name).await {
                    writeln!(out, "{}", repository_detail_text(&detail))?;
                }
            }
            out.flush()?;
        }

        Ok(())
    }
}
