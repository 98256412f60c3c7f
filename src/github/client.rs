use crate::github::error::ApiError;
use crate::github::graphql::error::classify_graphql_error;
use crate::github::graphql::graphql_types::repository::RepositoryDetailResponse;
use crate::github::graphql::graphql_types::{GraphQLPayload, GraphQLQuery, GraphQLResponse};
use crate::github::graphql::repository::{RepositoryVariable, repository_detail_query};
use crate::github::rest_types::{RepositorySearchParams, RepositorySearchResponse};
use crate::types::{RepositoryDetail, RepositoryId, RepositorySort, RepositorySummary, SearchQuery};

use anyhow::{Context, Result};
use octocrab::Octocrab;
use octocrab::service::middleware::retry::RetryConfig;
use serde::{Deserialize, Serialize};
use tokio::time::Duration;
use tracing::{info, warn};

/// GitHub caps `per_page` of the search API at 100
pub const SEARCH_MAX_PER_PAGE: usize = 100;

/// The search API only serves the first 1000 matches of a query
pub const SEARCH_MAX_RESULTS: usize = 1000;

/// Timeout applied when the caller does not configure one
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub trait GraphQLExecutor {
    #[allow(async_fn_in_trait)]
    async fn execute_graphql<T: Serialize, R: for<'de> Deserialize<'de>>(
        &self,
        query_name: &str,
        payload: GraphQLPayload<T>,
    ) -> Result<GraphQLResponse<R>>;
}

/// Explicit handle to the GitHub API, created once per invocation
#[derive(Clone)]
pub struct GitHubClient {
    pub(crate) client: octocrab::Octocrab,
}

impl GitHubClient {
    pub fn new(token: Option<String>, timeout: Option<Duration>) -> Result<Self> {
        Self::with_base_uri(token, timeout, None)
    }

    /// Builds a client against an alternative API root (GitHub Enterprise, test servers)
    pub fn with_base_uri(
        token: Option<String>,
        timeout: Option<Duration>,
        base_uri: Option<&str>,
    ) -> Result<Self> {
        // Failures are reported once and treated as empty results, never retried
        let mut builder = Octocrab::builder().add_retry_config(RetryConfig::None);

        if let Some(token) = token {
            builder = builder.personal_token(token);
        }

        let timeout_duration = timeout.unwrap_or(DEFAULT_REQUEST_TIMEOUT);
        let connection_timeout = if timeout_duration < Duration::from_secs(10) {
            std::cmp::max(timeout_duration, Duration::from_secs(1))
        } else {
            Duration::from_secs(10)
        };
        let read_write_timeout = std::cmp::max(timeout_duration, Duration::from_secs(1));

        builder = builder
            .set_connect_timeout(Some(connection_timeout))
            .set_read_timeout(Some(read_write_timeout))
            .set_write_timeout(Some(read_write_timeout));

        if let Some(base_uri) = base_uri {
            builder = builder
                .base_uri(base_uri)
                .with_context(|| format!("Invalid GitHub API base URI: {}", base_uri))?;
        }

        let client = builder.build().context("Failed to build GitHub client")?;

        Ok(Self { client })
    }

    /// Searches repositories with GitHub's REST search API.
    ///
    /// Results are sorted by `sort` in descending order and optionally
    /// restricted to one primary language. Pages of at most
    /// [`SEARCH_MAX_PER_PAGE`] are requested until `limit` results are
    /// collected or the backend runs out; the returned list never exceeds
    /// `limit`.
    ///
    /// # Errors
    ///
    /// A failure of the first page aborts the search with an [`ApiError`].
    /// Later page failures are logged and the repositories collected so far
    /// are returned. Paging stops at [`SEARCH_MAX_RESULTS`].
    pub async fn search_repositories(
        &self,
        query: &SearchQuery,
        language: Option<&str>,
        sort: RepositorySort,
        limit: usize,
    ) -> Result<Vec<RepositorySummary>> {
        let mut summaries = Vec::new();
        if limit == 0 {
            return Ok(summaries);
        }

        let per_page = limit.min(SEARCH_MAX_PER_PAGE);
        let q = query.with_language(language);
        let mut page = 1;

        loop {
            let params = RepositorySearchParams {
                q: q.as_str().to_string(),
                sort: sort.to_string(),
                order: "desc",
                per_page: per_page as u32,
                page,
            };

            info!("Searching repositories: q={:?} page={}", params.q, page);
            let result: std::result::Result<RepositorySearchResponse, _> = self
                .client
                .get("/search/repositories", Some(&params))
                .await;
            let response = match result {
                Ok(response) => response,
                Err(e) if page > 1 => {
                    warn!(
                        "Search page {} failed, keeping {} collected repositories: {}",
                        page,
                        summaries.len(),
                        ApiError::from_octocrab_error(e)
                    );
                    break;
                }
                Err(e) => return Err(ApiError::from_octocrab_error(e).into()),
            };

            let received = response.items.len();
            info!(
                "Received {} repositories (total matches: {})",
                received, response.total_count
            );
            summaries.extend(response.items.into_iter().map(RepositorySummary::from));

            if summaries.len() >= limit
                || received < per_page
                || summaries.len() as u64 >= response.total_count
                || page as usize * per_page >= SEARCH_MAX_RESULTS
            {
                break;
            }
            page += 1;
        }

        summaries.truncate(limit);
        Ok(summaries)
    }

    /// Fetches topics, languages, license, counts and README of one repository
    pub async fn fetch_repository_details(
        &self,
        repository_id: &RepositoryId,
    ) -> Result<RepositoryDetail> {
        let payload = GraphQLPayload {
            query: GraphQLQuery(repository_detail_query()),
            variables: Some(RepositoryVariable {
                owner: repository_id.owner.clone(),
                repository_name: repository_id.repository_name.clone(),
            }),
        };

        let response: GraphQLResponse<RepositoryDetailResponse> = self
            .execute_graphql("repository_detail", payload)
            .await?;

        let node = response
            .data
            .and_then(|data| data.repository)
            .ok_or_else(|| {
                ApiError::NotFound(format!("No repository data for {}", repository_id))
            })?;

        RepositoryDetail::try_from(node).map_err(|e| {
            ApiError::Decode(format!("Repository detail for {}: {:#}", repository_id, e)).into()
        })
    }
}

impl GraphQLExecutor for GitHubClient {
    async fn execute_graphql<T: Serialize, R: for<'de> Deserialize<'de>>(
        &self,
        query_name: &str,
        payload: GraphQLPayload<T>,
    ) -> Result<GraphQLResponse<R>> {
        info!("Starting GraphQL request: {}", query_name);
        let start_time = std::time::Instant::now();

        let response: GraphQLResponse<R> = self
            .client
            .graphql(&payload)
            .await
            .map_err(ApiError::from_octocrab_error)?;

        info!(
            "GraphQL request {} completed in {:?}",
            query_name,
            start_time.elapsed()
        );

        if let Some(errors) = &response.errors {
            if !errors.is_empty() {
                let error_msg = errors
                    .iter()
                    .map(|e| e.message.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                return Err(classify_graphql_error(&error_msg).into());
            }
        }

        Ok(response)
    }
}
