use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use tokio::time::Duration;
use tracing::info;
use url::Url;

use crate::huggingface::api_types::{DatasetInfo, ModelInfo, SpaceInfo};
use crate::huggingface::error::HubApiError;
use crate::types::HubCategory;

/// Public Hugging Face Hub
pub const DEFAULT_HUB_ENDPOINT: &str = "https://huggingface.co";

/// Timeout applied when the caller does not configure one
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Parameters of one listing request.
///
/// Listings are always sorted in descending order of `sort`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HubListRequest {
    pub search: String,
    pub limit: usize,
    pub sort: &'static str,
    pub pipeline_tag: Option<String>,
    /// Tag filters; every entry must match
    pub filters: Vec<String>,
}

impl HubListRequest {
    pub fn new<T: Into<String>>(search: T, limit: usize, sort: &'static str) -> Self {
        Self {
            search: search.into(),
            limit,
            sort,
            pipeline_tag: None,
            filters: Vec::new(),
        }
    }

    /// Query string pairs; `filter` repeats once per entry
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("search", self.search.clone()),
            ("limit", self.limit.to_string()),
            ("sort", self.sort.to_string()),
            ("direction", "-1".to_string()),
        ];
        if let Some(pipeline_tag) = &self.pipeline_tag {
            pairs.push(("pipeline_tag", pipeline_tag.clone()));
        }
        for filter in &self.filters {
            pairs.push(("filter", filter.clone()));
        }
        pairs
    }
}

/// Explicit handle to the Hub API, created once per invocation
#[derive(Clone)]
pub struct HubClient {
    client: reqwest::Client,
    endpoint: Url,
    token: Option<String>,
}

impl HubClient {
    pub fn new(endpoint: &str, token: Option<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut endpoint =
            Url::parse(endpoint).with_context(|| format!("Invalid Hub endpoint: {}", endpoint))?;
        if endpoint.cannot_be_a_base() {
            anyhow::bail!("Invalid Hub endpoint: {}", endpoint);
        }
        // Listing paths are joined onto the endpoint, so it must end with '/'
        if !endpoint.path().ends_with('/') {
            let path = format!("{}/", endpoint.path());
            endpoint.set_path(&path);
        }

        let client = reqwest::Client::builder()
            .user_agent(concat!("catalog-search/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout.unwrap_or(DEFAULT_REQUEST_TIMEOUT))
            .build()
            .context("Failed to build Hub HTTP client")?;

        Ok(Self {
            client,
            endpoint,
            token: token.filter(|t| !t.trim().is_empty()),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Web page of a resource, e.g. `https://huggingface.co/datasets/coco`
    pub fn resource_url(&self, category: HubCategory, id: &str) -> String {
        format!(
            "{}/{}{}",
            self.endpoint.as_str().trim_end_matches('/'),
            category.web_prefix(),
            id
        )
    }

    pub async fn list_models(&self, request: &HubListRequest) -> Result<Vec<ModelInfo>> {
        self.list(HubCategory::Models, request).await
    }

    pub async fn list_datasets(&self, request: &HubListRequest) -> Result<Vec<DatasetInfo>> {
        self.list(HubCategory::Datasets, request).await
    }

    pub async fn list_spaces(&self, request: &HubListRequest) -> Result<Vec<SpaceInfo>> {
        self.list(HubCategory::Spaces, request).await
    }

    async fn list<T: DeserializeOwned>(
        &self,
        category: HubCategory,
        request: &HubListRequest,
    ) -> Result<Vec<T>> {
        let url = self
            .endpoint
            .join(category.api_path())
            .with_context(|| format!("Failed to build {} listing URL", category))?;

        info!("Listing {}: {:?}", category, request);
        let start_time = std::time::Instant::now();

        let mut builder = self.client.get(url).query(&request.query_pairs());
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }

        let response = builder
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(HubApiError::from_reqwest_error)?;

        let records: Vec<T> = response
            .json()
            .await
            .map_err(|e| HubApiError::Decode(e.to_string()))?;

        info!(
            "Listed {} {} in {:?}",
            records.len(),
            category,
            start_time.elapsed()
        );
        Ok(records)
    }
}
