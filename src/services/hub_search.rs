use crate::huggingface::{HubClient, HubListRequest};
use crate::types::{
    DatasetRecord, HubCategory, HubCategorySelection, HubSearchResults, ModelRecord, SearchQuery,
    SpaceRecord,
};

/// Filters of a Hub search; each applies only to the categories that support it
#[derive(Debug, Clone, Default)]
pub struct HubSearchOptions {
    pub selection: HubCategorySelection,
    /// Per category
    pub limit: usize,
    /// Models and datasets
    pub task: Option<String>,
    /// Models only
    pub library: Option<String>,
    /// Spaces only
    pub sdk: Option<String>,
}

/// Service for searching the three Hub categories.
///
/// A failed listing is logged and yields an empty category; the remaining
/// categories still run.
pub struct HubSearchService {
    hub_client: HubClient,
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl HubSearchService {
    pub fn new(hub_client: HubClient) -> Self {
        Self { hub_client }
    }

    /// Models sorted by downloads, optionally filtered by pipeline task and library
    pub async fn search_models(
        &self,
        query: &SearchQuery,
        limit: usize,
        task: Option<&str>,
        library: Option<&str>,
    ) -> Vec<ModelRecord> {
        if limit == 0 {
            return Vec::new();
        }

        let mut request = HubListRequest::new(query.as_str(), limit, "downloads");
        request.pipeline_tag = non_blank(task);
        request.filters.extend(non_blank(library));

        match self.hub_client.list_models(&request).await {
            Ok(models) => models
                .into_iter()
                .take(limit)
                .map(|info| {
                    let url = self.hub_client.resource_url(HubCategory::Models, &info.id);
                    ModelRecord::from_api(info, url)
                })
                .collect(),
            Err(e) => {
                tracing::error!("Error searching models: {:#}", e);
                Vec::new()
            }
        }
    }

    /// Datasets sorted by downloads, optionally filtered by task category
    pub async fn search_datasets(
        &self,
        query: &SearchQuery,
        limit: usize,
        task: Option<&str>,
    ) -> Vec<DatasetRecord> {
        if limit == 0 {
            return Vec::new();
        }

        let mut request = HubListRequest::new(query.as_str(), limit, "downloads");
        request
            .filters
            .extend(non_blank(task).map(|task| format!("task_categories:{}", task)));

        match self.hub_client.list_datasets(&request).await {
            Ok(datasets) => datasets
                .into_iter()
                .take(limit)
                .map(|info| {
                    let url = self
                        .hub_client
                        .resource_url(HubCategory::Datasets, &info.id);
                    DatasetRecord::from_api(info, url)
                })
                .collect(),
            Err(e) => {
                tracing::error!("Error searching datasets: {:#}", e);
                Vec::new()
            }
        }
    }

    /// Spaces sorted by likes, optionally filtered by SDK
    pub async fn search_spaces(
        &self,
        query: &SearchQuery,
        limit: usize,
        sdk: Option<&str>,
    ) -> Vec<SpaceRecord> {
        if limit == 0 {
            return Vec::new();
        }

        let mut request = HubListRequest::new(query.as_str(), limit, "likes");
        request.filters.extend(non_blank(sdk));

        match self.hub_client.list_spaces(&request).await {
            Ok(spaces) => spaces
                .into_iter()
                .take(limit)
                .map(|info| {
                    let url = self.hub_client.resource_url(HubCategory::Spaces, &info.id);
                    SpaceRecord::from_api(info, url)
                })
                .collect(),
            Err(e) => {
                tracing::error!("Error searching spaces: {:#}", e);
                Vec::new()
            }
        }
    }

    /// Runs the selected categories one after another.
    ///
    /// `on_category` is called before each category's request, which the CLI
    /// uses for progress lines. Unselected categories stay `None`.
    pub async fn search_hub<F>(
        &self,
        query: &SearchQuery,
        options: &HubSearchOptions,
        mut on_category: F,
    ) -> HubSearchResults
    where
        F: FnMut(HubCategory),
    {
        let mut results = HubSearchResults::default();

        for category in options.selection.categories() {
            on_category(category);
            match category {
                HubCategory::Models => {
                    results.models = Some(
                        self.search_models(
                            query,
                            options.limit,
                            options.task.as_deref(),
                            options.library.as_deref(),
                        )
                        .await,
                    );
                }
                HubCategory::Datasets => {
                    results.datasets = Some(
                        self.search_datasets(query, options.limit, options.task.as_deref())
                            .await,
                    );
                }
                HubCategory::Spaces => {
                    results.spaces = Some(
                        self.search_spaces(query, options.limit, options.sdk.as_deref())
                            .await,
                    );
                }
            }
        }

        results
    }
}
