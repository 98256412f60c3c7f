//! REST wire types for `GET /search/repositories`

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Query string of a repository search request
#[derive(Debug, Clone, Serialize)]
pub struct RepositorySearchParams {
    pub q: String,
    pub sort: String,
    pub order: &'static str,
    pub per_page: u32,
    pub page: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RepositorySearchResponse {
    #[serde(default)]
    pub total_count: u64,
    pub items: Vec<RepositorySearchItem>,
}

/// The subset of a search hit that becomes a `RepositorySummary`
#[derive(Debug, Clone, Deserialize)]
pub struct RepositorySearchItem {
    pub full_name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    pub updated_at: DateTime<Utc>,
    pub language: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub archived: bool,
}
