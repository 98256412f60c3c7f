use serde::{Deserialize, Serialize};

use super::TotalCount;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryDetailResponse {
    pub repository: Option<RepositoryDetailNode>,
}

/// Extended repository fields requested by the detail query
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryDetailNode {
    pub homepage_url: Option<String>,
    pub created_at: Option<String>,
    pub pushed_at: Option<String>,
    pub is_fork: Option<bool>,
    pub watchers: Option<TotalCount>,
    pub repository_topics: Option<TopicsConnection>,
    pub languages: Option<LanguagesConnection>,
    pub license_info: Option<LicenseNode>,
    pub issues: Option<TotalCount>,
    pub pull_requests: Option<TotalCount>,
    #[serde(default)]
    pub readme0: Option<BlobNode>,
    #[serde(default)]
    pub readme1: Option<BlobNode>,
    #[serde(default)]
    pub readme2: Option<BlobNode>,
    #[serde(default)]
    pub readme3: Option<BlobNode>,
}

impl RepositoryDetailNode {
    /// Text of the first README candidate that resolved to a text blob
    pub fn readme_text(&self) -> Option<&str> {
        [&self.readme0, &self.readme1, &self.readme2, &self.readme3]
            .into_iter()
            .flatten()
            .find_map(|blob| blob.text.as_deref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicsConnection {
    #[serde(default)]
    pub nodes: Vec<RepositoryTopicNode>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryTopicNode {
    pub topic: TopicNode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicNode {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguagesConnection {
    #[serde(default)]
    pub edges: Vec<LanguageEdge>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageEdge {
    pub size: u64,
    pub node: LanguageNode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageNode {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LicenseNode {
    pub name: Option<String>,
}

/// `object(expression:)` result; `text` is absent for trees and binary blobs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlobNode {
    #[serde(default)]
    pub text: Option<String>,
}
