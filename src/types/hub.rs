//! Hub resource records
//!
//! Raw listing entries from the Hub are normalized into one record type per
//! category. Tag lists are capped at [`MAX_RECORD_TAGS`] and a missing author
//! is recovered from the `owner/` prefix of the identifier.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::huggingface::api_types::{DatasetInfo, ModelInfo, SpaceInfo};

/// Maximum number of tags kept on a record
pub const MAX_RECORD_TAGS: usize = 10;

/// One of the three Hub resource kinds
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum HubCategory {
    Models,
    Datasets,
    Spaces,
}

impl HubCategory {
    /// Listing path below the Hub endpoint
    pub fn api_path(&self) -> &'static str {
        match self {
            Self::Models => "api/models",
            Self::Datasets => "api/datasets",
            Self::Spaces => "api/spaces",
        }
    }

    /// Path prefix of a resource page on the Hub website
    pub fn web_prefix(&self) -> &'static str {
        match self {
            Self::Models => "",
            Self::Datasets => "datasets/",
            Self::Spaces => "spaces/",
        }
    }
}

/// The `--type` selector: a single category or all three
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HubCategorySelection {
    Models,
    Datasets,
    Spaces,
    #[default]
    All,
}

impl HubCategorySelection {
    /// Categories to query, in output order
    pub fn categories(&self) -> Vec<HubCategory> {
        match self {
            Self::Models => vec![HubCategory::Models],
            Self::Datasets => vec![HubCategory::Datasets],
            Self::Spaces => vec![HubCategory::Spaces],
            Self::All => vec![
                HubCategory::Models,
                HubCategory::Datasets,
                HubCategory::Spaces,
            ],
        }
    }
}

fn truncate_tags(tags: Option<Vec<String>>) -> Vec<String> {
    let mut tags = tags.unwrap_or_default();
    tags.truncate(MAX_RECORD_TAGS);
    tags
}

fn author_or_owner(author: Option<String>, id: &str) -> Option<String> {
    author.filter(|a| !a.is_empty()).or_else(|| {
        id.split_once('/')
            .map(|(owner, _)| owner.to_string())
            .filter(|owner| !owner.is_empty())
    })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelRecord {
    pub id: String,
    pub author: Option<String>,
    pub downloads: Option<u64>,
    pub likes: Option<u64>,
    pub task: Option<String>,
    pub library: Option<String>,
    pub tags: Vec<String>,
    pub url: String,
    pub last_modified: Option<DateTime<Utc>>,
}

impl ModelRecord {
    pub fn from_api(info: ModelInfo, url: String) -> Self {
        Self {
            author: author_or_owner(info.author, &info.id),
            downloads: info.downloads,
            likes: info.likes,
            task: info.pipeline_tag,
            library: info.library_name,
            tags: truncate_tags(info.tags),
            url,
            last_modified: info.last_modified,
            id: info.id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetRecord {
    pub id: String,
    pub author: Option<String>,
    pub downloads: Option<u64>,
    pub likes: Option<u64>,
    pub tags: Vec<String>,
    pub url: String,
    pub last_modified: Option<DateTime<Utc>>,
}

impl DatasetRecord {
    pub fn from_api(info: DatasetInfo, url: String) -> Self {
        Self {
            author: author_or_owner(info.author, &info.id),
            downloads: info.downloads,
            likes: info.likes,
            tags: truncate_tags(info.tags),
            url,
            last_modified: info.last_modified,
            id: info.id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpaceRecord {
    pub id: String,
    pub author: Option<String>,
    pub likes: Option<u64>,
    pub sdk: Option<String>,
    pub tags: Vec<String>,
    pub url: String,
    pub last_modified: Option<DateTime<Utc>>,
}

impl SpaceRecord {
    pub fn from_api(info: SpaceInfo, url: String) -> Self {
        Self {
            author: author_or_owner(info.author, &info.id),
            likes: info.likes,
            sdk: info.sdk,
            tags: truncate_tags(info.tags),
            url,
            last_modified: info.last_modified,
            id: info.id,
        }
    }
}

/// Results keyed by category; categories that were not queried are absent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HubSearchResults {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub models: Option<Vec<ModelRecord>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datasets: Option<Vec<DatasetRecord>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spaces: Option<Vec<SpaceRecord>>,
}
