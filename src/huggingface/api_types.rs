//! Wire records returned by the Hub listing endpoints
//!
//! Only the fields this crate renders are declared; everything else in the
//! payload is ignored. Field names follow the Hub API, which mixes
//! snake_case (`pipeline_tag`) and camelCase (`lastModified`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub id: String,
    pub author: Option<String>,
    pub downloads: Option<u64>,
    pub likes: Option<u64>,
    pub pipeline_tag: Option<String>,
    pub library_name: Option<String>,
    pub tags: Option<Vec<String>>,
    #[serde(rename = "lastModified")]
    pub last_modified: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetInfo {
    pub id: String,
    pub author: Option<String>,
    pub downloads: Option<u64>,
    pub likes: Option<u64>,
    pub tags: Option<Vec<String>>,
    #[serde(rename = "lastModified")]
    pub last_modified: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpaceInfo {
    pub id: String,
    pub author: Option<String>,
    pub likes: Option<u64>,
    pub sdk: Option<String>,
    pub tags: Option<Vec<String>>,
    #[serde(rename = "lastModified")]
    pub last_modified: Option<DateTime<Utc>>,
}
