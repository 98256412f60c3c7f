//! Repository domain types
//!
//! `RepositorySummary` is the record produced by a repository search and
//! `RepositoryDetail` the extended record fetched on demand for one
//! repository. JSON field names follow the GitHub CLI's camelCase naming so
//! output stays interchangeable with `gh search repos --json`.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::github::graphql::graphql_types::repository::RepositoryDetailNode;
use crate::github::rest_types::RepositorySearchItem;

static SIMPLE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([^/\s]+)/([^/\s]+)$").expect("Failed to compile simple regex"));

/// Owner name wrapper for type safety
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct Owner(pub String);

impl Owner {
    pub fn new(owner: String) -> Self {
        Self(owner)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Owner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Repository name wrapper for type safety
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct RepositoryName(pub String);

impl RepositoryName {
    pub fn new(repo_name: String) -> Self {
        Self(repo_name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RepositoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A strongly-typed `owner/name` repository identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct RepositoryId {
    pub owner: Owner,
    pub repository_name: RepositoryName,
}

impl RepositoryId {
    /// Parse an `owner/repo` full name as returned by search
    pub fn parse(input: &str) -> Result<Self, String> {
        let input_str = input.trim().trim_end_matches('/');

        match SIMPLE_REGEX.captures(input_str) {
            Some(captures) => match (captures.get(1), captures.get(2)) {
                (Some(owner), Some(repo)) => Ok(Self::new(owner.as_str(), repo.as_str())),
                _ => Err(format!("Invalid repository format: {}", input_str)),
            },
            None => Err(format!("Invalid repository format: {}", input_str)),
        }
    }

    pub fn new<T1: Into<String>, T2: Into<String>>(owner: T1, name: T2) -> Self {
        Self {
            owner: Owner::new(owner.into()),
            repository_name: RepositoryName::new(name.into()),
        }
    }

    /// Returns the full name (owner/repository_name format)
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repository_name)
    }
}

impl std::fmt::Display for RepositoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.full_name())
    }
}

/// Sort order of a repository search; results are always descending
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RepositorySort {
    #[default]
    Stars,
    Forks,
    Updated,
}

/// Minimal normalized record produced by a repository search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositorySummary {
    pub full_name: String,
    pub description: Option<String>,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub updated_at: DateTime<Utc>,
    pub language: Option<String>,
    pub url: String,
    pub is_archived: bool,
}

impl From<RepositorySearchItem> for RepositorySummary {
    fn from(item: RepositorySearchItem) -> Self {
        Self {
            full_name: item.full_name,
            description: item.description.filter(|d| !d.is_empty()),
            stargazers_count: item.stargazers_count,
            forks_count: item.forks_count,
            updated_at: item.updated_at,
            language: item.language.filter(|l| !l.is_empty()),
            url: item.html_url,
            is_archived: item.archived,
        }
    }
}

/// One entry of a repository's language breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageShare {
    pub name: String,
    /// Bytes of code in this language
    pub size: u64,
}

/// Extended repository information fetched per result in detailed mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryDetail {
    pub topics: Vec<String>,
    /// Ordered by size, largest first
    pub languages: Vec<LanguageShare>,
    pub license_name: Option<String>,
    pub homepage_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub pushed_at: Option<DateTime<Utc>>,
    pub watchers_count: Option<u64>,
    pub is_fork: Option<bool>,
    pub open_issues_count: Option<u64>,
    pub open_pull_requests_count: Option<u64>,
    pub readme: Option<String>,
}

fn parse_optional_timestamp(
    value: Option<String>,
    field: &str,
) -> anyhow::Result<Option<DateTime<Utc>>> {
    use anyhow::Context;

    value
        .map(|raw| {
            chrono::DateTime::parse_from_rfc3339(&raw)
                .with_context(|| format!("Failed to parse {} timestamp", field))
                .map(|date| date.with_timezone(&Utc))
        })
        .transpose()
}

impl TryFrom<RepositoryDetailNode> for RepositoryDetail {
    type Error = anyhow::Error;

    fn try_from(node: RepositoryDetailNode) -> Result<Self, Self::Error> {
        let readme = node.readme_text().map(str::to_string);

        let created_at = parse_optional_timestamp(node.created_at, "created_at")?;
        let pushed_at = parse_optional_timestamp(node.pushed_at, "pushed_at")?;

        let topics = node
            .repository_topics
            .map(|topics| topics.nodes.into_iter().map(|n| n.topic.name).collect())
            .unwrap_or_default();

        let languages = node
            .languages
            .map(|languages| {
                languages
                    .edges
                    .into_iter()
                    .map(|edge| LanguageShare {
                        name: edge.node.name,
                        size: edge.size,
                    })
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            topics,
            languages,
            license_name: node.license_info.and_then(|license| license.name),
            homepage_url: node.homepage_url.filter(|url| !url.is_empty()),
            created_at,
            pushed_at,
            watchers_count: node.watchers.map(|w| w.total_count),
            is_fork: node.is_fork,
            open_issues_count: node.issues.map(|i| i.total_count),
            open_pull_requests_count: node.pull_requests.map(|p| p.total_count),
            readme,
        })
    }
}

/// A search result paired with its detail, as emitted by `--json --detailed`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailedRepository {
    #[serde(flatten)]
    pub summary: RepositorySummary,
    pub details: Option<RepositoryDetail>,
}
