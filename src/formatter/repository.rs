use crate::formatter::{
    NOT_AVAILABLE, TextContent, banner, format_count, format_date, format_optional_count,
    format_optional_date, join_or,
};
use crate::types::{RepositoryDetail, RepositorySummary};

/// README characters kept in the detailed view
pub const README_CHAR_LIMIT: usize = 2000;

/// Appended to a README cut at [`README_CHAR_LIMIT`]
pub const README_TRUNCATION_MARKER: &str = "\n... [truncated]";

/// Cuts `readme` to [`README_CHAR_LIMIT`] characters plus the marker.
///
/// Limits count Unicode scalar values, not bytes, so multi-byte text is never
/// split inside a character. Text at or under the limit is returned as is.
pub fn truncate_readme(readme: &str) -> String {
    match readme.char_indices().nth(README_CHAR_LIMIT) {
        Some((cut, _)) => format!("{}{}", &readme[..cut], README_TRUNCATION_MARKER),
        None => readme.to_string(),
    }
}

pub fn repository_summary_text(repository: &RepositorySummary) -> TextContent {
    let archived = if repository.is_archived {
        " [ARCHIVED]"
    } else {
        ""
    };
    let language = repository.language.as_deref().unwrap_or(NOT_AVAILABLE);
    let description = repository
        .description
        .as_deref()
        .unwrap_or("No description");

    let mut content = String::new();
    content.push('\n');
    content.push_str(&format!("{}\n", banner()));
    content.push_str(&format!("{}{}\n", repository.full_name, archived));
    content.push_str(&format!("{}\n", banner()));
    content.push_str(&format!(
        "Stars: {} | Forks: {} | Language: {}\n",
        format_count(repository.stargazers_count),
        format_count(repository.forks_count),
        language
    ));
    content.push_str(&format!("Updated: {}\n", format_date(repository.updated_at)));
    content.push_str(&format!("URL: {}\n", repository.url));
    content.push_str(&format!("\nDescription:\n{}\n", description));

    TextContent(content)
}

pub fn repository_detail_text(detail: &RepositoryDetail) -> TextContent {
    let languages: Vec<&str> = detail.languages.iter().map(|l| l.name.as_str()).collect();
    let readme = match &detail.readme {
        Some(readme) => truncate_readme(readme),
        None => "No README available".to_string(),
    };

    let mut content = String::new();
    content.push_str("\n--- Detailed Info ---\n");
    content.push_str(&format!("Topics: {}\n", join_or(&detail.topics, "None")));
    content.push_str(&format!("Languages: {}\n", join_or(&languages, NOT_AVAILABLE)));
    content.push_str(&format!(
        "License: {}\n",
        detail.license_name.as_deref().unwrap_or(NOT_AVAILABLE)
    ));
    content.push_str(&format!("Created: {}\n", format_optional_date(detail.created_at)));
    content.push_str(&format!("Last Push: {}\n", format_optional_date(detail.pushed_at)));
    content.push_str(&format!(
        "Open Issues: {}\n",
        format_optional_count(detail.open_issues_count)
    ));
    content.push_str(&format!(
        "Open PRs: {}\n",
        format_optional_count(detail.open_pull_requests_count)
    ));
    content.push_str(&format!("\n--- README ---\n{}\n", readme));

    TextContent(content)
}
