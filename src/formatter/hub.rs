use crate::formatter::{NOT_AVAILABLE, TextContent, banner, format_optional_count, join_or};
use crate::types::{DatasetRecord, HubCategory, HubSearchResults, ModelRecord, SpaceRecord};

/// Tags shown per record in text output
pub const DISPLAY_TAG_LIMIT: usize = 5;

fn display_tags(tags: &[String]) -> String {
    join_or(&tags[..tags.len().min(DISPLAY_TAG_LIMIT)], "None")
}

pub fn model_text(model: &ModelRecord, index: usize) -> TextContent {
    TextContent(format!(
        "\n[{}] MODEL: {}\n    Downloads: {} | Likes: {}\n    Task: {} | Library: {}\n    Tags: {}\n    URL: {}\n",
        index,
        model.id,
        format_optional_count(model.downloads),
        format_optional_count(model.likes),
        model.task.as_deref().unwrap_or(NOT_AVAILABLE),
        model.library.as_deref().unwrap_or(NOT_AVAILABLE),
        display_tags(&model.tags),
        model.url
    ))
}

pub fn dataset_text(dataset: &DatasetRecord, index: usize) -> TextContent {
    TextContent(format!(
        "\n[{}] DATASET: {}\n    Downloads: {} | Likes: {}\n    Tags: {}\n    URL: {}\n",
        index,
        dataset.id,
        format_optional_count(dataset.downloads),
        format_optional_count(dataset.likes),
        display_tags(&dataset.tags),
        dataset.url
    ))
}

pub fn space_text(space: &SpaceRecord, index: usize) -> TextContent {
    TextContent(format!(
        "\n[{}] SPACE: {}\n    Likes: {} | SDK: {}\n    Tags: {}\n    URL: {}\n",
        index,
        space.id,
        format_optional_count(space.likes),
        space.sdk.as_deref().unwrap_or(NOT_AVAILABLE),
        display_tags(&space.tags),
        space.url
    ))
}

/// Appends one category section: a count header, then every record or a
/// single "not found" line.
fn push_section<T>(
    content: &mut String,
    category: HubCategory,
    records: &[T],
    render: impl Fn(&T, usize) -> TextContent,
) {
    content.push_str(&format!(
        "\n--- {} ({} found) ---\n",
        category.to_string().to_uppercase(),
        records.len()
    ));

    if records.is_empty() {
        content.push_str(&format!("  No {} found.\n", category));
        return;
    }

    for (offset, record) in records.iter().enumerate() {
        content.push_str(&format!("{}\n", render(record, offset + 1)));
    }
}

/// Full text report; only categories present in `results` get a section
pub fn hub_results_text(query: &str, results: &HubSearchResults) -> TextContent {
    let mut content = String::new();
    content.push_str(&format!("\n{}\n", banner()));
    content.push_str(&format!("Hugging Face Search Results for: '{}'\n", query));
    content.push_str(&format!("{}\n", banner()));

    if let Some(models) = &results.models {
        push_section(&mut content, HubCategory::Models, models, model_text);
    }
    if let Some(datasets) = &results.datasets {
        push_section(&mut content, HubCategory::Datasets, datasets, dataset_text);
    }
    if let Some(spaces) = &results.spaces {
        push_section(&mut content, HubCategory::Spaces, spaces, space_text);
    }

    TextContent(content)
}
