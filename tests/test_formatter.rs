//! Tests for the text renderers of both tools

use chrono::{TimeZone, Utc};

use catalog_search::formatter::{
    README_CHAR_LIMIT, README_TRUNCATION_MARKER, dataset_text, hub_results_text, model_text,
    repository_detail_text, repository_summary_text, space_text,
};
use catalog_search::types::{
    DatasetRecord, HubSearchResults, LanguageShare, ModelRecord, RepositoryDetail,
    RepositorySummary, SpaceRecord,
};

fn summary() -> RepositorySummary {
    RepositorySummary {
        full_name: "ultralytics/ultralytics".to_string(),
        description: Some("Ultralytics YOLO".to_string()),
        stargazers_count: 38_456,
        forks_count: 7_012,
        updated_at: Utc.with_ymd_and_hms(2024, 6, 3, 14, 5, 6).unwrap(),
        language: Some("Python".to_string()),
        url: "https://github.com/ultralytics/ultralytics".to_string(),
        is_archived: false,
    }
}

fn empty_detail() -> RepositoryDetail {
    RepositoryDetail {
        topics: vec![],
        languages: vec![],
        license_name: None,
        homepage_url: None,
        created_at: None,
        pushed_at: None,
        watchers_count: None,
        is_fork: None,
        open_issues_count: None,
        open_pull_requests_count: None,
        readme: None,
    }
}

fn model(tags: usize) -> ModelRecord {
    ModelRecord {
        id: "facebook/detr-resnet-50".to_string(),
        author: Some("facebook".to_string()),
        downloads: Some(1_234_567),
        likes: Some(789),
        task: Some("object-detection".to_string()),
        library: None,
        tags: (0..tags).map(|i| format!("t{}", i)).collect(),
        url: "https://huggingface.co/facebook/detr-resnet-50".to_string(),
        last_modified: None,
    }
}

#[test]
fn test_repository_summary_text() {
    let text = repository_summary_text(&summary());
    let banner = "=".repeat(60);

    assert_eq!(
        text.as_str(),
        format!(
            "\n{banner}\nultralytics/ultralytics\n{banner}\nStars: 38,456 | Forks: 7,012 | Language: Python\nUpdated: 2024-06-03\nURL: https://github.com/ultralytics/ultralytics\n\nDescription:\nUltralytics YOLO\n"
        )
    );
}

#[test]
fn test_summary_text_only_shows_fields_present_in_json() {
    let repository = summary();
    let text = repository_summary_text(&repository).0;
    let json = serde_json::to_value(&repository).unwrap();

    assert!(text.contains(json["fullName"].as_str().unwrap()));
    assert!(text.contains(json["url"].as_str().unwrap()));
    assert!(text.contains(json["description"].as_str().unwrap()));
    assert!(text.contains(json["language"].as_str().unwrap()));
    assert!(text.contains(&json["updatedAt"].as_str().unwrap()[..10]));
}

#[test]
fn test_repository_detail_placeholders() {
    let text = repository_detail_text(&empty_detail()).0;

    assert_eq!(
        text,
        "\n--- Detailed Info ---\nTopics: None\nLanguages: N/A\nLicense: N/A\nCreated: N/A\nLast Push: N/A\nOpen Issues: N/A\nOpen PRs: N/A\n\n--- README ---\nNo README available\n"
    );
}

#[test]
fn test_repository_detail_values() {
    let detail = RepositoryDetail {
        topics: vec!["yolo".to_string(), "detection".to_string()],
        languages: vec![
            LanguageShare {
                name: "Python".to_string(),
                size: 1000,
            },
            LanguageShare {
                name: "Dockerfile".to_string(),
                size: 10,
            },
        ],
        license_name: Some("AGPL-3.0".to_string()),
        created_at: Some(Utc.with_ymd_and_hms(2022, 9, 10, 0, 0, 0).unwrap()),
        pushed_at: Some(Utc.with_ymd_and_hms(2024, 6, 3, 0, 0, 0).unwrap()),
        open_issues_count: Some(1_024),
        open_pull_requests_count: Some(0),
        readme: Some("# Ultralytics".to_string()),
        ..empty_detail()
    };

    let text = repository_detail_text(&detail).0;
    assert!(text.contains("Topics: yolo, detection\n"));
    assert!(text.contains("Languages: Python, Dockerfile\n"));
    assert!(text.contains("License: AGPL-3.0\n"));
    assert!(text.contains("Created: 2022-09-10\nLast Push: 2024-06-03\n"));
    assert!(text.contains("Open Issues: 1,024\nOpen PRs: 0\n"));
    assert!(text.ends_with("\n--- README ---\n# Ultralytics\n"));
}

#[test]
fn test_long_readme_is_truncated_in_detail_block() {
    let readme = "x".repeat(README_CHAR_LIMIT + 500);
    let detail = RepositoryDetail {
        readme: Some(readme),
        ..empty_detail()
    };

    let text = repository_detail_text(&detail).0;
    let readme_block = text
        .split_once("--- README ---\n")
        .map(|(_, rest)| rest.strip_suffix('\n').unwrap())
        .unwrap();

    assert_eq!(
        readme_block.len(),
        README_CHAR_LIMIT + README_TRUNCATION_MARKER.len()
    );
    assert!(readme_block.ends_with("... [truncated]"));
}

#[test]
fn test_hub_record_text() {
    let text = model_text(&model(8), 1).0;
    assert_eq!(
        text,
        "\n[1] MODEL: facebook/detr-resnet-50\n    Downloads: 1,234,567 | Likes: 789\n    Task: object-detection | Library: N/A\n    Tags: t0, t1, t2, t3, t4\n    URL: https://huggingface.co/facebook/detr-resnet-50\n"
    );

    let dataset = DatasetRecord {
        id: "detection-datasets/coco".to_string(),
        author: Some("detection-datasets".to_string()),
        downloads: None,
        likes: Some(120),
        tags: vec![],
        url: "https://huggingface.co/datasets/detection-datasets/coco".to_string(),
        last_modified: None,
    };
    let text = dataset_text(&dataset, 2).0;
    assert!(text.starts_with("\n[2] DATASET: detection-datasets/coco\n"));
    assert!(text.contains("    Downloads: N/A | Likes: 120\n"));
    assert!(text.contains("    Tags: None\n"));

    let space = SpaceRecord {
        id: "merve/owlv2".to_string(),
        author: Some("merve".to_string()),
        likes: Some(3_400),
        sdk: None,
        tags: vec!["gradio".to_string()],
        url: "https://huggingface.co/spaces/merve/owlv2".to_string(),
        last_modified: None,
    };
    let text = space_text(&space, 3).0;
    assert!(text.contains("[3] SPACE: merve/owlv2\n    Likes: 3,400 | SDK: N/A\n"));
    assert!(text.contains("    Tags: gradio\n"));
}

#[test]
fn test_hub_results_text_sections() {
    let results = HubSearchResults {
        models: Some(vec![model(2), model(0)]),
        datasets: None,
        spaces: Some(vec![]),
    };

    let text = hub_results_text("segment anything", &results).0;

    assert!(text.starts_with(&format!(
        "\n{}\nHugging Face Search Results for: 'segment anything'\n{}\n",
        "=".repeat(60),
        "=".repeat(60)
    )));
    assert!(text.contains("\n--- MODELS (2 found) ---\n\n[1] MODEL:"));
    assert!(text.contains("\n[2] MODEL:"));
    assert!(!text.contains("DATASETS"));
    assert_eq!(text.matches("No spaces found.").count(), 1);
    assert!(text.ends_with("\n--- SPACES (0 found) ---\n  No spaces found.\n"));
}
