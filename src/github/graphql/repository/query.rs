use crate::types::{Owner, RepositoryName};
use serde::{Deserialize, Serialize};

/// README locations probed at `HEAD`, in order of preference
pub const README_CANDIDATES: [&str; 4] = ["README.md", "README", "readme.md", "README.rst"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryVariable {
    pub owner: Owner,
    pub repository_name: RepositoryName,
}

pub fn repository_detail_query() -> String {
    let readme_fields = README_CANDIDATES
        .iter()
        .enumerate()
        .map(|(index, path)| {
            format!(
                r#"
                readme{}: object(expression: "HEAD:{}") {{
                    ... on Blob {{
                        text
                    }}
                }}"#,
                index, path
            )
        })
        .collect::<Vec<_>>()
        .join("");

    format!(
        r#"
        query($owner: String!, $repository_name: String!) {{
            repository(owner: $owner, name: $repository_name) {{
                homepageUrl
                createdAt
                pushedAt
                isFork
                watchers {{
                    totalCount
                }}
                repositoryTopics(first: 100) {{
                    nodes {{
                        topic {{
                            name
                        }}
                    }}
                }}
                languages(first: 100, orderBy: {{field: SIZE, direction: DESC}}) {{
                    edges {{
                        size
                        node {{
                            name
                        }}
                    }}
                }}
                licenseInfo {{
                    name
                }}
                issues(states: [OPEN]) {{
                    totalCount
                }}
                pullRequests(states: [OPEN]) {{
                    totalCount
                }}{}
            }}
        }}
    "#,
        readme_fields
    )
}
