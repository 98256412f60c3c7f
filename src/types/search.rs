//! Search query types shared by the repository and hub searches

/// Default number of results requested per search (and per hub category)
pub const DEFAULT_RESULT_LIMIT: usize = 10;

/// Represents a search text string.
///
/// Wraps the user supplied keyword(s) for type safety. Qualifiers such as
/// `language:` are appended by the backend specific query builders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(pub String);

impl SearchQuery {
    pub fn new<T: Into<String>>(query: T) -> Self {
        Self(query.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Appends a `language:` qualifier in GitHub search syntax.
    ///
    /// Multi word languages are quoted so GitHub treats them as one value.
    pub fn with_language(&self, language: Option<&str>) -> SearchQuery {
        match language.map(str::trim).filter(|l| !l.is_empty()) {
            Some(language) if language.contains(' ') => {
                SearchQuery(format!("{} language:\"{}\"", self.0.trim(), language))
            }
            Some(language) => SearchQuery(format!("{} language:{}", self.0.trim(), language)),
            None => self.clone(),
        }
    }
}

impl std::fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_language() {
        let query = SearchQuery::new("object detection");

        let result = query.with_language(Some("python"));
        assert_eq!(result.as_str(), "object detection language:python");

        let result = query.with_language(Some("Jupyter Notebook"));
        assert_eq!(
            result.as_str(),
            "object detection language:\"Jupyter Notebook\""
        );

        // Blank languages are ignored
        let result = query.with_language(Some("  "));
        assert_eq!(result.as_str(), "object detection");

        let result = query.with_language(None);
        assert_eq!(result, query);
    }
}
