use crate::github::error::ApiError;

/// Classifies GraphQL errors reported inside an otherwise successful response.
///
/// # Arguments
///
/// * `error_msg` - The GraphQL error message to classify
///
/// # Returns
///
/// Returns an ApiError with the matching classification.
pub fn classify_graphql_error(error_msg: &str) -> ApiError {
    if error_msg.contains("rate limit") || error_msg.contains("API rate limit") {
        tracing::warn!("GraphQL rate limit error: {}", error_msg);
        ApiError::RateLimit
    } else if error_msg.contains("Could not resolve to a Repository") {
        tracing::info!("GraphQL resource not found: {}", error_msg);
        ApiError::NotFound(error_msg.to_string())
    } else if error_msg.contains("timeout") || error_msg.contains("server error") {
        tracing::warn!("GraphQL server error: {}", error_msg);
        ApiError::Server(format!("GraphQL server error: {}", error_msg))
    } else {
        tracing::error!("GraphQL error: {}", error_msg);
        ApiError::Client(format!("GraphQL error: {}", error_msg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_graphql_error() {
        assert_eq!(
            classify_graphql_error("API rate limit exceeded for user"),
            ApiError::RateLimit
        );
        assert!(matches!(
            classify_graphql_error("Could not resolve to a Repository with the name 'a/b'."),
            ApiError::NotFound(_)
        ));
        assert!(matches!(
            classify_graphql_error("Something went wrong: server error"),
            ApiError::Server(_)
        ));
        assert!(matches!(
            classify_graphql_error("Field 'foo' doesn't exist on type 'Repository'"),
            ApiError::Client(_)
        ));
    }
}
