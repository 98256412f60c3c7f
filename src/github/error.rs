/// Classification of GitHub API failures.
///
/// Every variant is recoverable from the caller's point of view: a failed
/// search yields no results and a failed detail fetch yields no detail.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Rate limiting (429, or 403 with a rate limit message)
    RateLimit,
    /// The requested repository does not exist or is not visible
    NotFound(String),
    /// Client errors (4xx other than rate limiting), GraphQL validation errors
    Client(String),
    /// Server side errors (5xx)
    Server(String),
    /// Connection, TLS, or timeout failures before a response arrived
    Transport(String),
    /// The response arrived but its payload did not match the expected shape
    Decode(String),
}

impl ApiError {
    /// Convert octocrab error to the matching category
    pub fn from_octocrab_error(error: octocrab::Error) -> Self {
        tracing::debug!("Raw octocrab error: {:?}", error);

        match &error {
            octocrab::Error::GitHub { source, .. } => {
                let status = source.status_code.as_u16();
                let detailed_error = format!(
                    "GitHub API error - Status: {}, Message: {:?}, Documentation: {:?}",
                    status, source.message, source.documentation_url
                );

                match status {
                    429 => Self::RateLimit,
                    403 if source.message.contains("rate limit") => Self::RateLimit,
                    404 => Self::NotFound(detailed_error),
                    400..=499 => Self::Client(detailed_error),
                    500..=599 => Self::Server(detailed_error),
                    _ => Self::Client(detailed_error),
                }
            }
            octocrab::Error::Http { .. } | octocrab::Error::Hyper { .. } => {
                Self::Transport(format!("HTTP layer error: {}", error))
            }
            octocrab::Error::Json { .. } => Self::Decode(format!("JSON parsing error: {}", error)),
            octocrab::Error::Uri { .. } => Self::Client(format!("URI parsing error: {}", error)),
            _ => Self::Transport(format!("Unknown error type: {}", error)),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RateLimit => write!(f, "Rate limit error"),
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::Client(msg) => write!(f, "Client error: {}", msg),
            Self::Server(msg) => write!(f, "Server error: {}", msg),
            Self::Transport(msg) => write!(f, "Transport error: {}", msg),
            Self::Decode(msg) => write!(f, "Malformed response: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}
