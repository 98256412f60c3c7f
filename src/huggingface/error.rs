/// Classification of Hub API failures
#[derive(Debug, Clone, PartialEq)]
pub enum HubApiError {
    /// The request never produced a response (connect, TLS, timeout)
    Transport(String),
    /// The Hub answered with a non-success status
    Status { status: u16, message: String },
    /// The body did not match the expected record shape
    Decode(String),
}

impl HubApiError {
    /// Convert reqwest error to the matching category
    pub fn from_reqwest_error(error: reqwest::Error) -> Self {
        tracing::debug!("Raw reqwest error: {:?}", error);

        if let Some(status) = error.status() {
            Self::Status {
                status: status.as_u16(),
                message: error.to_string(),
            }
        } else if error.is_decode() {
            Self::Decode(error.to_string())
        } else if error.is_timeout() {
            Self::Transport(format!("Request timed out: {}", error))
        } else {
            Self::Transport(error.to_string())
        }
    }
}

impl std::fmt::Display for HubApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(msg) => write!(f, "Transport error: {}", msg),
            Self::Status { status, message } => {
                write!(f, "Hub API error - Status: {}, Message: {}", status, message)
            }
            Self::Decode(msg) => write!(f, "Malformed response: {}", msg),
        }
    }
}

impl std::error::Error for HubApiError {}
