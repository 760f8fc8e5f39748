/// Simplified error system - no over-engineering!
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    RenderingError(String),
    ValidationError(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::RenderingError(msg) => write!(f, "Rendering Error: {}", msg),
            AppError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Failure of a single score fetch cycle.
///
/// `Transport` covers everything below the payload (request not sent,
/// non-2xx status, unreadable body). `UnexpectedStatus` means the API
/// answered but did not report `"OK"`.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    Transport(String),
    UnexpectedStatus(String),
    MalformedPayload(String),
}

impl FetchError {
    /// Message shown in the error banner.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::Transport(_) => {
                "Could not reach the score server. Retrying on the next refresh.".to_string()
            }
            FetchError::UnexpectedStatus(status) => {
                format!("The score server answered with status \"{}\".", status)
            }
            FetchError::MalformedPayload(_) => {
                "The score server sent data that could not be read.".to_string()
            }
        }
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Transport(msg) => write!(f, "Transport failure: {}", msg),
            FetchError::UnexpectedStatus(status) => {
                write!(f, "Unexpected status: expected \"OK\", got \"{}\"", status)
            }
            FetchError::MalformedPayload(msg) => write!(f, "Malformed payload: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

// Simple convenience type aliases
pub type FetchResult<T> = Result<T, FetchError>;
pub type RenderingResult<T> = Result<T, AppError>;
