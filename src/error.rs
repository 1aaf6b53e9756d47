use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Config(String),

    #[error("Event payload error: {0}")]
    Event(String),

    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse classification of an [`AppError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad or missing inputs, detected before any API call.
    Configuration,
    /// A call to the GitHub API failed.
    ExternalApi,
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::GitHubApi(_) => ErrorKind::ExternalApi,
            AppError::Config(_)
            | AppError::Event(_)
            | AppError::Serialization(_)
            | AppError::Io(_) => ErrorKind::Configuration,
        }
    }
}

impl From<octocrab::Error> for AppError {
    fn from(e: octocrab::Error) -> Self {
        AppError::GitHubApi(describe_octocrab_error(&e))
    }
}

/// Render an octocrab error with the message GitHub sent back.
///
/// `octocrab::Error::GitHub` only displays as "GitHub", so the response
/// message and status are pulled out of the source error.
pub fn describe_octocrab_error(e: &octocrab::Error) -> String {
    match e {
        octocrab::Error::GitHub { source, .. } => {
            format!("{} (HTTP {})", source.message, source.status_code.as_u16())
        }
        other => other.to_string(),
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
