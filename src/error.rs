use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProfileError>;

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("GitHub user not found: {0}")]
    UserNotFound(String),
    #[error("GitHub API error ({status}): {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

impl ProfileError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        ProfileError::InvalidInput(msg.into())
    }

    /// True when the error means the queried account does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ProfileError::UserNotFound(_))
    }
}
