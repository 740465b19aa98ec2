use access::{ApiError, StorageError};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    /// Refused locally with a fixed user-facing message.
    #[error("{0}")]
    Refused(&'static str),
    #[error("course {0} not found")]
    CourseNotFound(i64),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

impl CliError {
    /// Text printed to the user on failure.
    pub fn user_message(&self) -> String {
        match self {
            Self::Api(e) => e.user_message().to_owned(),
            Self::Refused(message) => (*message).to_owned(),
            other => other.to_string(),
        }
    }
}
