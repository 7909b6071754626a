use crate::constants::messages;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("username must be at least {min} characters (got {actual})")]
    UsernameTooShort { min: usize, actual: usize },
    #[error("password must be at least {min} characters (got {actual})")]
    PasswordTooShort { min: usize, actual: usize },
}

impl ValidationError {
    /// Both variants surface the same combined hint to the user.
    pub fn user_message(&self) -> &'static str {
        messages::VALIDATION_MESSAGE
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RemoteError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    #[error("request cancelled")]
    Cancelled,
}

impl RemoteError {
    pub fn rejected(status: u16, message: Option<String>) -> Self {
        Self::Rejected {
            status,
            message: message.unwrap_or_else(|| messages::GENERIC_FAILURE.to_string()),
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => messages::NETWORK_FAILURE.to_string(),
            Self::Rejected { message, .. } => message.clone(),
            Self::MalformedResponse(_) => messages::MALFORMED_RESPONSE.to_string(),
            Self::Cancelled => messages::CANCELLED.to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Remote(#[from] RemoteError),
}

impl AuthError {
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(err) => err.user_message().to_string(),
            Self::Remote(err) => err.user_message(),
        }
    }
}
