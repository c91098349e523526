use thiserror::Error;

/// Message shown for failures that never reached a usable server reply.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please check your connection and try again.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// Rejected locally before any request was made.
    #[error("{0}")]
    Validation(String),

    /// The backend answered with an error payload or a non-2xx status.
    #[error("{0}")]
    Server(String),

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Malformed response: {0}")]
    Parse(String),
}

impl ClientError {
    /// Text suitable for showing to the user.
    ///
    /// Validation and server messages are shown verbatim; transport and parse
    /// details only go to the console.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Validation(msg) | ClientError::Server(msg) => msg.clone(),
            ClientError::Transport(_) | ClientError::Parse(_) => NETWORK_ERROR_MESSAGE.to_string(),
        }
    }
}

impl From<ClientError> for String {
    fn from(err: ClientError) -> Self {
        err.to_string()
    }
}
