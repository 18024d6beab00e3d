use thiserror::Error;

#[derive(Error, Debug)]
pub enum FairGateError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Upstream returned {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unknown tier: {0}")]
    UnknownTier(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for FairGateError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FairGateError::Transport(format!("request timed out: {}", err))
        } else {
            FairGateError::Transport(err.to_string())
        }
    }
}

impl FairGateError {
    /// Collapse the error into the single string shown to a user.
    pub fn user_message(&self) -> String {
        match self {
            FairGateError::Validation(msg) => msg.clone(),
            FairGateError::Configuration(msg) => format!("Service misconfigured: {}", msg),
            FairGateError::Upstream { status, body } => {
                format!("Failed to fetch score ({}): {}", status, body)
            }
            FairGateError::Transport(_) => "Failed to fetch score".to_string(),
            FairGateError::Serialization(_) => "Received a malformed score response".to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FairGateError>;
