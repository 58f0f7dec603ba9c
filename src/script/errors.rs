/// The closed error taxonomy for a script run.
use thiserror::Error;

use crate::aws::AwsError;

/// Everything that can end a run, caught exactly once in `main`.
#[derive(Debug, Error)]
pub enum ScriptError {
    /// Credential validation failed during bootstrap.
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// AWS returned a structured error response.
    #[error("AWS error: {0}")]
    Api(String),

    /// Connection-level failure before a structured response was obtained.
    #[error("AWS connection error: {0}")]
    Transport(String),

    /// The user interrupted the run.
    #[error("Operation cancelled by user")]
    Cancelled,

    /// Anything else; the full error goes to the log.
    #[error("Unexpected error: {0}")]
    Unexpected(#[from] anyhow::Error),
}

impl ScriptError {
    /// Process exit code for this error. A user interrupt is a clean exit.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Cancelled => 0,
            Self::Auth(_) | Self::Api(_) | Self::Transport(_) | Self::Unexpected(_) => 1,
        }
    }
}

/// AWS-layer errors map onto the run taxonomy so scripts can use `?` on
/// wrapped SDK calls.
impl From<AwsError> for ScriptError {
    fn from(err: AwsError) -> Self {
        match err {
            AwsError::Service { message } => Self::Api(message),
            AwsError::Transport(message) => Self::Transport(message),
            AwsError::MissingIdentity => Self::Auth(err.to_string()),
        }
    }
}
