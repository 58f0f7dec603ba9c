/// Typed errors from the AWS layer.
use aws_sdk_sts::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_sts::operation::get_caller_identity::GetCallerIdentityError;
use thiserror::Error;

/// Errors from session validation and any SDK call a script makes through
/// this layer.
#[derive(Debug, Error)]
pub enum AwsError {
    /// The service answered with a structured error response.
    #[error("{message}")]
    Service {
        /// The service's own error message.
        message: String,
    },

    /// Connection-level failure before any structured response was obtained.
    #[error("{0}")]
    Transport(String),

    /// The identity call succeeded but the response carried no principal ARN.
    #[error("identity response contained no principal ARN")]
    MissingIdentity,
}

/// Classify an identity-call failure: structured service errors keep the
/// service's own message, everything else is a transport failure.
impl From<SdkError<GetCallerIdentityError>> for AwsError {
    fn from(err: SdkError<GetCallerIdentityError>) -> Self {
        match &err {
            SdkError::ServiceError(_) => {
                let message = err
                    .meta()
                    .message()
                    .map_or_else(|| err.to_string(), str::to_owned);
                Self::Service { message }
            }
            _ => Self::Transport(format!("{}", DisplayErrorContext(&err))),
        }
    }
}
