use thiserror::Error;

/// Centralized error type for tinyurl-client.
#[derive(Debug, Error)]
pub enum ShortenError {
    /// Local validation rejected an input before any network access.
    #[error("invalid `{param}`: {reason}")]
    InvalidArgument {
        param: &'static str,
        reason: String,
    },
    /// The remote call was attempted and failed.
    #[error("{message}")]
    Service {
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },
    /// The caller's cancellation token fired.
    #[error("operation cancelled")]
    Cancelled,
}

impl ShortenError {
    /// Creates a validation error naming the offending parameter.
    pub fn invalid_argument(param: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            param,
            reason: reason.into(),
        }
    }

    /// Creates a service error with no underlying transport failure.
    pub fn service(message: impl Into<String>) -> Self {
        Self::Service {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a service error preserving the transport failure as cause.
    pub fn transport(message: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Service {
            message: message.into(),
            source: Some(source),
        }
    }

    /// Checks if this error came from local validation.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Checks if this error came from the remote call.
    pub fn is_service(&self) -> bool {
        matches!(self, Self::Service { .. })
    }

    /// Checks if the operation was cancelled by the caller.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Gets the rejected parameter name for validation errors.
    pub fn param(&self) -> Option<&'static str> {
        match self {
            Self::InvalidArgument { param, .. } => Some(param),
            _ => None,
        }
    }
}

pub type ShortenResult<T> = Result<T, ShortenError>;
