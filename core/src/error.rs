//! Error types for the Nova Poshta API client.
//!
//! # Design
//! Every failure is one of two kinds. `Transport` means the provider could
//! not be reached, answered with a non-200 status, or sent a body that is not
//! a JSON envelope. `Application` means the provider answered with a valid
//! envelope that reports `success: false` or a non-empty `errors` list.
//! Neither kind is recovered from inside this crate; callers own retries.

use thiserror::Error;

/// Which part of the exchange produced a transport failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportFailure {
    /// The provider answered with an HTTP status other than 200.
    Status,
    /// The request never completed: DNS, connect, timeout, reset.
    Network,
    /// The response body is not a JSON object.
    MalformedResponse,
    /// The outgoing envelope could not be serialized.
    MalformedRequest,
}

/// Errors returned by every call that reaches (or tries to reach) the API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP exchange itself failed.
    ///
    /// `code` is the HTTP status for `Status` and `MalformedResponse`, the
    /// OS error code for `Network` faults when one is available.
    #[error("{message}")]
    Transport {
        kind: TransportFailure,
        message: String,
        code: Option<i32>,
    },

    /// The provider reported a failure inside a well-formed envelope.
    #[error("{message}")]
    Application { message: String, errors: Vec<String> },
}

impl ApiError {
    pub(crate) fn status(status: u16) -> Self {
        ApiError::Transport {
            kind: TransportFailure::Status,
            message: format!("Nova Poshta API returned HTTP error: {status}"),
            code: Some(i32::from(status)),
        }
    }

    pub(crate) fn malformed_response(detail: impl std::fmt::Display, status: u16) -> Self {
        ApiError::Transport {
            kind: TransportFailure::MalformedResponse,
            message: format!("Failed to decode Nova Poshta API response: {detail}"),
            code: Some(i32::from(status)),
        }
    }

    pub(crate) fn network(detail: impl std::fmt::Display, code: Option<i32>) -> Self {
        ApiError::Transport {
            kind: TransportFailure::Network,
            message: format!("HTTP request to Nova Poshta API failed: {detail}"),
            code,
        }
    }

    pub(crate) fn malformed_request(detail: impl std::fmt::Display) -> Self {
        ApiError::Transport {
            kind: TransportFailure::MalformedRequest,
            message: format!("Failed to encode Nova Poshta API request: {detail}"),
            code: None,
        }
    }

    /// The provider returned a non-empty `errors` list.
    pub(crate) fn reported(errors: Vec<String>) -> Self {
        ApiError::Application {
            message: format!("Nova Poshta API returned errors: {}", errors.join(", ")),
            errors,
        }
    }

    /// The provider returned `success: false` without any errors.
    pub(crate) fn unsuccessful() -> Self {
        let errors = vec!["Unknown API error".to_string()];
        ApiError::Application {
            message: format!("Nova Poshta API request failed: {}", errors.join(", ")),
            errors,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport { .. })
    }

    pub fn is_application(&self) -> bool {
        matches!(self, ApiError::Application { .. })
    }

    /// Numeric code of a transport failure. Always `None` for application errors.
    pub fn code(&self) -> Option<i32> {
        match self {
            ApiError::Transport { code, .. } => *code,
            ApiError::Application { .. } => None,
        }
    }

    /// Provider error strings of an application failure. Empty for transport errors.
    pub fn errors(&self) -> &[String] {
        match self {
            ApiError::Application { errors, .. } => errors,
            ApiError::Transport { .. } => &[],
        }
    }
}

/// Raised when building a [`Config`](crate::Config) from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    MissingVar(&'static str),
}

pub type Result<T, E = ApiError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_carries_http_code() {
        let err = ApiError::status(502);
        assert!(err.is_transport());
        assert_eq!(err.code(), Some(502));
        assert_eq!(err.to_string(), "Nova Poshta API returned HTTP error: 502");
        assert!(err.errors().is_empty());
    }

    #[test]
    fn reported_errors_are_joined_in_message() {
        let err = ApiError::reported(vec!["Ref is invalid".into(), "Phone is empty".into()]);
        assert!(err.is_application());
        assert_eq!(err.code(), None);
        assert_eq!(err.errors(), ["Ref is invalid", "Phone is empty"]);
        assert_eq!(
            err.to_string(),
            "Nova Poshta API returned errors: Ref is invalid, Phone is empty"
        );
    }

    #[test]
    fn unsuccessful_synthesizes_unknown_error() {
        let err = ApiError::unsuccessful();
        assert_eq!(err.errors(), ["Unknown API error"]);
        assert!(err.to_string().contains("Unknown API error"));
    }
}
