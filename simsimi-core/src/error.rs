//! Error types for the SimSimi client

use std::error::Error as StdError;
use thiserror::Error;

/// Boxed underlying error
pub type BoxError = Box<dyn StdError + Send + Sync>;

/// The main error type for all SimSimi operations
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The request could not be sent, or its body could not be read
    #[error("Transport error: {message}")]
    Transport {
        /// Error message
        message: String,
        /// Underlying error if available
        #[source]
        source: Option<BoxError>,
    },

    /// The body was not valid JSON, or a value had the wrong JSON type
    #[error("Decode error: {message}")]
    Decode {
        /// Error message
        message: String,
        /// Underlying error if available
        #[source]
        source: Option<BoxError>,
    },

    /// The relay endpoint answered with a bare JSON string
    ///
    /// The service does this when it rejects the request shape, most often
    /// because of the locale.
    #[error("unexpected response (locale should be inspected): {0}")]
    UnexpectedResponse(String),

    /// The service reported a non-zero errno
    #[error(transparent)]
    Relay(#[from] RelayError),

    /// The service reported errno zero but a status other than 200
    #[error("responded with status {0}")]
    Status(i64),

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl Error {
    /// Create a transport error without an underlying source
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
            source: None,
        }
    }

    /// Create a decode error without an underlying source
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// The relay error carried by this error, if any
    pub fn as_relay(&self) -> Option<&RelayError> {
        match self {
            Self::Relay(err) => Some(err),
            _ => None,
        }
    }
}

/// Result type alias for SimSimi operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error descriptor returned by the relay endpoint when `errno` is non-zero
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{code}({errno})")]
pub struct RelayError {
    /// Service error code
    pub code: String,
    /// Service-defined error number, distinct from HTTP status
    pub errno: i64,
    /// SQL-state-like diagnostic string
    pub sql_state: String,
    /// Index reported alongside the error
    pub index: i64,
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::Configuration(format!("invalid endpoint URL: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io;

    #[test]
    fn test_error_display() {
        let error = Error::transport("Connection refused");
        assert_eq!(error.to_string(), "Transport error: Connection refused");

        let error = Error::decode("expected value");
        assert_eq!(error.to_string(), "Decode error: expected value");

        let error = Error::UnexpectedResponse("locale not supported".into());
        assert_eq!(
            error.to_string(),
            "unexpected response (locale should be inspected): locale not supported"
        );

        let error = Error::Status(500);
        assert_eq!(error.to_string(), "responded with status 500");

        let error = Error::configuration("bad url");
        assert_eq!(error.to_string(), "Configuration error: bad url");
    }

    #[test]
    fn test_relay_error_display() {
        let err = RelayError {
            code: "ER_SESSION".into(),
            errno: 1042,
            sql_state: "HY000".into(),
            index: 3,
        };
        assert_eq!(err.to_string(), "ER_SESSION(1042)");

        // Wrapping keeps the same rendering
        let error: Error = err.clone().into();
        assert_eq!(error.to_string(), "ER_SESSION(1042)");
        assert_eq!(error.as_relay(), Some(&err));
    }

    #[test]
    fn test_error_source() {
        let error = Error::transport("Connection failed");
        assert!(error.source().is_none());

        let io_error = io::Error::new(io::ErrorKind::ConnectionReset, "reset");
        let error = Error::Transport {
            message: "Connection failed".into(),
            source: Some(Box::new(io_error)),
        };
        assert!(error.source().is_some());

        let error = Error::Status(404);
        assert!(error.source().is_none());
        assert!(error.as_relay().is_none());
    }

    #[test]
    fn test_error_from_serde_json_error() {
        let json_error = serde_json::from_str::<String>("invalid json").unwrap_err();
        let error: Error = json_error.into();

        match error {
            Error::Decode { message, source } => {
                assert!(!message.is_empty());
                assert!(source.is_some());
            }
            _ => panic!("Expected Decode error"),
        }
    }

    #[test]
    fn test_error_from_url_parse_error() {
        let parse_error = url::Url::parse("not a url").unwrap_err();
        let error: Error = parse_error.into();
        assert!(matches!(error, Error::Configuration(msg) if msg.starts_with("invalid endpoint URL")));
    }
}
