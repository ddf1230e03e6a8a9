// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Api(ApiError),
}

/// Specific error types for the remote classification call.
/// The user only ever sees a generic failure message; these variants
/// exist so the underlying cause can be logged for diagnostics.
#[derive(Debug, Clone)]
pub enum ApiError {
    /// The request could not be built (bad base URL, invalid MIME type).
    Request(String),

    /// Network-level failure: unreachable host, TLS error, timeout.
    Transport(String),

    /// The server answered with a non-2xx status code.
    Status(u16),

    /// The response body was not the expected JSON shape.
    Contract(String),
}

impl ApiError {
    /// Returns a short category tag used in log lines.
    pub fn category(&self) -> &'static str {
        match self {
            ApiError::Request(_) => "request",
            ApiError::Transport(_) => "transport",
            ApiError::Status(_) => "status",
            ApiError::Contract(_) => "contract",
        }
    }

    /// Categorizes a `reqwest` error into the transport/contract taxonomy.
    pub fn from_reqwest(err: &reqwest::Error) -> Self {
        if err.is_decode() {
            return ApiError::Contract(err.to_string());
        }
        if err.is_builder() || err.is_request() {
            return ApiError::Request(err.to_string());
        }
        ApiError::Transport(err.to_string())
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Request(msg) => write!(f, "Request error: {}", msg),
            ApiError::Transport(msg) => write!(f, "Transport error: {}", msg),
            ApiError::Status(code) => write!(f, "Server responded with status: {}", code),
            ApiError::Contract(msg) => write!(f, "Unexpected response body: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Api(e) => write!(f, "API Error: {}", e),
        }
    }
}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        Error::Api(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn api_error_status_display_includes_code() {
        let err = ApiError::Status(500);
        assert_eq!(format!("{}", err), "Server responded with status: 500");
    }

    #[test]
    fn api_error_categories_are_distinct() {
        assert_eq!(ApiError::Transport("x".into()).category(), "transport");
        assert_eq!(ApiError::Status(404).category(), "status");
        assert_eq!(ApiError::Contract("x".into()).category(), "contract");
        assert_eq!(ApiError::Request("x".into()).category(), "request");
    }

    #[test]
    fn api_error_converts_to_crate_error() {
        let err: Error = ApiError::Status(502).into();
        assert!(matches!(err, Error::Api(ApiError::Status(502))));
    }
}
