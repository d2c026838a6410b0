use std::{fmt, io};

/// Crate-wide `Result` type using [`PeopleSearchError`] as the error.
///
/// This alias is re-exported by the parent `error` module and is intended
/// to be used throughout the crate for fallible operations.
pub type Result<T> = std::result::Result<T, PeopleSearchError>;

/// Top-level error type for people-search operations.
#[derive(Debug)]
pub enum PeopleSearchError {
    /// Candidate source errors (fetching or decoding people).
    Source(SourceError),

    /// Configuration errors.
    Config(ConfigError),

    /// Terminal setup or drawing errors.
    Terminal(String),

    /// I/O errors.
    Io(io::Error),

    /// Generic error with a free-form message.
    Generic(String),
}

/// Errors raised while loading the candidate list.
#[derive(Debug)]
pub enum SourceError {
    /// The request could not be sent or the connection dropped.
    RequestFailed(String),

    /// The request did not complete within the configured timeout.
    Timeout,

    /// The endpoint answered with a non-success status code.
    HttpStatus(u16),

    /// The response body was not a JSON array of people.
    InvalidPayload(String),

    /// Local source file does not exist.
    FileNotFound(String),
}

/// Configuration-specific errors.
#[derive(Debug)]
pub enum ConfigError {
    /// Config file not found.
    FileNotFound(String),

    /// Invalid config format.
    InvalidFormat(String),

    /// Invalid field value.
    InvalidValue { field: String, value: String },

    /// Generic configuration error.
    Generic(String),
}

/* ========================= Display & Error impls ========================= */

impl fmt::Display for PeopleSearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeopleSearchError::Source(e) => write!(f, "Source error: {e}"),
            PeopleSearchError::Config(e) => write!(f, "Configuration error: {e}"),
            PeopleSearchError::Terminal(msg) => write!(f, "Terminal error: {msg}"),
            PeopleSearchError::Io(e) => write!(f, "I/O error: {e}"),
            PeopleSearchError::Generic(msg) => write!(f, "{msg}"),
        }
    }
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::RequestFailed(msg) => write!(f, "Request failed: {msg}"),
            SourceError::Timeout => write!(f, "Request timed out"),
            SourceError::HttpStatus(code) => write!(f, "Unexpected HTTP status {code}"),
            SourceError::InvalidPayload(msg) => write!(f, "Invalid payload: {msg}"),
            SourceError::FileNotFound(path) => write!(f, "Source file not found: {path}"),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileNotFound(path) => write!(f, "Config file not found: {path}"),
            ConfigError::InvalidFormat(msg) => write!(f, "Invalid config format: {msg}"),
            ConfigError::InvalidValue { field, value } => {
                write!(f, "Invalid value '{value}' for field '{field}'")
            }
            ConfigError::Generic(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for PeopleSearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PeopleSearchError::Source(e) => Some(e),
            PeopleSearchError::Config(e) => Some(e),
            PeopleSearchError::Io(e) => Some(e),
            _ => None,
        }
    }
}
impl std::error::Error for SourceError {}
impl std::error::Error for ConfigError {}

/* ========================= Conversions to PeopleSearchError ========================= */

impl From<io::Error> for PeopleSearchError {
    fn from(err: io::Error) -> Self {
        PeopleSearchError::Io(err)
    }
}

impl From<SourceError> for PeopleSearchError {
    fn from(err: SourceError) -> Self {
        PeopleSearchError::Source(err)
    }
}

impl From<ConfigError> for PeopleSearchError {
    fn from(err: ConfigError) -> Self {
        PeopleSearchError::Config(err)
    }
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SourceError::Timeout
        } else if let Some(status) = err.status() {
            SourceError::HttpStatus(status.as_u16())
        } else if err.is_decode() {
            SourceError::InvalidPayload(err.to_string())
        } else {
            SourceError::RequestFailed(err.to_string())
        }
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        SourceError::InvalidPayload(err.to_string())
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::InvalidFormat(err.to_string())
    }
}

impl From<String> for PeopleSearchError {
    fn from(msg: String) -> Self {
        PeopleSearchError::Generic(msg)
    }
}

impl From<&str> for PeopleSearchError {
    fn from(msg: &str) -> Self {
        PeopleSearchError::Generic(msg.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefixes() {
        let err = PeopleSearchError::from(SourceError::HttpStatus(503));
        assert_eq!(err.to_string(), "Source error: Unexpected HTTP status 503");

        let err = PeopleSearchError::from(ConfigError::InvalidValue {
            field: "display.max_suggestions".to_string(),
            value: "0".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid value '0' for field 'display.max_suggestions'"
        );
    }

    #[test]
    fn test_generic_from_str() {
        let err: PeopleSearchError = "boom".into();
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn test_json_error_is_invalid_payload() {
        let json_err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        assert!(matches!(
            SourceError::from(json_err),
            SourceError::InvalidPayload(_)
        ));
    }
}
