//! Error types for the RandomCoords SDK.

use serde_json::Value;
use thiserror::Error;

/// Result type for RandomCoords operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Message used when the server answers 429 without a message of its own.
pub const TOO_MANY_REQUESTS_MESSAGE: &str = "Too many requests. Wait and try again.";

/// Message used when the server answers 500 without a message of its own.
pub const SERVER_ERROR_MESSAGE: &str = "Something went wrong.";

/// Message used for every other status without a server-supplied message.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "Unexpected error occurred.";

/// Error types for the RandomCoords SDK.
#[derive(Error, Debug)]
pub enum Error {
    /// A caller-supplied parameter was rejected before any request was sent.
    #[error("{0}")]
    Validation(String),

    /// The response declared a JSON content type but its body could not be parsed.
    #[error("Invalid JSON response.")]
    InvalidJson(#[source] serde_json::Error),

    /// The API answered with a non-200 status.
    #[error("{message}")]
    Api {
        /// Error message, from the body or a status-keyed fallback
        message: String,
        /// HTTP status code
        status: u16,
        /// Fully resolved request URL
        url: String,
    },

    /// Transport failure (connection, DNS, TLS, body read).
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// HTTP status code of an API error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Request URL of an API error.
    pub fn url(&self) -> Option<&str> {
        match self {
            Error::Api { url, .. } => Some(url),
            _ => None,
        }
    }

    /// Whether this error was raised by input validation.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    /// Build an API error from a non-200 response.
    ///
    /// `body` is the parsed JSON body when the response declared one.
    pub(crate) fn from_response(status: u16, url: &str, body: Option<&Value>) -> Self {
        let message = body
            .and_then(|b| b.get("message"))
            .and_then(message_text)
            .unwrap_or_else(|| fallback_message(status).to_string());

        Error::Api {
            message,
            status,
            url: url.to_string(),
        }
    }
}

/// Text of a `message` field.
///
/// Non-empty strings are used as-is, non-zero numbers and `true` are rendered.
/// Empty strings, zero, `false`, `null`, arrays and objects count as absent.
fn message_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64().is_some_and(|f| f != 0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

/// Default message for a status code when the server supplied none.
///
/// Only 429 and 500 have dedicated messages.
pub fn fallback_message(status: u16) -> &'static str {
    match status {
        429 => TOO_MANY_REQUESTS_MESSAGE,
        500 => SERVER_ERROR_MESSAGE,
        _ => UNEXPECTED_ERROR_MESSAGE,
    }
}

/// Classify a fully buffered response.
///
/// A JSON body that fails to parse is an [`Error::InvalidJson`] whatever the
/// status. A parsed 200 body is decoded into `T`. Anything else becomes an
/// [`Error::Api`].
pub(crate) fn classify_response<T>(status: u16, is_json: bool, body: &[u8], url: &str) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let parsed = if is_json {
        let value: Value = serde_json::from_slice(body).map_err(Error::InvalidJson)?;
        if status == 200 {
            return serde_json::from_value(value).map_err(Error::InvalidJson);
        }
        Some(value)
    } else {
        None
    };

    Err(Error::from_response(status, url, parsed.as_ref()))
}
