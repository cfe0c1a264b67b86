//! Error types for soarep-client.

/// Errors that can occur while resolving or querying a resource.
///
/// Request and decode failures are handed back exactly as they happened;
/// nothing in this crate retries or translates them.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The request never produced a 2xx response.
    ///
    /// `status` is `None` when the transport failed before a status line
    /// arrived (connection refused, timeout, TLS failure, ...).
    #[error("Request to {url} failed: {}", describe_status(.status))]
    RequestFailed {
        /// Fully resolved request URL
        url: String,
        /// HTTP status code, if the server answered
        status: Option<u16>,
        /// Raw response body (empty for transport failures)
        body: String,
        /// Underlying transport error if available
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The response body was not JSON, or not the shape the resource declares.
    #[error("Failed to decode response from {url}: {message}")]
    DecodeError {
        /// Fully resolved request URL
        url: String,
        /// What went wrong
        message: String,
        /// Source error if available
        #[source]
        source: Option<serde_json::Error>,
    },

    /// No resource is registered under this name.
    #[error("Unknown resource: {name}")]
    UnknownResource {
        /// Name that was looked up
        name: String,
    },

    /// The resource has no operation with this name.
    #[error("Resource {resource} has no operation named {operation}")]
    UnknownOperation {
        /// Resource name
        resource: String,
        /// Operation that was requested
        operation: String,
    },

    /// A base URL or resolved URL could not be built.
    #[error("Invalid URL: {message}")]
    InvalidUrl {
        /// What went wrong
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },
}

/// Result type alias for soarep-client operations.
pub type Result<T> = std::result::Result<T, Error>;

fn describe_status(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!("HTTP {code}"),
        None => "no response".to_string(),
    }
}

impl Error {
    /// Creates a request failure for a non-2xx response.
    pub fn status<U, B>(url: U, status: u16, body: B) -> Self
    where
        U: Into<String>,
        B: Into<String>,
    {
        Error::RequestFailed {
            url: url.into(),
            status: Some(status),
            body: body.into(),
            source: None,
        }
    }

    /// Creates a request failure for a transport error (no response received).
    pub fn transport<U, E>(url: U, source: E) -> Self
    where
        U: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::RequestFailed {
            url: url.into(),
            status: None,
            body: String::new(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a decode error for a body that does not have the expected shape.
    pub fn shape<U, M>(url: U, message: M) -> Self
    where
        U: Into<String>,
        M: Into<String>,
    {
        Error::DecodeError {
            url: url.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Creates a decode error from a JSON parse failure.
    pub fn json<U: Into<String>>(url: U, source: serde_json::Error) -> Self {
        Error::DecodeError {
            url: url.into(),
            message: source.to_string(),
            source: Some(source),
        }
    }

    /// Creates an invalid URL error.
    pub fn invalid_url<S: Into<String>>(message: S) -> Self {
        Error::InvalidUrl {
            message: message.into(),
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// HTTP status carried by a [`Error::RequestFailed`], if any.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Error::RequestFailed { status, .. } => *status,
            _ => None,
        }
    }

    /// Returns true for [`Error::RequestFailed`].
    pub fn is_request_failed(&self) -> bool {
        matches!(self, Error::RequestFailed { .. })
    }

    /// Returns true for [`Error::DecodeError`].
    pub fn is_decode_error(&self) -> bool {
        matches!(self, Error::DecodeError { .. })
    }
}
