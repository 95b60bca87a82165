use std::path::PathBuf;

use crate::models::field_error::ValidationErrors;

/// Utility enum that covers all possible errors while ingesting pod specs
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Options that can not be turned into a pod spec source.
    #[error("Invalid options: {0}")]
    UserInputError(String),

    #[error("unable to build HTTP client: {source}")]
    HttpClientError { source: reqwest::Error },

    /// The request itself failed: unreachable host, timeout, TLS failure.
    #[error("unable to read URL {url:?}: {source}")]
    FetchError { url: String, source: reqwest::Error },

    /// The server answered with anything but 200 OK.
    #[error("unable to read URL {url:?}, server reported {reason}, status code={status}")]
    HttpStatusError {
        url: String,
        status: u16,
        reason: String,
    },

    #[error("failed to open config file {path:?}: {source}")]
    OpenError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read config file {location:?}: {source}")]
    ReadError {
        location: String,
        source: std::io::Error,
    },

    /// Malformed or type-mismatched document, carrying the parser message verbatim.
    #[error("failed to decode config file: {0}")]
    DecodeError(String),

    #[error("unable to convert pod {pod} to internal version: {reason}")]
    ConversionError { pod: String, reason: String },

    /// Every violation of every rejected pod.
    #[error("{0}")]
    ValidationError(ValidationErrors),
}

impl Error {
    /// True for failures that happened before any byte of the document was decoded.
    pub fn is_source_resolution(&self) -> bool {
        matches!(
            self,
            Error::HttpClientError { .. }
                | Error::FetchError { .. }
                | Error::HttpStatusError { .. }
                | Error::OpenError { .. }
                | Error::ReadError { .. }
        )
    }
}
