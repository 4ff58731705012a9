use thiserror::Error;

/// Errors that can occur while checking a TIN against the remote service.
///
/// Fault responses from the service are *not* errors: they are reported
/// through [`CheckResult::fault`](crate::CheckResult). A `TinError` means the
/// call itself could not be completed.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TinError {
    /// A required argument was empty. Raised before any network call.
    #[error("{0} cannot be empty")]
    MissingArgument(&'static str),

    /// The request could not be serialized or the response was not well-formed XML.
    #[error("XML error: {0}")]
    Xml(String),

    /// Reading the response body failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A custom transport reported a failure.
    #[error("transport error: {0}")]
    Transport(String),

    /// The built-in HTTP transport failed.
    #[cfg(feature = "http")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl From<roxmltree::Error> for TinError {
    fn from(e: roxmltree::Error) -> Self {
        TinError::Xml(e.to_string())
    }
}

/// Error returned when a TIN fails an offline format check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid TIN '{value}': {reason}")]
pub struct TinFormatError {
    /// The rejected input value.
    pub value: String,
    /// Why the value failed validation.
    pub reason: String,
}

impl TinFormatError {
    pub fn new(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            reason: reason.into(),
        }
    }
}
