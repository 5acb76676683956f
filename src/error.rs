//! Error types shared by every layer of the tool.
//!
//! Configuration and transport failures are fatal and bubble up to `main`,
//! which prints them through the [`error!`](crate::error) macro. A detail
//! fetch that answers with an error envelope is not represented here: it is
//! reported as a [`Notice`](crate::types::Notice) and the run continues.

/// Result alias used throughout the crate.
pub type Res<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Missing credential, unparsable setting or unusable search criteria.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A search criterion named a field the catalog does not know.
    #[error("Unrecognized search field '{0}'")]
    UnknownSearchField(String),

    /// Network failure, timeout or non-success HTTP status.
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The body could not be read as JSON, or did not have the expected shape.
    #[error("Malformed response from {url}: {body}")]
    MalformedResponse { url: String, body: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration(message.into())
    }

    pub fn malformed(url: impl Into<String>, body: impl Into<String>) -> Self {
        Error::MalformedResponse {
            url: url.into(),
            body: body.into(),
        }
    }

    /// Whether the error belongs to the startup configuration class.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::Configuration(_) | Error::UnknownSearchField(_)
        )
    }
}
