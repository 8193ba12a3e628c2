//! Errors surfaced by the catalog client.

/// Failure modes of a catalog request.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Transport failure: DNS, refused connection, timeout.
    #[error("Network error: {0}")]
    Network(#[from] wreq::Error),

    /// The API answered with a non-2xx status.
    #[error("HTTP error {status}: {body}")]
    Http { status: u16, body: String },

    /// The body was not valid JSON.
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl CatalogError {
    /// Returns the HTTP status code for `Http` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            CatalogError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
