//! Error types for the bookmeta-core library.

use thiserror::Error;

/// Main error type for the bookmeta library.
///
/// The extractor itself never fails; every variant here belongs to the
/// boundary around it (document links, retrieval, configuration).
#[derive(Error, Debug)]
pub enum BookmetaError {
    /// Document link or retrieval error.
    #[error("document error: {0}")]
    Doc(#[from] DocError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to the source document (link validation and retrieval).
#[derive(Error, Debug)]
pub enum DocError {
    /// The supplied URL does not look like a shared document link.
    #[error("not a shared document link: {0}")]
    InvalidLink(String),

    /// Network retrieval of the document text failed.
    #[error("could not reach the document: {0}")]
    Fetch(String),

    /// The document host answered with a non-success status.
    #[error("document returned HTTP {0}; check the document's sharing setting")]
    Status(u16),

    /// The export endpoint returned an empty body.
    #[error("document has no content")]
    EmptyBody,
}

/// Result type for the bookmeta library.
pub type Result<T> = std::result::Result<T, BookmetaError>;
