//! Error types for the nbextract library.

use std::io;
use thiserror::Error;

/// Result type alias for nbextract operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while reading notebooks and extracting images.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading the notebook or writing image files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file is not recognized as a Jupyter notebook.
    #[error("Unknown file format: not a Jupyter notebook")]
    UnknownFormat,

    /// The notebook format major version is not supported.
    #[error("Unsupported nbformat version: {0}")]
    UnsupportedVersion(i64),

    /// The notebook JSON is structurally invalid.
    #[error("Malformed notebook: {0}")]
    Malformed(String),

    /// A base64 image payload failed to decode.
    #[error("Image decoding error: {0}")]
    ImageDecode(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Malformed(err.to_string())
    }
}

impl From<base64::DecodeError> for Error {
    fn from(err: base64::DecodeError) -> Self {
        Error::ImageDecode(err.to_string())
    }
}
