//! Notebook format detection and validation.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Notebook format information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotebookFormat {
    /// nbformat major version (e.g. 4)
    pub nbformat: i64,
    /// nbformat minor version (e.g. 5)
    pub nbformat_minor: i64,
}

impl std::fmt::Display for NotebookFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "nbformat {}.{}", self.nbformat, self.nbformat_minor)
    }
}

/// Supported nbformat major version. v3 documents store cells under
/// `worksheets`, a shape this crate does not read, so they are rejected
/// here rather than parsed as empty.
const SUPPORTED_NBFORMAT: i64 = 4;

/// Detect notebook format from a file path.
///
/// # Arguments
/// * `path` - Path to the notebook file
///
/// # Returns
/// * `Ok(NotebookFormat)` if the file is a valid notebook
/// * `Err(Error::UnknownFormat)` if the file is not a notebook
///
/// # Example
/// ```no_run
/// use nbextract::detect::detect_format_from_path;
///
/// let format = detect_format_from_path("analysis.ipynb").unwrap();
/// println!("Notebook version: {}", format);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<NotebookFormat> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    detect_format_from_bytes(&data)
}

/// Detect notebook format from bytes.
///
/// A notebook is a JSON object carrying a top-level `nbformat` field.
///
/// # Arguments
/// * `data` - Complete file content
///
/// # Returns
/// * `Ok(NotebookFormat)` if the data is a notebook document
/// * `Err(Error::UnknownFormat)` if the data is not a notebook
/// * `Err(Error::UnsupportedVersion)` for a major version other than 4
pub fn detect_format_from_bytes(data: &[u8]) -> Result<NotebookFormat> {
    let value: serde_json::Value =
        serde_json::from_slice(data).map_err(|_| Error::UnknownFormat)?;

    let obj = value.as_object().ok_or(Error::UnknownFormat)?;

    let nbformat = obj
        .get("nbformat")
        .and_then(|v| v.as_i64())
        .ok_or(Error::UnknownFormat)?;

    if nbformat != SUPPORTED_NBFORMAT {
        return Err(Error::UnsupportedVersion(nbformat));
    }

    let nbformat_minor = obj
        .get("nbformat_minor")
        .and_then(|v| v.as_i64())
        .unwrap_or(0);

    Ok(NotebookFormat {
        nbformat,
        nbformat_minor,
    })
}

/// Check if a file is a valid notebook.
pub fn is_notebook<P: AsRef<Path>>(path: P) -> bool {
    detect_format_from_path(path).is_ok()
}

/// Check if bytes represent a valid notebook.
pub fn is_notebook_bytes(data: &[u8]) -> bool {
    detect_format_from_bytes(data).is_ok()
}
