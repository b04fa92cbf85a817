//! Notebook document parsing.

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::detect::detect_format_from_bytes;
use crate::error::Result;
use crate::model::Notebook;

/// Jupyter notebook parser.
///
/// Holds the raw document bytes after a format check; [`parse`](Self::parse)
/// turns them into a [`Notebook`]. A structurally invalid document is a
/// fatal error with no recovery attempt.
pub struct NotebookParser {
    data: Vec<u8>,
}

impl NotebookParser {
    /// Open a notebook file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = fs::read(path)?;
        Self::from_owned_bytes(data)
    }

    /// Parse a notebook from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_owned_bytes(data.to_vec())
    }

    /// Parse a notebook from a reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_owned_bytes(data)
    }

    fn from_owned_bytes(data: Vec<u8>) -> Result<Self> {
        // Verify it's a notebook before deserializing the full document
        detect_format_from_bytes(&data)?;
        Ok(Self { data })
    }

    /// Parse the document into a structured [`Notebook`].
    pub fn parse(&self) -> Result<Notebook> {
        let notebook: Notebook = serde_json::from_slice(&self.data)?;
        log::debug!(
            "parsed notebook: nbformat {}.{}, {} cells, {} images",
            notebook.nbformat,
            notebook.nbformat_minor,
            notebook.cell_count(),
            notebook.image_count()
        );
        Ok(notebook)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_parse_minimal_notebook() {
        let parser =
            NotebookParser::from_bytes(br#"{"nbformat": 4, "nbformat_minor": 5, "cells": []}"#)
                .unwrap();
        let nb = parser.parse().unwrap();
        assert!(nb.is_empty());
        assert_eq!(nb.nbformat, 4);
    }

    #[test]
    fn test_parse_non_notebook_bytes() {
        let result = NotebookParser::from_bytes(b"not a notebook");
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_parse_from_reader() {
        let data: &[u8] = br#"{"nbformat": 4, "cells": []}"#;
        let parser = NotebookParser::from_reader(data).unwrap();
        assert!(parser.parse().is_ok());
    }

    #[test]
    fn test_open_missing_file() {
        let result = NotebookParser::open("no_such_notebook.ipynb");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
