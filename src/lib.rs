//! # nbextract
//!
//! Extract embedded PNG images from Jupyter notebook cell outputs.
//!
//! Notebooks store the plots rendered during execution as base64-encoded
//! `image/png` payloads inside cell output records. This library parses
//! the notebook JSON, walks its cells and outputs in document order, and
//! writes each image to a sequentially numbered file.
//!
//! ## Quick Start
//!
//! ```no_run
//! use nbextract::extract_file;
//!
//! fn main() -> nbextract::Result<()> {
//!     // Parse a notebook and write its images to a directory
//!     let report = extract_file("analysis.ipynb", "images")?;
//!     println!("{} images extracted", report.count());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Ordered extraction**: files are numbered in strict document order
//!   (cells outer, outputs inner), with no gaps
//! - **Format detection**: nbformat version checking before parsing
//! - **Line-wrapped payloads**: handles both string and array-of-lines
//!   base64 forms written by nbformat

pub mod detect;
pub mod error;
pub mod extract;
pub mod model;
pub mod parser;

// Re-export commonly used types
pub use detect::{
    detect_format_from_bytes, detect_format_from_path, is_notebook, is_notebook_bytes,
    NotebookFormat,
};
pub use error::{Error, Result};
pub use extract::{extract_images, extract_images_with, ExtractReport};
pub use model::{
    Cell, CellType, KernelSpec, LanguageInfo, MimeBundle, Notebook, NotebookMetadata, Output,
    OutputType, Source, IMAGE_PNG,
};
pub use parser::NotebookParser;

use std::io::Read;
use std::path::Path;

/// Parse a notebook file and return a structured document.
///
/// # Arguments
///
/// * `path` - Path to the notebook file
///
/// # Returns
///
/// A `Result` containing the parsed `Notebook` or an error.
///
/// # Example
///
/// ```no_run
/// use nbextract::parse_file;
///
/// let nb = parse_file("analysis.ipynb").unwrap();
/// println!("Cells: {}", nb.cell_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Notebook> {
    let parser = NotebookParser::open(path)?;
    parser.parse()
}

/// Parse a notebook from bytes.
///
/// # Example
///
/// ```no_run
/// use nbextract::parse_bytes;
///
/// let data = std::fs::read("analysis.ipynb").unwrap();
/// let nb = parse_bytes(&data).unwrap();
/// ```
pub fn parse_bytes(data: &[u8]) -> Result<Notebook> {
    let parser = NotebookParser::from_bytes(data)?;
    parser.parse()
}

/// Parse a notebook from a reader.
///
/// # Example
///
/// ```no_run
/// use nbextract::parse_reader;
/// use std::fs::File;
///
/// let file = File::open("analysis.ipynb").unwrap();
/// let nb = parse_reader(file).unwrap();
/// ```
pub fn parse_reader<R: Read>(reader: R) -> Result<Notebook> {
    let parser = NotebookParser::from_reader(reader)?;
    parser.parse()
}

/// Parse a notebook file and extract its images in one call.
///
/// A missing or unreadable input fails before the output directory is
/// created.
///
/// # Example
///
/// ```no_run
/// use nbextract::extract_file;
///
/// let report = extract_file("analysis.ipynb", "images").unwrap();
/// for path in &report.files {
///     println!("Saved {}", path.display());
/// }
/// ```
pub fn extract_file<P, Q>(input: P, out_dir: Q) -> Result<ExtractReport>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let notebook = parse_file(input)?;
    extract_images(&notebook, out_dir)
}
