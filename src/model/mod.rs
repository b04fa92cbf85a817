//! Notebook model types.
//!
//! This module defines the representation of a parsed notebook document:
//! an ordered list of cells, each carrying zero or more recorded outputs,
//! with output data keyed by MIME type. Only the fields extraction needs
//! are modeled; unknown fields in the source JSON are ignored.

mod cell;
mod notebook;
mod output;

pub use cell::{Cell, CellType, Source};
pub use notebook::{KernelSpec, LanguageInfo, Notebook, NotebookMetadata};
pub use output::{MimeBundle, Output, OutputType, IMAGE_PNG};
