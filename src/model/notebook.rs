//! Notebook-level types.

use super::{Cell, Output};
use serde::{Deserialize, Serialize};

/// A parsed Jupyter notebook.
///
/// Read-only once parsed; extraction never mutates the document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notebook {
    /// Notebook metadata (kernel, language)
    #[serde(default)]
    pub metadata: NotebookMetadata,

    /// nbformat major version
    pub nbformat: i64,

    /// nbformat minor version
    #[serde(default)]
    pub nbformat_minor: i64,

    /// Cells in document order
    #[serde(default)]
    pub cells: Vec<Cell>,
}

impl Notebook {
    /// Get the number of cells in the notebook.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Check if the notebook has any cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over all outputs in document order (cells outer, outputs inner).
    pub fn outputs(&self) -> impl Iterator<Item = &Output> {
        self.cells.iter().flat_map(|cell| cell.outputs.iter())
    }

    /// Count the `image/png` payloads across all cell outputs.
    pub fn image_count(&self) -> usize {
        self.outputs().filter(|output| output.has_png()).count()
    }
}

/// Notebook metadata.
///
/// All fields are optional; sparse or empty metadata objects parse fine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotebookMetadata {
    /// Kernel specification
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kernelspec: Option<KernelSpec>,

    /// Language information
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_info: Option<LanguageInfo>,
}

/// Kernel specification from the notebook metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KernelSpec {
    /// Kernel name (e.g., "python3")
    pub name: String,

    /// Display name shown in the notebook UI
    #[serde(default)]
    pub display_name: String,

    /// Kernel language
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Language information from the notebook metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageInfo {
    /// Language name (e.g., "python")
    pub name: String,

    /// Language version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}
