//! Cell types.

use super::Output;
use serde::{Deserialize, Serialize};

/// One unit within the notebook, optionally carrying recorded outputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cell {
    /// Cell kind (code, markdown, raw)
    pub cell_type: CellType,

    /// Cell source text
    #[serde(default)]
    pub source: Source,

    /// Recorded outputs, in execution order. Markdown and raw cells
    /// carry none; the field is simply absent in their JSON.
    #[serde(default)]
    pub outputs: Vec<Output>,

    /// Execution counter for code cells (null until executed)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_count: Option<i64>,
}

impl Cell {
    /// Check if this is a code cell.
    pub fn is_code(&self) -> bool {
        matches!(self.cell_type, CellType::Code)
    }

    /// Get the cell source as a single string.
    pub fn source_text(&self) -> String {
        self.source.as_text()
    }
}

/// Kind of notebook cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellType {
    /// Executable code cell
    Code,
    /// Markdown prose cell
    Markdown,
    /// Raw passthrough cell
    Raw,
    /// Any other cell type (nbformat v3 heading cells and the like)
    #[serde(other)]
    Other,
}

impl std::fmt::Display for CellType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellType::Code => write!(f, "code"),
            CellType::Markdown => write!(f, "markdown"),
            CellType::Raw => write!(f, "raw"),
            CellType::Other => write!(f, "other"),
        }
    }
}

/// Cell or output text.
///
/// The notebook format stores text as either a single string or an
/// array of line strings (lines keep their trailing newlines).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Source {
    /// Single-string form
    Text(String),
    /// Array-of-lines form
    Lines(Vec<String>),
}

impl Source {
    /// Join to a single string. The array form concatenates without
    /// separators since each line already ends in a newline.
    pub fn as_text(&self) -> String {
        match self {
            Source::Text(s) => s.clone(),
            Source::Lines(lines) => lines.concat(),
        }
    }

    /// Check if the source holds no text.
    pub fn is_empty(&self) -> bool {
        match self {
            Source::Text(s) => s.is_empty(),
            Source::Lines(lines) => lines.iter().all(|line| line.is_empty()),
        }
    }
}

impl Default for Source {
    fn default() -> Self {
        Source::Text(String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_string_form() {
        let source: Source = serde_json::from_str(r#""x = 1\ny = 2\n""#).unwrap();
        assert_eq!(source.as_text(), "x = 1\ny = 2\n");
    }

    #[test]
    fn test_source_lines_form() {
        let source: Source = serde_json::from_str(r#"["x = 1\n", "y = 2\n"]"#).unwrap();
        assert_eq!(source.as_text(), "x = 1\ny = 2\n");
    }

    #[test]
    fn test_source_empty() {
        assert!(Source::default().is_empty());
        assert!(Source::Lines(vec![]).is_empty());
        assert!(!Source::Text("x".to_string()).is_empty());
    }

    #[test]
    fn test_markdown_cell_without_outputs() {
        let cell: Cell = serde_json::from_str(
            r##"{"cell_type": "markdown", "source": ["# Title\n"], "metadata": {}}"##,
        )
        .unwrap();
        assert_eq!(cell.cell_type, CellType::Markdown);
        assert!(cell.outputs.is_empty());
        assert!(cell.execution_count.is_none());
    }

    #[test]
    fn test_unknown_cell_type() {
        let cell: Cell =
            serde_json::from_str(r#"{"cell_type": "heading", "source": "Intro"}"#).unwrap();
        assert_eq!(cell.cell_type, CellType::Other);
    }
}
