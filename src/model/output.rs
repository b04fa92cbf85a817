//! Output records and their MIME-typed data bundles.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use super::Source;
use crate::error::Result;

/// The MIME key consulted during image extraction.
pub const IMAGE_PNG: &str = "image/png";

/// A record attached to a cell capturing one result of execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Output {
    /// Output kind (stream, execute_result, display_data, error)
    pub output_type: OutputType,

    /// MIME-typed data representations. Stream and error outputs
    /// carry no `data` field; the bundle defaults to empty.
    #[serde(default, skip_serializing_if = "MimeBundle::is_empty")]
    pub data: MimeBundle,

    /// Stream name (stdout/stderr) for stream outputs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Stream text for stream outputs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<Source>,

    /// Execution counter for execute_result outputs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_count: Option<i64>,

    /// Exception name for error outputs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ename: Option<String>,

    /// Exception value for error outputs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evalue: Option<String>,

    /// Traceback lines for error outputs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub traceback: Option<Vec<String>>,
}

impl Output {
    /// Check if this output carries an `image/png` payload.
    pub fn has_png(&self) -> bool {
        self.data.contains(IMAGE_PNG)
    }

    /// Decode the `image/png` payload, if present.
    pub fn decode_png(&self) -> Result<Option<Vec<u8>>> {
        self.data.decode_png()
    }
}

/// Kind of cell output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputType {
    /// Text written to stdout or stderr
    Stream,
    /// Value of the last expression in a cell
    ExecuteResult,
    /// Rich display output (plots, HTML, images)
    DisplayData,
    /// Exception raised during execution
    Error,
    /// Any other output type
    #[serde(other)]
    Other,
}

impl std::fmt::Display for OutputType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputType::Stream => write!(f, "stream"),
            OutputType::ExecuteResult => write!(f, "execute_result"),
            OutputType::DisplayData => write!(f, "display_data"),
            OutputType::Error => write!(f, "error"),
            OutputType::Other => write!(f, "other"),
        }
    }
}

/// Mapping from MIME-type string to payload, as recorded in a cell output.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MimeBundle(BTreeMap<String, Value>);

impl MimeBundle {
    /// Get the raw payload for a MIME type.
    pub fn get(&self, mime: &str) -> Option<&Value> {
        self.0.get(mime)
    }

    /// Check if the bundle holds a payload for a MIME type.
    pub fn contains(&self, mime: &str) -> bool {
        self.0.contains_key(mime)
    }

    /// Check if the bundle is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the MIME types present in the bundle.
    pub fn mime_types(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Decode the base64 payload stored under `mime`, if present.
    ///
    /// Payloads are wrapped at line boundaries in the file (string with
    /// embedded newlines or array of lines); the decoder rejects
    /// whitespace, so it is stripped first.
    pub fn decode_base64(&self, mime: &str) -> Result<Option<Vec<u8>>> {
        let Some(value) = self.get(mime) else {
            return Ok(None);
        };
        let compact: String = payload_text(value)
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect();
        Ok(Some(STANDARD.decode(compact.as_bytes())?))
    }

    /// Decode the `image/png` payload, if present.
    pub fn decode_png(&self) -> Result<Option<Vec<u8>>> {
        self.decode_base64(IMAGE_PNG)
    }
}

/// Flatten a payload to text. Like cell sources, payloads are stored as
/// either a single string or an array of line strings.
fn payload_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(lines) => lines.iter().filter_map(|v| v.as_str()).collect(),
        _ => String::new(),
    }
}
