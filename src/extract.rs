//! Image extraction from notebook outputs.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::model::Notebook;

/// Filename stem for extracted images: `plot_0.png`, `plot_1.png`, ...
const IMAGE_PREFIX: &str = "plot_";

/// Report of a completed extraction run.
#[derive(Debug, Clone, Default)]
pub struct ExtractReport {
    /// Paths written, in document traversal order.
    pub files: Vec<PathBuf>,
}

impl ExtractReport {
    /// Number of images written.
    pub fn count(&self) -> usize {
        self.files.len()
    }

    /// Check if no images were written.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Extract every `image/png` output of `notebook` into `out_dir`.
///
/// The directory is created if absent and reused without clearing
/// otherwise, so same-named files from a previous run are overwritten.
/// Files are named `plot_<N>.png` with N starting at 0 and following
/// document order: cells outer, outputs inner, no gaps. Outputs without
/// a `data` field or without an `image/png` entry are skipped.
///
/// A decode or write failure aborts the run; files already written stay
/// on disk.
///
/// # Example
/// ```no_run
/// use nbextract::{extract_images, parse_file};
///
/// let notebook = parse_file("analysis.ipynb").unwrap();
/// let report = extract_images(&notebook, "images").unwrap();
/// println!("{} images extracted", report.count());
/// ```
pub fn extract_images<P: AsRef<Path>>(notebook: &Notebook, out_dir: P) -> Result<ExtractReport> {
    extract_images_with(notebook, out_dir, |_| {})
}

/// Like [`extract_images`], invoking `on_saved` after each file write so
/// callers can report progress as it happens.
pub fn extract_images_with<P, F>(
    notebook: &Notebook,
    out_dir: P,
    mut on_saved: F,
) -> Result<ExtractReport>
where
    P: AsRef<Path>,
    F: FnMut(&Path),
{
    let out_dir = out_dir.as_ref();
    fs::create_dir_all(out_dir)?;

    let mut report = ExtractReport::default();
    for cell in &notebook.cells {
        for output in &cell.outputs {
            let Some(bytes) = output.decode_png()? else {
                log::debug!("skipping {} output without image/png data", output.output_type);
                continue;
            };
            let path = out_dir.join(format!("{}{}.png", IMAGE_PREFIX, report.count()));
            fs::write(&path, &bytes)?;
            on_saved(&path);
            report.files.push(path);
        }
    }

    log::info!(
        "{} images extracted to {}",
        report.count(),
        out_dir.display()
    );
    Ok(report)
}
