//! Integration tests for image extraction.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::{json, Value};
use tempfile::TempDir;

use nbextract::{extract_file, extract_images, extract_images_with, parse_bytes, Error, Notebook};

/// PNG-signature-prefixed payload, tagged so files stay distinguishable.
fn png_payload(tag: u8) -> Vec<u8> {
    let mut bytes = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
    bytes.extend_from_slice(&[tag; 4]);
    bytes
}

fn png_output(tag: u8) -> Value {
    json!({
        "output_type": "display_data",
        "data": { "image/png": STANDARD.encode(png_payload(tag)) },
        "metadata": {}
    })
}

fn text_output(text: &str) -> Value {
    json!({
        "output_type": "execute_result",
        "execution_count": 1,
        "data": { "text/plain": [text] },
        "metadata": {}
    })
}

fn stream_output(text: &str) -> Value {
    json!({
        "output_type": "stream",
        "name": "stdout",
        "text": [text]
    })
}

fn code_cell(outputs: Vec<Value>) -> Value {
    json!({
        "cell_type": "code",
        "execution_count": 1,
        "metadata": {},
        "source": ["plt.show()\n"],
        "outputs": outputs
    })
}

fn notebook(cells: Vec<Value>) -> Notebook {
    let data = serde_json::to_vec(&json!({
        "nbformat": 4,
        "nbformat_minor": 5,
        "metadata": {},
        "cells": cells
    }))
    .unwrap();
    parse_bytes(&data).unwrap()
}

#[test]
fn test_no_images_creates_dir_and_reports_zero() {
    let tmp = TempDir::new().unwrap();
    let out_dir = tmp.path().join("images");

    let nb = notebook(vec![
        json!({"cell_type": "markdown", "source": "# Results\n"}),
        code_cell(vec![stream_output("computing...\n"), text_output("42")]),
    ]);

    let report = extract_images(&nb, &out_dir).unwrap();

    assert_eq!(report.count(), 0);
    assert!(out_dir.is_dir());
    assert_eq!(std::fs::read_dir(&out_dir).unwrap().count(), 0);
}

#[test]
fn test_interleaved_outputs_numbered_in_document_order() {
    let tmp = TempDir::new().unwrap();
    let out_dir = tmp.path().join("images");

    // Three PNG outputs spread across cells, interleaved with non-PNG
    // outputs and a markdown cell
    let nb = notebook(vec![
        code_cell(vec![stream_output("fitting\n"), png_output(1)]),
        json!({"cell_type": "markdown", "source": "## Convergence\n"}),
        code_cell(vec![png_output(2), text_output("<Figure>"), png_output(3)]),
    ]);

    let report = extract_images(&nb, &out_dir).unwrap();

    assert_eq!(report.count(), 3);
    for (i, tag) in [1u8, 2, 3].iter().enumerate() {
        let path = out_dir.join(format!("plot_{}.png", i));
        assert_eq!(report.files[i], path);
        assert_eq!(std::fs::read(&path).unwrap(), png_payload(*tag));
    }
    assert!(!out_dir.join("plot_3.png").exists());
}

#[test]
fn test_round_trip_bytes_exact() {
    let tmp = TempDir::new().unwrap();
    let original: Vec<u8> = (0..=255).collect();

    let nb = notebook(vec![code_cell(vec![json!({
        "output_type": "display_data",
        "data": { "image/png": STANDARD.encode(&original) },
        "metadata": {}
    })])]);

    let report = extract_images(&nb, tmp.path()).unwrap();
    assert_eq!(report.count(), 1);
    assert_eq!(std::fs::read(&report.files[0]).unwrap(), original);
}

#[test]
fn test_rerun_overwrites_by_name() {
    let tmp = TempDir::new().unwrap();
    let out_dir = tmp.path().join("images");

    // First run writes two images
    let first = notebook(vec![code_cell(vec![png_output(1), png_output(2)])]);
    extract_images(&first, &out_dir).unwrap();

    // Second run writes one; numbering restarts at 0, so plot_0.png is
    // overwritten and the stale plot_1.png is left in place
    let second = notebook(vec![code_cell(vec![png_output(9)])]);
    let report = extract_images(&second, &out_dir).unwrap();

    assert_eq!(report.count(), 1);
    assert_eq!(
        std::fs::read(out_dir.join("plot_0.png")).unwrap(),
        png_payload(9)
    );
    assert_eq!(
        std::fs::read(out_dir.join("plot_1.png")).unwrap(),
        png_payload(2)
    );
}

#[test]
fn test_text_only_output_does_not_advance_counter() {
    let tmp = TempDir::new().unwrap();

    let nb = notebook(vec![code_cell(vec![text_output("<Figure>"), png_output(5)])]);

    let report = extract_images(&nb, tmp.path()).unwrap();

    // The skipped text/plain output left no gap in numbering
    assert_eq!(report.count(), 1);
    assert_eq!(
        std::fs::read(tmp.path().join("plot_0.png")).unwrap(),
        png_payload(5)
    );
}

#[test]
fn test_missing_input_file() {
    let tmp = TempDir::new().unwrap();
    let out_dir = tmp.path().join("images");

    let result = extract_file(tmp.path().join("absent.ipynb"), &out_dir);

    assert!(matches!(result, Err(Error::Io(_))));
    assert!(!out_dir.exists());
}

#[test]
fn test_extract_file_end_to_end() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("analysis.ipynb");
    let out_dir = tmp.path().join("images");

    let data = serde_json::to_vec(&json!({
        "nbformat": 4,
        "nbformat_minor": 5,
        "metadata": {},
        "cells": [code_cell(vec![png_output(7)])]
    }))
    .unwrap();
    std::fs::write(&input, data).unwrap();

    let report = extract_file(&input, &out_dir).unwrap();

    assert_eq!(report.count(), 1);
    assert_eq!(
        std::fs::read(out_dir.join("plot_0.png")).unwrap(),
        png_payload(7)
    );
}

#[test]
fn test_callback_fires_per_saved_file_in_order() {
    let tmp = TempDir::new().unwrap();

    let nb = notebook(vec![
        code_cell(vec![png_output(1)]),
        code_cell(vec![text_output("skip"), png_output(2)]),
    ]);

    let mut seen = Vec::new();
    let report = extract_images_with(&nb, tmp.path(), |path| {
        seen.push(path.to_path_buf());
    })
    .unwrap();

    assert_eq!(seen, report.files);
    assert_eq!(seen.len(), 2);
}

#[test]
fn test_corrupt_base64_payload_aborts() {
    let tmp = TempDir::new().unwrap();

    let nb = notebook(vec![code_cell(vec![
        png_output(1),
        json!({
            "output_type": "display_data",
            "data": { "image/png": "%%% not base64 %%%" },
            "metadata": {}
        }),
    ])]);

    let result = extract_images(&nb, tmp.path());

    assert!(matches!(result, Err(Error::ImageDecode(_))));
    // The file written before the failure stays on disk
    assert!(tmp.path().join("plot_0.png").exists());
}
