//! nbextract CLI - notebook image extraction tool
//!
//! Deliberately argument-free: the input notebook and output directory
//! are fixed, and the tool does one thing against the working directory.

use std::path::Path;
use std::process;

use colored::Colorize;

/// Input notebook, resolved against the working directory.
const INPUT_FILE: &str = "monte_carlo_integration.ipynb";

/// Directory that receives the numbered image files.
const OUTPUT_DIR: &str = "readme_images";

fn main() {
    env_logger::init();

    if let Err(e) = run(Path::new(INPUT_FILE), Path::new(OUTPUT_DIR)) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        process::exit(1);
    }
}

fn run(input: &Path, out_dir: &Path) -> nbextract::Result<()> {
    // A missing input fails here, before the output directory exists
    let notebook = nbextract::parse_file(input)?;
    log::debug!(
        "{}: {} cells, {} images",
        input.display(),
        notebook.cell_count(),
        notebook.image_count()
    );

    let report = nbextract::extract_images_with(&notebook, out_dir, |path| {
        println!("{} {}", "Saved".green(), path.display());
    })?;

    println!(
        "{} {} images extracted",
        "Done —".green().bold(),
        report.count()
    );

    Ok(())
}
