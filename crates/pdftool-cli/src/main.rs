//! PDFtool CLI - Command line tool for merging PDFs and deleting pages.

mod interactive;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use pdftool_core::{PageSelection, PdfDocument};
use std::path::{Path, PathBuf};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "pdftool")]
#[command(author, version, about = "Merge PDFs and delete pages from PDFs", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Merge multiple PDF files into one
    Merge {
        /// Input PDF files, in output order (at least 2)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output PDF file (default: merged.pdf)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Delete pages from a PDF file
    Delete {
        /// Input PDF file
        file: PathBuf,

        /// Pages to delete, 1-based (e.g. "1,3-5,7")
        #[arg(short, long)]
        pages: String,

        /// Output PDF file (default: <input>_modified.pdf)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show page count and size of a PDF file
    Info {
        /// PDF file to inspect
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Setup logging
    let log_level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    match args.command {
        Some(Command::Merge { files, output }) => run_merge(&files, output),
        Some(Command::Delete {
            file,
            pages,
            output,
        }) => run_delete(&file, &pages, output),
        Some(Command::Info { file }) => run_info(&file),
        // No subcommand: interactive menu
        None => interactive::run(),
    }
}

fn run_merge(files: &[PathBuf], output: Option<PathBuf>) -> Result<()> {
    for file in files {
        ensure_pdf_path(file)?;
    }

    // Setup progress bar over the input files
    #[allow(clippy::cast_possible_truncation)]
    let pb = ProgressBar::new(files.len() as u64);
    // Template is hardcoded and valid, unwrap is safe
    #[allow(clippy::unwrap_used)]
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    let mut inputs = Vec::with_capacity(files.len());
    for file in files {
        pb.set_message(file.display().to_string());
        let bytes = std::fs::read(file)
            .with_context(|| format!("Failed to read {}", file.display()))?;
        inputs.push(bytes);
        pb.inc(1);
    }
    pb.finish_and_clear();

    let merged = pdftool_core::merge(&inputs).context("Failed to merge PDFs")?;
    let pages = pdftool_core::page_count(&merged)?;

    let output_path = output.unwrap_or_else(|| PathBuf::from("merged.pdf"));
    std::fs::write(&output_path, merged)
        .with_context(|| format!("Failed to write output: {}", output_path.display()))?;

    info!("Merged {} files into {} pages", files.len(), pages);

    // CLI output is intentional
    #[allow(clippy::print_stdout)]
    {
        println!(
            "Merged {} PDFs ({} pages) into: {}",
            files.len(),
            pages,
            output_path.display()
        );
    }

    Ok(())
}

fn run_delete(file: &Path, pages: &str, output: Option<PathBuf>) -> Result<()> {
    ensure_pdf_path(file)?;

    let doc = PdfDocument::from_file(file)
        .with_context(|| format!("Failed to load PDF: {}", file.display()))?;
    let total = doc.page_count();
    info!("Document has {} pages", total);

    let selection = PageSelection::parse(pages, total)?;
    let result = pdftool_core::delete_pages(&doc, &selection)?;

    let output_path = output.unwrap_or_else(|| default_delete_output(file));
    std::fs::write(&output_path, result)
        .with_context(|| format!("Failed to write output: {}", output_path.display()))?;

    #[allow(clippy::print_stdout)]
    {
        println!(
            "Deleted {} pages, kept {}. Output saved to: {}",
            selection.len(),
            total - selection.len(),
            output_path.display()
        );
    }

    Ok(())
}

fn run_info(file: &Path) -> Result<()> {
    ensure_pdf_path(file)?;

    let doc = PdfDocument::from_file(file)
        .with_context(|| format!("Failed to load PDF: {}", file.display()))?;
    let size = std::fs::metadata(file)?.len();

    #[allow(clippy::print_stdout, clippy::cast_precision_loss)]
    {
        println!("File: {}", file.display());
        println!("Pages: {}", doc.page_count());
        println!("Size: {} bytes ({:.1} KiB)", size, size as f64 / 1024.0);
    }

    Ok(())
}

/// The input must exist and carry a .pdf extension (case-insensitive).
fn ensure_pdf_path(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("File not found: {}", path.display());
    }
    if !has_pdf_extension(path) {
        anyhow::bail!("File is not a PDF: {}", path.display());
    }
    Ok(())
}

fn has_pdf_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

/// Default output path for delete: `report.pdf` -> `report_modified.pdf`.
fn default_delete_output(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    input.with_file_name(format!("{stem}_modified.pdf"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_output_named_after_input() {
        assert_eq!(
            default_delete_output(Path::new("report.pdf")),
            PathBuf::from("report_modified.pdf")
        );
        assert_eq!(
            default_delete_output(Path::new("/tmp/docs/a.pdf")),
            PathBuf::from("/tmp/docs/a_modified.pdf")
        );
    }

    #[test]
    fn pdf_extension_is_case_insensitive() {
        assert!(has_pdf_extension(Path::new("a.pdf")));
        assert!(has_pdf_extension(Path::new("a.PDF")));
        assert!(!has_pdf_extension(Path::new("a.txt")));
        assert!(!has_pdf_extension(Path::new("pdf")));
    }

    #[test]
    fn missing_file_rejected() {
        assert!(ensure_pdf_path(Path::new("/nonexistent/x.pdf")).is_err());
    }

    #[test]
    fn existing_pdf_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.pdf");
        std::fs::write(&path, b"%PDF-").unwrap();
        assert!(ensure_pdf_path(&path).is_ok());
    }
}
