//! Interactive menu, used when `pdftool` is run without a subcommand.
//!
//! Prompts on stdin for the same merge/delete operations the subcommands
//! expose, re-asking on invalid input instead of exiting.

// A terminal menu is stdout by definition
#![allow(clippy::print_stdout)]

use anyhow::{Context, Result};
use pdftool_core::{PageSelection, PdfDocument};
use std::io::Write;
use std::path::PathBuf;

use crate::{default_delete_output, ensure_pdf_path};

pub fn run() -> Result<()> {
    println!("PDFtool - interactive mode");
    println!("==========================");

    loop {
        println!();
        println!("Choose an option:");
        println!("  1. Merge PDFs");
        println!("  2. Delete pages from a PDF");
        println!("  3. Exit");

        match prompt("Enter your choice (1-3): ")?.as_str() {
            "1" => {
                if let Err(e) = interactive_merge() {
                    println!("Error: {e:#}");
                }
            }
            "2" => {
                if let Err(e) = interactive_delete() {
                    println!("Error: {e:#}");
                }
            }
            "3" => {
                println!("Goodbye!");
                return Ok(());
            }
            other => println!("Invalid choice: '{other}'. Please enter 1, 2, or 3."),
        }
    }
}

fn interactive_merge() -> Result<()> {
    println!();
    println!("=== Merge PDFs ===");
    println!("Enter input files one per line; type 'done' to finish.");

    let mut files: Vec<PathBuf> = Vec::new();
    loop {
        let line = prompt("PDF file path (or 'done'): ")?;
        if line.eq_ignore_ascii_case("done") {
            break;
        }
        if line.is_empty() {
            continue;
        }

        let path = PathBuf::from(line);
        match ensure_pdf_path(&path) {
            Ok(()) => {
                println!("Added: {}", path.display());
                files.push(path);
            }
            Err(e) => println!("{e}"),
        }
    }

    if files.len() < 2 {
        anyhow::bail!("at least 2 PDF files are required for merging");
    }

    let output = prompt_or("Output filename", "merged.pdf")?;

    let mut inputs = Vec::with_capacity(files.len());
    for file in &files {
        inputs.push(
            std::fs::read(file)
                .with_context(|| format!("Failed to read {}", file.display()))?,
        );
    }

    let merged = pdftool_core::merge(&inputs)?;
    std::fs::write(&output, merged)
        .with_context(|| format!("Failed to write output: {output}"))?;

    println!("Merged {} PDFs into: {output}", files.len());
    Ok(())
}

fn interactive_delete() -> Result<()> {
    println!();
    println!("=== Delete pages ===");

    let path = loop {
        let line = prompt("PDF file path: ")?;
        if line.is_empty() {
            continue;
        }
        let path = PathBuf::from(line);
        match ensure_pdf_path(&path) {
            Ok(()) => break path,
            Err(e) => println!("{e}"),
        }
    };

    let doc = PdfDocument::from_file(&path)
        .with_context(|| format!("Failed to load PDF: {}", path.display()))?;
    let total = doc.page_count();
    println!("Document has {total} pages (numbered 1 to {total}).");

    let selection = loop {
        let spec = prompt("Pages to delete (e.g. 1,3-5,7): ")?;
        match PageSelection::parse(&spec, total) {
            Ok(selection) if selection.len() >= total => {
                println!("Cannot delete all pages; at least one page must remain.");
            }
            Ok(selection) => break selection,
            Err(e) => println!("{e}"),
        }
    };

    let default_output = default_delete_output(&path).display().to_string();
    let output = prompt_or("Output filename", &default_output)?;

    let result = pdftool_core::delete_pages(&doc, &selection)?;
    std::fs::write(&output, result)
        .with_context(|| format!("Failed to write output: {output}"))?;

    println!(
        "Deleted {} pages, kept {}. Output saved to: {output}",
        selection.len(),
        total - selection.len()
    );
    Ok(())
}

fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn prompt_or(message: &str, default: &str) -> Result<String> {
    let answer = prompt(&format!("{message} (default: {default}): "))?;
    Ok(if answer.is_empty() {
        default.to_string()
    } else {
        answer
    })
}
