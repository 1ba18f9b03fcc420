//! PDFtool Core Library
//!
//! This library provides the core operations for basic PDF manipulation:
//! - Page-selection parsing and validation ("1,3-5,7" -> zero-based indices)
//! - Merging multiple PDFs into one
//! - Deleting a set of pages from a PDF
//! - Reporting page counts
//!
//! All operations are synchronous and stateless: each call reads its own
//! input buffers and produces its own output buffer. Failures are typed (one
//! [`Error`] variant per failure kind) and reported immediately; the library
//! never retries, logs a user-facing message, or returns partial output.

pub mod document;
pub mod editor;
pub mod error;
pub mod selection;

#[cfg(test)]
pub(crate) mod test_support;

pub use document::PdfDocument;
pub use editor::{delete_pages, merge, page_count};
pub use error::{Error, Result};
pub use selection::PageSelection;
