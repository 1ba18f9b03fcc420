use std::path::Path;
use std::sync::Arc;

use crate::error::{Error, Result};

/// A validated PDF document held as an opaque byte buffer.
///
/// Construction parses the buffer once to confirm it is a readable PDF and to
/// cache the page count; after that the document is immutable. Every editor
/// operation produces a fresh output buffer and never mutates its inputs.
pub struct PdfDocument {
    /// The raw PDF bytes
    bytes: Arc<Vec<u8>>,
    /// Number of pages, counted once at load time
    page_count: usize,
}

impl PdfDocument {
    /// Open a PDF from bytes.
    ///
    /// A document with zero pages is accepted as a valid degenerate case;
    /// deletion from it always fails because no page could survive.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Result<Self> {
        let bytes = bytes.into();

        let doc = lopdf::Document::load_mem(&bytes).map_err(|e| Error::UnreadableDocument {
            position: 0,
            reason: e.to_string(),
        })?;
        let page_count = doc.get_pages().len();

        Ok(Self {
            bytes: Arc::new(bytes),
            page_count,
        })
    }

    /// Open a PDF from a file path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = std::fs::read(path.as_ref())?;
        Self::from_bytes(bytes)
    }

    /// Get number of pages.
    pub const fn page_count(&self) -> usize {
        self.page_count
    }

    /// Get raw PDF bytes as a slice.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Re-open the document for an editing operation.
    pub(crate) fn open(&self) -> Result<lopdf::Document> {
        lopdf::Document::load_mem(&self.bytes).map_err(|e| Error::UnreadableDocument {
            position: 0,
            reason: e.to_string(),
        })
    }
}

impl AsRef<[u8]> for PdfDocument {
    fn as_ref(&self) -> &[u8] {
        self.bytes()
    }
}

impl Clone for PdfDocument {
    /// O(1): clones the `Arc` pointer to the bytes, not the bytes themselves.
    fn clone(&self) -> Self {
        Self {
            bytes: Arc::clone(&self.bytes),
            page_count: self.page_count,
        }
    }
}

impl std::fmt::Debug for PdfDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PdfDocument")
            .field("page_count", &self.page_count)
            .field("bytes_len", &self.bytes.len())
            .finish()
    }
}
