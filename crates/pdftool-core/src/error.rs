use thiserror::Error;

/// Unified error type for pdftool-core
///
/// One variant per failure kind so callers can match on the kind instead of
/// string-matching messages. Page numbers in messages are 1-based (the
/// user-facing convention); indices stored in a `PageSelection` are 0-based.
#[derive(Error, Debug)]
pub enum Error {
    // ==========================================================================
    // Page selection errors
    // ==========================================================================
    /// The page-selection string was empty or whitespace-only
    #[error("no pages specified")]
    EmptySelection,

    /// A token did not match the number-or-range grammar
    #[error("invalid page selection token: '{token}'")]
    MalformedToken { token: String },

    /// A range's start exceeded its end
    #[error("invalid page range: start {start} is greater than end {end}")]
    InvalidRange { start: usize, end: usize },

    /// A referenced page number fell outside the document
    #[error("page {page} out of bounds (valid pages: 1-{total})")]
    PageOutOfBounds { page: usize, total: usize },

    // ==========================================================================
    // Document operation errors
    // ==========================================================================
    /// Merge was called with fewer than 2 documents
    #[error("at least 2 documents are required to merge (got {given})")]
    InsufficientInputs { given: usize },

    /// A document buffer could not be parsed as a PDF
    #[error("failed to parse PDF document {}: {reason}", position + 1)]
    UnreadableDocument { position: usize, reason: String },

    /// A deletion would leave no pages behind
    #[error("cannot delete all {total} pages; at least one page must remain")]
    CannotDeleteAllPages { total: usize },

    /// The codec failed to serialize the result
    #[error("failed to save PDF: {0}")]
    PdfSave(String),

    // ==========================================================================
    // I/O errors
    // ==========================================================================
    /// General I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether the failure was caused by bad caller input rather than an
    /// internal fault. Front-ends use this to pick an HTTP status / exit code.
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmptySelection
                | Self::MalformedToken { .. }
                | Self::InvalidRange { .. }
                | Self::PageOutOfBounds { .. }
                | Self::InsufficientInputs { .. }
                | Self::UnreadableDocument { .. }
                | Self::CannotDeleteAllPages { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
