//! Helper types and traits for cleaner route handlers.
//!
//! Provides extension traits for converting `Result` types into
//! HTTP-appropriate error responses, reducing boilerplate in routes.

use axum::{
    body::Body,
    http::{header, StatusCode},
    response::Response,
};

/// Standard result type for route handlers.
pub type RouteResult<T> = Result<T, (StatusCode, String)>;

/// Extension trait for converting `Result<T, E>` to `RouteResult<T>`.
pub trait ResultExt<T, E: std::fmt::Display> {
    /// Converts the error to 500 Internal Server Error.
    fn or_internal_error(self) -> RouteResult<T>;

    /// Converts the error to 400 Bad Request.
    fn or_bad_request(self) -> RouteResult<T>;
}

impl<T, E: std::fmt::Display> ResultExt<T, E> for Result<T, E> {
    fn or_internal_error(self) -> RouteResult<T> {
        self.map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
    }

    fn or_bad_request(self) -> RouteResult<T> {
        self.map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))
    }
}

/// Map a core error to a response: caller mistakes become 400, everything
/// else 500. The error's display text carries the offending token/number.
pub fn core_error(e: pdftool_core::Error) -> (StatusCode, String) {
    let status = if e.is_validation() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (status, e.to_string())
}

/// Uploaded filenames must end in .pdf (case-insensitive).
pub fn require_pdf_filename(filename: &str) -> RouteResult<()> {
    if filename.to_ascii_lowercase().ends_with(".pdf") {
        Ok(())
    } else {
        Err((
            StatusCode::BAD_REQUEST,
            format!("File {filename} is not a PDF"),
        ))
    }
}

/// Build an `application/pdf` download response.
pub fn pdf_attachment(filename: &str, bytes: Vec<u8>) -> RouteResult<Response> {
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/pdf")
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        )
        .body(Body::from(bytes))
        .or_internal_error()
}
