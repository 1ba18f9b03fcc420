//! Delete-pages route - remove a page selection from an uploaded PDF.

use axum::{http::StatusCode, response::Response};
use axum_extra::extract::Multipart;
use pdftool_core::{PageSelection, PdfDocument};
use tracing::{error, info};

use crate::helpers::{core_error, pdf_attachment, require_pdf_filename, ResultExt, RouteResult};

/// Delete the pages named by the `pages` form field from the uploaded `file`.
///
/// The selection string is validated against the uploaded document's actual
/// page count; any parse or bounds failure is a 400 carrying the offending
/// token or page number.
pub async fn delete_pages(mut multipart: Multipart) -> RouteResult<Response> {
    let mut file: Option<Vec<u8>> = None;
    let mut pages: Option<String> = None;

    while let Some(field) = multipart.next_field().await.or_bad_request()? {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or("document.pdf").to_string();
                require_pdf_filename(&filename)?;
                file = Some(field.bytes().await.or_bad_request()?.to_vec());
            }
            "pages" => {
                pages = Some(field.text().await.or_bad_request()?);
            }
            _ => {}
        }
    }

    let file = file.ok_or_else(|| (StatusCode::BAD_REQUEST, "No file uploaded".to_string()))?;
    let pages = pages.ok_or_else(|| {
        (
            StatusCode::BAD_REQUEST,
            "Pages parameter is required".to_string(),
        )
    })?;

    let result = tokio::task::spawn_blocking(move || {
        let doc = PdfDocument::from_bytes(file)?;
        let selection = PageSelection::parse(&pages, doc.page_count())?;
        let remaining = doc.page_count() - selection.len();
        let bytes = pdftool_core::delete_pages(&doc, &selection)?;
        Ok::<_, pdftool_core::Error>((bytes, selection.len(), remaining))
    })
    .await
    .map_err(|e| {
        error!("delete task panicked: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "PDF page deletion failed".to_string(),
        )
    })?
    .map_err(core_error)?;

    let (bytes, deleted, remaining) = result;
    info!("Deleted {} pages, {} remaining", deleted, remaining);

    pdf_attachment("modified.pdf", bytes)
}
