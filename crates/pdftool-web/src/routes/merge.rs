//! Merge route - combine uploaded PDFs into a single download.

use axum::{http::StatusCode, response::Response};
use axum_extra::extract::Multipart;
use tracing::{error, info};

use crate::helpers::{core_error, pdf_attachment, require_pdf_filename, ResultExt, RouteResult};

/// Merge 2+ uploaded PDFs, in upload order.
///
/// Expects multipart fields named `files`. The input-count check lives in
/// the core, so an empty or single-file upload comes back as 400 with the
/// core's message. A malformed part fails the whole request; a merge must
/// never silently drop an input.
pub async fn merge_pdfs(mut multipart: Multipart) -> RouteResult<Response> {
    let mut inputs: Vec<Vec<u8>> = Vec::new();

    while let Some(field) = multipart.next_field().await.or_bad_request()? {
        let name = field.name().unwrap_or("").to_string();
        if name != "files" {
            continue;
        }

        let filename = field.file_name().unwrap_or("document.pdf").to_string();
        require_pdf_filename(&filename)?;

        let data = field.bytes().await.or_bad_request()?;
        inputs.push(data.to_vec());
    }

    let count = inputs.len();

    // Merge in a blocking task to avoid stalling the async runtime
    let merged = tokio::task::spawn_blocking(move || pdftool_core::merge(&inputs))
        .await
        .map_err(|e| {
            error!("merge task panicked: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "PDF merge failed".to_string(),
            )
        })?
        .map_err(core_error)?;

    info!("Merged {} uploaded PDFs ({} bytes)", count, merged.len());

    pdf_attachment("merged.pdf", merged)
}
