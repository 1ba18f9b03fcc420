//! Page-count route - report how many pages an uploaded PDF has.

use axum::{http::StatusCode, Json};
use axum_extra::extract::Multipart;
use serde::Serialize;
use tracing::error;

use crate::helpers::{core_error, require_pdf_filename, ResultExt, RouteResult};

#[derive(Serialize)]
pub struct PageCountResponse {
    pub filename: String,
    pub page_count: usize,
}

/// Count the pages of the uploaded `file` and answer with JSON.
pub async fn page_count(mut multipart: Multipart) -> RouteResult<Json<PageCountResponse>> {
    while let Some(field) = multipart.next_field().await.or_bad_request()? {
        let name = field.name().unwrap_or("").to_string();
        if name != "file" {
            continue;
        }

        let filename = field.file_name().unwrap_or("document.pdf").to_string();
        require_pdf_filename(&filename)?;

        let data = field.bytes().await.or_bad_request()?.to_vec();

        let count = tokio::task::spawn_blocking(move || pdftool_core::page_count(&data))
            .await
            .map_err(|e| {
                error!("page-count task panicked: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "PDF parsing failed".to_string(),
                )
            })?
            .map_err(core_error)?;

        return Ok(Json(PageCountResponse {
            filename,
            page_count: count,
        }));
    }

    Err((StatusCode::BAD_REQUEST, "No file uploaded".to_string()))
}
