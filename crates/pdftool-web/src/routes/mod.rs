//! HTTP route handlers for the PDFtool web application.
//!
//! `/` serves a plain HTML upload page (Askama); the `/api/*` endpoints
//! return binary PDF attachments or JSON.

mod delete;
mod info;
mod merge;
mod pages;

pub use delete::delete_pages;
pub use info::page_count;
pub use merge::merge_pdfs;
pub use pages::index;
