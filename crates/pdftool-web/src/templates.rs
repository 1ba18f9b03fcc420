//! Askama templates for the server-rendered pages.
//!
//! The forms post directly to the `/api/*` endpoints as plain multipart
//! submissions, so the page works without JavaScript; PDF responses arrive
//! as browser downloads.

use askama::Template;
use askama_web::WebTemplate;

/// Landing page with merge, delete-pages, and page-count forms.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate;
