//! Page routes - server-rendered HTML.

use crate::templates::IndexTemplate;

/// Landing page with the merge / delete / page-count forms.
pub async fn index() -> IndexTemplate {
    IndexTemplate
}
