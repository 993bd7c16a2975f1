//! Document preview URL resolution.
//!
//! A record's document reference is either a bare file name served by the
//! backend's `/documents` route or a full external URL. Google Drive
//! share links additionally need their `/view` suffix rewritten to
//! `/preview` before they render inside an inline frame.

#[cfg(test)]
#[path = "preview_test.rs"]
mod preview_test;

/// Resolve a record's document reference into an embeddable URL.
/// `api_base` is the API base URL (its trailing `/api` segment is the
/// server root). Returns `None` when there is nothing to preview.
#[must_use]
pub fn preview_url(api_base: &str, document_url: &str) -> Option<String> {
    let reference = document_url.trim();
    if reference.is_empty() {
        return None;
    }

    if reference.starts_with("http") {
        if reference.contains("drive.google.com/file/d/") {
            return Some(reference.replace("/view", "/preview"));
        }
        return Some(reference.to_owned());
    }

    let server = api_base
        .trim_end_matches('/')
        .trim_end_matches("/api")
        .trim_end_matches('/');
    Some(format!("{server}/documents/{reference}"))
}
