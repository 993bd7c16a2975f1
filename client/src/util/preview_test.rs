use super::*;

#[test]
fn local_file_goes_through_documents_route() {
    assert_eq!(
        preview_url("http://localhost:5001/api", "artigo_7.pdf"),
        Some("http://localhost:5001/documents/artigo_7.pdf".to_owned())
    );
}

#[test]
fn relative_api_base_is_supported() {
    assert_eq!(
        preview_url("/api", "artigo.pdf"),
        Some("/documents/artigo.pdf".to_owned())
    );
}

#[test]
fn drive_links_are_rewritten_to_preview() {
    assert_eq!(
        preview_url("/api", "https://drive.google.com/file/d/abc123/view"),
        Some("https://drive.google.com/file/d/abc123/preview".to_owned())
    );
}

#[test]
fn other_external_urls_pass_through() {
    assert_eq!(
        preview_url("/api", "https://example.org/paper.pdf"),
        Some("https://example.org/paper.pdf".to_owned())
    );
}

#[test]
fn blank_reference_has_no_preview() {
    assert_eq!(preview_url("/api", ""), None);
    assert_eq!(preview_url("/api", "   "), None);
}
