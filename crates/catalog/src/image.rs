//! Image URL normalization.
//!
//! The backend stores image references in several historical shapes; the
//! client resolves them all to a browser-usable URL with one rule.

/// Prefix of references that already name the static root.
const STATIC_PREFIX: &str = "static/";

/// Marker of upload-relative references.
const UPLOADS_PREFIX: &str = "uploads/";

/// Where bare filenames live.
const DEFAULT_UPLOADS_PATH: &str = "/static/uploads/productos/";

/// Resolve a raw image reference to a usable URL.
///
/// Absolute URLs and root-relative paths pass through unchanged; a
/// `static/` prefix gains the leading slash; an `uploads/` marker is
/// re-rooted under `/static/`; anything else is treated as a bare filename
/// under the default product-uploads path. Empty input resolves to `None`
/// and the renderer substitutes a placeholder.
pub fn resolve_image_url(raw: Option<&str>) -> Option<String> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    if raw.starts_with("http://") || raw.starts_with("https://") {
        return Some(raw.to_string());
    }
    if raw.starts_with('/') {
        return Some(raw.to_string());
    }
    if raw.starts_with(STATIC_PREFIX) {
        return Some(format!("/{raw}"));
    }
    if raw.starts_with(UPLOADS_PREFIX) {
        return Some(format!("/static/{raw}"));
    }
    Some(format!("{DEFAULT_UPLOADS_PATH}{raw}"))
}
